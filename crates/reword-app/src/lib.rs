pub mod deeplink;
pub mod state;

pub use deeplink::StartupIntent;
pub use state::StateManager;
