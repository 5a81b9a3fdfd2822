pub mod config;
pub mod error;
pub mod logging;
pub mod result;

pub use config::RewordConfig;
pub use error::RewordError;
pub use result::RewordResult;
