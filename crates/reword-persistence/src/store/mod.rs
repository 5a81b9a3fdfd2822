pub mod json_slice_store;

pub use json_slice_store::JsonSliceStore;
