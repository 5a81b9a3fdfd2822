use crate::error::RewordError;

pub type RewordResult<T> = Result<T, RewordError>;
