use std::fmt;

pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[inline]
pub fn verify_access(predicate: bool, operation: &str, state: &dyn fmt::Display) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_access(operation, state)
    }
}

#[cold]
pub fn invalid_access<T>(operation: &str, state: &dyn fmt::Display) -> Result<T> {
    Err(crate::error::Error::invalid_access(operation, state))
}
