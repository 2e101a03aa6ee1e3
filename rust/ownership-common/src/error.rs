use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Access to a cell through `operation` while it is in `state`.
    pub fn invalid_access(operation: impl Into<String>, state: impl ToString) -> Error {
        Error(
            ErrorKind::InvalidAccess {
                operation: operation.into(),
                state: state.to_string(),
            }
            .into(),
        )
    }

    pub fn is_invalid_access(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidAccess { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid access: {operation} on a cell in '{state}' state")]
    InvalidAccess { operation: String, state: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
