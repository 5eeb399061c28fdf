use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("{0}")]
    Api(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("no session token available")]
    MissingToken,

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("unknown {field} value: {value}")]
    UnknownStatus { field: &'static str, value: String },

    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("decode error: {0}")]
    Decode(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl AdminError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        AdminError::Http {
            status,
            message: message.into(),
        }
    }
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> AdminError {
    if err.is_timeout() {
        AdminError::Timeout
    } else {
        AdminError::Transport(err.to_string())
    }
}
