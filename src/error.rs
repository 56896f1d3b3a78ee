//! Error types for the particld RPC client.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Result type alias for the RPC client.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error returned by [`Transport`](crate::Transport) implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur when using the particld RPC client.
#[derive(Debug, Error)]
pub enum Error {
    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file is not valid JSON or has mistyped fields.
    #[error("syntax error in config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The `.cookie` credential file could not be read.
    #[error("failed to read cookie file {}: {source}", .path.display())]
    CredentialRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The request envelope could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The configured host/port/wallet do not form a valid URL.
    #[error("invalid RPC url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The POST failed before any response was received.
    #[error("post failed: {0}")]
    Transport(#[source] BoxError),

    /// The daemon answered with a status other than 200.
    #[error("bad response status: {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    /// The response body is not a valid envelope or does not match the result type.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The daemon reported an error in the response envelope.
    #[error("RPC response error: {message}")]
    Rpc { code: Option<i64>, message: String },

    /// A facade command failed; `source` holds the underlying error.
    #[error("{command} failed: {source}")]
    Command {
        command: &'static str,
        #[source]
        source: Box<Error>,
    },
}

/// The root kind of an [`Error`], with `Command` context stripped.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    ConfigRead,
    ConfigParse,
    CredentialRead,
    Encode,
    InvalidUrl,
    Transport,
    HttpStatus,
    Decode,
    Rpc,
}

impl Error {
    /// Wraps `self` with the name of the failing command.
    pub(crate) fn context(self, command: &'static str) -> Self {
        Error::Command {
            command,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, looking through `Command` wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Error::Command { source, .. } => source.root(),
            e => e,
        }
    }

    /// Returns the name of the facade command that failed, if any.
    pub fn command(&self) -> Option<&'static str> {
        match self {
            Error::Command { command, .. } => Some(command),
            _ => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ConfigRead { .. } => ErrorKind::ConfigRead,
            Error::ConfigParse { .. } => ErrorKind::ConfigParse,
            Error::CredentialRead { .. } => ErrorKind::CredentialRead,
            Error::Encode(_) => ErrorKind::Encode,
            Error::InvalidUrl(_) => ErrorKind::InvalidUrl,
            Error::Transport(_) => ErrorKind::Transport,
            Error::HttpStatus { .. } => ErrorKind::HttpStatus,
            Error::Decode(_) => ErrorKind::Decode,
            Error::Rpc { .. } => ErrorKind::Rpc,
            Error::Command { source, .. } => source.kind(),
        }
    }

    /// True if the daemon itself reported the error.
    pub fn is_rpc(&self) -> bool {
        self.kind() == ErrorKind::Rpc
    }

    /// True for network and HTTP protocol failures.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind(), ErrorKind::Transport | ErrorKind::HttpStatus)
    }

    /// The daemon's error message, if this is an RPC error.
    pub fn rpc_message(&self) -> Option<&str> {
        match self.root() {
            Error::Rpc { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn command_context_keeps_root_kind() {
        let err = Error::Rpc {
            code: None,
            message: "boom".to_string(),
        }
        .context("uptime");

        assert_eq!(err.kind(), ErrorKind::Rpc);
        assert_eq!(err.command(), Some("uptime"));
        assert_eq!(err.rpc_message(), Some("boom"));
        assert_eq!(err.to_string(), "uptime failed: RPC response error: boom");
    }

    #[test]
    fn nested_context_keeps_root_kind() {
        let err = Error::HttpStatus {
            status: 401,
            reason: "Unauthorized".to_string(),
        }
        .context("getstakinginfo")
        .context("refresh");

        assert_eq!(err.kind(), ErrorKind::HttpStatus);
        assert_eq!(err.command(), Some("refresh"));
        assert!(matches!(err.root(), Error::HttpStatus { status: 401, .. }));
    }

    #[test]
    fn http_status_has_no_source() {
        let err = Error::HttpStatus {
            status: 500,
            reason: "Internal Server Error".to_string(),
        };

        assert!(err.source().is_none());
        assert!(err.is_transport());
        assert!(!err.is_rpc());
        assert_eq!(err.to_string(), "bad response status: 500 Internal Server Error");
    }
}
