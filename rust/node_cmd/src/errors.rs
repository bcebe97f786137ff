use thiserror::Error;

/// Reasons a `host:port` pair can fail to split.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostPortError {
    #[error("missing port in address")]
    MissingPort,
    #[error("too many colons in address")]
    TooManyColons,
    #[error("missing ']' in address")]
    MissingBracket,
    #[error("unexpected '[' or ']' in address")]
    UnexpectedBracket,
    #[error("missing host in address")]
    EmptyHost,
    #[error("invalid port {0:?}")]
    InvalidPort(String),
}

/// Failures produced while validating a remote core address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("malformed address: {0}")]
    MalformedUri(#[source] url::ParseError),

    #[error("both protocol and host must be present in the address")]
    MissingSchemeOrHost,

    #[error("incorrect address provided for remote core {host:?}: {reason}")]
    InvalidHostPort {
        host: String,
        #[source]
        reason: HostPortError,
    },
}

pub type CoreFlagResult<T> = Result<T, CoreFlagError>;

#[derive(Debug, Error)]
pub enum CoreFlagError {
    /// The remote core address was rejected; names the flag it came from.
    #[error("cmd: while parsing '{flag}': {source}")]
    Flag {
        flag: &'static str,
        #[source]
        source: AddressError,
    },

    // The gRPC endpoint path hands back the parser's error as-is.
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

impl CoreFlagError {
    pub fn flag(flag: &'static str, source: AddressError) -> Self {
        Self::Flag { flag, source }
    }
}
