//! Unified error type.

use std::net::AddrParseError;

/// The error type returned by chirpy's fallible infrastructure operations.
///
/// Application-level failures (a too-long chirp, a malformed body, a missing
/// file) are expressed as HTTP [`Response`](crate::Response) values, not as
/// `Error`s. This type surfaces the failures that stop the server itself:
/// parsing the listen address, binding to a port, accepting a connection.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid socket address `{addr}`: {source}")]
    Addr {
        addr: String,
        #[source]
        source: AddrParseError,
    },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_and_display() {
        let err: Error = std::io::Error::other("boom").into();
        assert_eq!(err.to_string(), "io: boom");
    }

    #[test]
    fn addr_error_names_the_address() {
        let source = "nope".parse::<std::net::SocketAddr>().unwrap_err();
        let err = Error::Addr { addr: "nope".to_owned(), source };
        assert!(err.to_string().starts_with("invalid socket address `nope`"));
    }
}
