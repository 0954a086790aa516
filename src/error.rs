use std::io;

/// Fatal server errors. Handlers never fail, so these are the only errors the
/// process can report.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind listener on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_bind_error_reports_address_and_cause() {
        let err = ServerError::Bind {
            addr: "0.0.0.0:8080".to_string(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to bind listener on 0.0.0.0:8080: address in use"
        );
        assert!(err.source().is_some());
    }
}
