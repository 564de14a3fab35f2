//! Error types for the PDF writer.
//!
//! Rasterization, wrapping and sanitization are total over their inputs, so the
//! only failures a caller sees are released resources, sink I/O and bad
//! configuration input.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a PDF.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A resource was used after it was released
    #[error("Resource disposed: {0}")]
    ResourceDisposed(&'static str),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error (configuration or content description)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Pixel text scale outside the supported range
    #[error("Invalid pixel text scale: {0} (expected 1-5)")]
    InvalidScale(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_disposed_error() {
        let err = Error::ResourceDisposed("pixel buffer");
        let msg = format!("{}", err);
        assert!(msg.contains("Resource disposed"));
        assert!(msg.contains("pixel buffer"));
    }

    #[test]
    fn test_invalid_scale_error() {
        let msg = format!("{}", Error::InvalidScale(9));
        assert!(msg.contains('9'));
        assert!(msg.contains("1-5"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(format!("{}", err).contains("sink closed"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
