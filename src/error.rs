use std::fmt;

#[derive(Debug)]
pub enum NormalizeError {
    // Number spelling errors
    OutOfRange(i64),

    // CLI input/output errors
    Io(std::io::Error),
    FileNotFound(String),
    Json(String),
    InvalidArgument(String),
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::OutOfRange(n) => {
                write!(f, "Number out of range: {} has no spoken magnitude", n)
            }
            NormalizeError::Io(e) => write!(f, "I/O error: {}", e),
            NormalizeError::FileNotFound(path) => write!(f, "File not found: {}", path),
            NormalizeError::Json(msg) => write!(f, "JSON error: {}", msg),
            NormalizeError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for NormalizeError {}

// Conversions
impl From<std::io::Error> for NormalizeError {
    fn from(err: std::io::Error) -> Self {
        NormalizeError::Io(err)
    }
}

impl From<serde_json::Error> for NormalizeError {
    fn from(err: serde_json::Error) -> Self {
        NormalizeError::Json(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NormalizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = NormalizeError::OutOfRange(i64::MIN);
        assert_eq!(
            err.to_string(),
            "Number out of range: -9223372036854775808 has no spoken magnitude"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: NormalizeError = io.into();
        assert!(matches!(err, NormalizeError::Io(_)));
        assert!(err.to_string().contains("boom"));
    }
}
