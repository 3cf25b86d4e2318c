//! Asset error types
//!
//! Errors raised while loading the boat mesh from disk.

use std::io;
use std::fmt;

/// Error type for asset operations
#[derive(Debug)]
pub enum AssetError {
    /// IO error (permission denied, unreadable file, etc.)
    Io(io::Error),
    /// Parse error (invalid file format, malformed OBJ)
    Parse(String),
    /// The file does not exist
    NotFound(String),
    /// The file parsed but contains no triangles
    Empty(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io(err) => write!(f, "Asset IO error: {}", err),
            AssetError::Parse(msg) => write!(f, "Asset parse error: {}", msg),
            AssetError::NotFound(path) => write!(f, "Asset not found: {}", path),
            AssetError::Empty(path) => write!(f, "Asset has no triangles: {}", path),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io(err) => Some(err),
            AssetError::Parse(_) => None,
            AssetError::NotFound(_) => None,
            AssetError::Empty(_) => None,
        }
    }
}

impl From<io::Error> for AssetError {
    fn from(err: io::Error) -> Self {
        AssetError::Io(err)
    }
}

impl From<tobj::LoadError> for AssetError {
    fn from(err: tobj::LoadError) -> Self {
        AssetError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let asset_err = AssetError::Io(io_err);
        let msg = format!("{}", asset_err);
        assert!(msg.contains("IO error"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn test_parse_error_display() {
        let err = AssetError::Parse("bad face index".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("parse error"));
        assert!(msg.contains("bad face index"));
    }

    #[test]
    fn test_not_found_error_display() {
        let err = AssetError::NotFound("models/boat.obj".to_string());
        assert_eq!(format!("{}", err), "Asset not found: models/boat.obj");
    }

    #[test]
    fn test_empty_error_display() {
        let err = AssetError::Empty("empty.obj".to_string());
        assert!(format!("{}", err).contains("empty.obj"));
    }

    #[test]
    fn test_source() {
        let err = AssetError::Io(io::Error::new(io::ErrorKind::Other, "x"));
        assert!(err.source().is_some());
        assert!(AssetError::NotFound("x".into()).source().is_none());
    }

    #[test]
    fn test_from_io_error() {
        let err: AssetError = io::Error::new(io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, AssetError::Io(_)));
    }
}
