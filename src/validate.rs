//! Path validation applied to every path before it touches the filesystem
//!
//! A path is accepted only if it carries no URL-encoding, is absolute, and
//! exists on disk. The existence probe is the only filesystem access made
//! here; the file may still disappear before the caller reads it.

use std::fmt;
use std::path::Path;

use serde::Serialize;

/// Why a path was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRejection {
    UrlEncoded,
    NotAbsolute,
    Missing,
}

impl PathRejection {
    pub fn reason(&self) -> &'static str {
        match self {
            PathRejection::UrlEncoded => "The path contains URL-encoding or invalid characters.",
            PathRejection::NotAbsolute => "The path is not absolute.",
            PathRejection::Missing => "The path does not exist on disk.",
        }
    }
}

impl fmt::Display for PathRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

impl std::error::Error for PathRejection {}

/// Outcome of a single validation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathCheck {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<Result<&Path, PathRejection>> for PathCheck {
    fn from(result: Result<&Path, PathRejection>) -> Self {
        match result {
            Ok(_) => Self {
                valid: true,
                reason: None,
            },
            Err(rejection) => Self {
                valid: false,
                reason: Some(rejection.reason().to_string()),
            },
        }
    }
}

/// Validate a path, returning the accepted path or the first rule it breaks.
pub fn check_path(path: &str) -> Result<&Path, PathRejection> {
    if is_url_encoded(path) {
        return Err(PathRejection::UrlEncoded);
    }

    let candidate = Path::new(path);
    if !candidate.is_absolute() {
        return Err(PathRejection::NotAbsolute);
    }
    if !candidate.exists() {
        return Err(PathRejection::Missing);
    }

    Ok(candidate)
}

/// Validate a path and report the result as a [`PathCheck`].
pub fn validate(path: &str) -> PathCheck {
    PathCheck::from(check_path(path))
}

/// A literal `%` is refused outright, as is anything percent-decoding would
/// change or cannot decode.
fn is_url_encoded(path: &str) -> bool {
    if path.contains('%') {
        return true;
    }
    urlencoding::decode(path).map_or(true, |decoded| decoded != path)
}
