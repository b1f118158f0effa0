use std::fmt;

/// Wrapper for `reqwest::Error` whose display output never contains the
/// request URL, as endpoint URLs routinely embed provider API keys.
#[derive(Debug)]
pub struct ReqwestError(reqwest::Error);

impl From<reqwest::Error> for ReqwestError {
    fn from(error: reqwest::Error) -> Self {
        Self(error)
    }
}

impl From<ReqwestError> for reqwest::Error {
    fn from(error: ReqwestError) -> Self {
        error.0
    }
}

impl fmt::Display for ReqwestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(url) = self.0.url() {
            let sanitized = self.0.to_string().replace(url.as_str(), "<endpoint>");
            f.write_str(&sanitized)
        } else {
            self.0.fmt(f)
        }
    }
}

impl std::error::Error for ReqwestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}
