use std::{error::Error, fmt::Display};

#[derive(Debug)]
pub enum FolioError {
    ConfigOrigin(String),
    Http(reqwest::Error),
    Status(u16, String),
    Decode(serde_json::Error),
}

impl Display for FolioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigOrigin(origin) => {
                write!(f, "Error: api_origin {:?} is not an http(s) url", origin)
            }
            Self::Http(e) => write!(f, "Error: request failed: {}", e),
            Self::Status(code, endpoint) => {
                write!(f, "Error: {} returned status {}", endpoint, code)
            }
            Self::Decode(e) => write!(f, "Error: unexpected response body: {}", e),
        }
    }
}

impl Error for FolioError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FolioError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e)
    }
}
