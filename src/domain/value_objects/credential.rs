//! API credential for the chat-completion endpoint

/// Value shipped in `.env.example`; treated the same as no key at all
pub const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

/// Bearer credential for the remote text-generation API
///
/// Built once from configuration and handed to the conversion service, which
/// skips the network entirely when no usable key is present.
#[derive(Clone, PartialEq, Eq)]
pub enum ApiCredential {
    Missing,
    Present(String),
}

impl ApiCredential {
    /// Interpret a raw configuration value. Absent, blank and placeholder
    /// values all mean "no credential".
    pub fn from_optional(value: Option<String>) -> Self {
        match value {
            Some(key) => {
                let key = key.trim();
                if key.is_empty() || key == PLACEHOLDER_API_KEY {
                    Self::Missing
                } else {
                    Self::Present(key.to_string())
                }
            }
            None => Self::Missing,
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        match self {
            Self::Present(key) => Some(key),
            Self::Missing => None,
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

// Keeps the key out of logs
impl std::fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "ApiCredential::Missing"),
            Self::Present(_) => write!(f, "ApiCredential::Present(***)"),
        }
    }
}
