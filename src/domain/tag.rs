use crate::domain::Version;
use crate::error::{Result, TagReleaseError};
use regex::Regex;
use std::fmt;

/// An application-namespaced release tag: `{application}-{major}.{minor}.{patch}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppTag {
    pub application: String,
    pub version: Version,
}

impl AppTag {
    /// Create a tag from its parts
    pub fn new(application: impl Into<String>, version: Version) -> Self {
        AppTag {
            application: application.into(),
            version,
        }
    }

    /// Parse a full tag string (e.g., "svc-1.2.3")
    ///
    /// The version is the trailing `X.Y.Z` suffix; everything before the last
    /// separator belongs to the application name.
    pub fn parse(tag: &str) -> Result<Self> {
        let re = Regex::new(r"^(.+)-(\d+\.\d+\.\d+)$")
            .map_err(|e| TagReleaseError::malformed_tag(tag, e.to_string()))?;

        let captures = re.captures(tag).ok_or_else(|| {
            TagReleaseError::malformed_tag(tag, "expected {application}-{major}.{minor}.{patch}")
        })?;

        let application = captures[1].to_string();
        let version = Version::parse(&captures[2])?;

        Ok(AppTag {
            application,
            version,
        })
    }
}

impl fmt::Display for AppTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.application, self.version)
    }
}
