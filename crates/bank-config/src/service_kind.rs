//! Which of the bank services this process runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical name under which the profile service is discovered.
pub const PROFILE_APP: &str = "profile-app";

/// Logical name under which the public-info service is discovered.
pub const PUBLIC_INFO_APP: &str = "public-info-app";

/// The service a process boots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    /// Bank details, certificates and licenses.
    #[default]
    PublicInfo,
    /// Account details plus lookups into profile and public-info.
    Account,
}

impl ServiceKind {
    /// Name this service registers under.
    #[must_use]
    pub const fn app_name(&self) -> &'static str {
        match self {
            Self::PublicInfo => PUBLIC_INFO_APP,
            Self::Account => "account-app",
        }
    }

    /// Sibling services this service calls.
    #[must_use]
    pub const fn dependencies(&self) -> &'static [&'static str] {
        match self {
            Self::PublicInfo => &[],
            Self::Account => &[PROFILE_APP, PUBLIC_INFO_APP],
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PublicInfo => write!(f, "public-info"),
            Self::Account => write!(f, "account"),
        }
    }
}

impl FromStr for ServiceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "public-info" | "public_info" | "publicinfo" => Ok(Self::PublicInfo),
            "account" => Ok(Self::Account),
            other => Err(format!("Unknown service '{}' (expected public-info or account)", other)),
        }
    }
}
