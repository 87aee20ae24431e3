//! Supported skill locales.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A locale the artifact set can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "de-DE")]
    DeDe,
}

impl Locale {
    /// Every supported locale tag, in declaration order.
    pub const ALL_TAGS: [&'static str; 3] = ["en-US", "en-GB", "de-DE"];

    /// The locale tag, used verbatim as a directory name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::DeDe => "de-DE",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en-US" => Ok(Self::EnUs),
            "en-GB" => Ok(Self::EnGb),
            "de-DE" => Ok(Self::DeDe),
            other => Err(ConfigError::InvalidLocale {
                value: other.to_owned(),
            }),
        }
    }
}
