//! Subsidy-scheme codes a client can be funded under.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of funding sources. No other value is ever persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundingSource {
    #[serde(rename = "NDIS")]
    Ndis,
    #[serde(rename = "HCP")]
    Hcp,
    #[serde(rename = "CHSP")]
    Chsp,
    #[serde(rename = "DVA")]
    Dva,
    #[serde(rename = "HACC")]
    Hacc,
}

impl FundingSource {
    pub const ALL: [FundingSource; 5] = [
        FundingSource::Ndis,
        FundingSource::Hcp,
        FundingSource::Chsp,
        FundingSource::Dva,
        FundingSource::Hacc,
    ];

    /// The wire and database code for this source.
    pub fn as_str(self) -> &'static str {
        match self {
            FundingSource::Ndis => "NDIS",
            FundingSource::Hcp => "HCP",
            FundingSource::Chsp => "CHSP",
            FundingSource::Dva => "DVA",
            FundingSource::Hacc => "HACC",
        }
    }
}

impl fmt::Display for FundingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown funding source '{0}'")]
pub struct UnknownFundingSource(pub String);

impl FromStr for FundingSource {
    type Err = UnknownFundingSource;

    /// Codes are matched exactly; `"ndis"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FundingSource::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| UnknownFundingSource(s.to_string()))
    }
}
