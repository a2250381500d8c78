//! Deposit and compounding frequency types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CuppaError;

/// How often periodic deposits are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DepositFrequency {
    /// Daily deposits (365 per year)
    Daily,
    /// Weekly deposits (52 per year)
    Weekly,
    /// Monthly deposits (12 per year)
    #[default]
    Monthly,
    /// Annual deposits (1 per year)
    Annually,
}

impl DepositFrequency {
    /// All choices, in picker order.
    pub const ALL: [DepositFrequency; 4] = [
        DepositFrequency::Daily,
        DepositFrequency::Weekly,
        DepositFrequency::Monthly,
        DepositFrequency::Annually,
    ];

    const EXPECTED: &'static str = "daily, weekly, monthly, annually";

    /// Returns the number of deposits per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            DepositFrequency::Daily => 365,
            DepositFrequency::Weekly => 52,
            DepositFrequency::Monthly => 12,
            DepositFrequency::Annually => 1,
        }
    }

    /// Returns the lowercase identifier (`"monthly"`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DepositFrequency::Daily => "daily",
            DepositFrequency::Weekly => "weekly",
            DepositFrequency::Monthly => "monthly",
            DepositFrequency::Annually => "annually",
        }
    }
}

impl fmt::Display for DepositFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DepositFrequency::Daily => "Daily",
            DepositFrequency::Weekly => "Weekly",
            DepositFrequency::Monthly => "Monthly",
            DepositFrequency::Annually => "Annually",
        };
        write!(f, "{name}")
    }
}

impl FromStr for DepositFrequency {
    type Err = CuppaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|freq| freq.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CuppaError::unknown_frequency("deposit", s, Self::EXPECTED))
    }
}

/// How often interest is compounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    /// Daily compounding (365x per year)
    Daily,
    /// Monthly compounding (12x per year)
    Monthly,
    /// Quarterly compounding (4x per year)
    Quarterly,
    /// Annual compounding (1x per year)
    #[default]
    Annually,
}

impl CompoundingFrequency {
    /// All choices, in picker order.
    pub const ALL: [CompoundingFrequency; 4] = [
        CompoundingFrequency::Daily,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Annually,
    ];

    const EXPECTED: &'static str = "daily, monthly, quarterly, annually";

    /// Returns the number of compounding periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Daily => 365,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Annually => 1,
        }
    }

    /// Returns the lowercase identifier (`"quarterly"`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundingFrequency::Daily => "daily",
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::Annually => "annually",
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompoundingFrequency::Daily => "Daily",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Annually => "Annually",
        };
        write!(f, "{name}")
    }
}

impl FromStr for CompoundingFrequency {
    type Err = CuppaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|freq| freq.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CuppaError::unknown_frequency("compounding", s, Self::EXPECTED))
    }
}
