//! Payment frequency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::Period;

/// Payment frequency of a leg.
///
/// The supported set is closed: monthly, quarterly, semi-annual and annual.
/// Tenor strings ("1M", "3M", "6M", "12M") and names ("Quarterly") both
/// parse; anything else, such as "2M", is rejected with
/// [`CoreError::InvalidFrequency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum Frequency {
    /// Monthly payments (12 per year)
    Monthly,
    /// Quarterly payments (4 per year)
    #[default]
    Quarterly,
    /// Semi-annual payments (2 per year)
    SemiAnnual,
    /// Annual payments (1 per year)
    Annual,
}

impl Frequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        12 / self.months_per_period()
    }

    /// Returns the number of months per period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        match self {
            Frequency::Monthly => 1,
            Frequency::Quarterly => 3,
            Frequency::SemiAnnual => 6,
            Frequency::Annual => 12,
        }
    }

    /// Returns the period length as a tenor.
    #[must_use]
    pub fn period(&self) -> Period {
        Period::months(self.months_per_period() as i32)
    }

    /// Returns the tenor code, e.g. "3M".
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Frequency::Monthly => "1M",
            Frequency::Quarterly => "3M",
            Frequency::SemiAnnual => "6M",
            Frequency::Annual => "12M",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Frequency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "1M" | "MONTHLY" => Ok(Frequency::Monthly),
            "3M" | "QUARTERLY" => Ok(Frequency::Quarterly),
            "6M" | "SEMIANNUAL" | "SEMI-ANNUAL" => Ok(Frequency::SemiAnnual),
            "12M" | "1Y" | "ANNUAL" => Ok(Frequency::Annual),
            _ => Err(CoreError::invalid_frequency(
                s,
                "supported frequencies are 1M, 3M, 6M and 12M",
            )),
        }
    }
}

impl TryFrom<String> for Frequency {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Frequency> for String {
    fn from(frequency: Frequency) -> Self {
        frequency.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_and_periods() {
        assert_eq!(Frequency::Monthly.months_per_period(), 1);
        assert_eq!(Frequency::Monthly.periods_per_year(), 12);
        assert_eq!(Frequency::SemiAnnual.periods_per_year(), 2);
        assert_eq!(Frequency::Annual.period(), Period::months(12));
    }

    #[test]
    fn test_parse_codes_and_names() {
        assert_eq!("1M".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert_eq!("3m".parse::<Frequency>().unwrap(), Frequency::Quarterly);
        assert_eq!("Semiannual".parse::<Frequency>().unwrap(), Frequency::SemiAnnual);
        assert_eq!("1Y".parse::<Frequency>().unwrap(), Frequency::Annual);
    }

    #[test]
    fn test_unsupported_frequency() {
        let err = "2M".parse::<Frequency>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidFrequency { .. }));
        assert!(err.to_string().contains("'2M'"));
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Frequency::SemiAnnual).unwrap();
        assert_eq!(json, "\"6M\"");
        let freq: Frequency = serde_json::from_str("\"12M\"").unwrap();
        assert_eq!(freq, Frequency::Annual);
        assert!(serde_json::from_str::<Frequency>("\"2M\"").is_err());
    }
}
