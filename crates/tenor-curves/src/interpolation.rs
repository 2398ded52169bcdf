//! Interpolation selectors for discount curves.

use serde::{Deserialize, Serialize};

use crate::error::CurveError;

/// Quantity the curve interpolates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum InterpolationSpace {
    /// Discount factors directly.
    #[default]
    Discount,
    /// Natural log of discount factors.
    LogDiscount,
    /// Continuously compounded zero rates, `-ln(df) / t`.
    Zero,
}

impl InterpolationSpace {
    /// Returns the configuration name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Discount => "discount",
            Self::LogDiscount => "log_discount",
            Self::Zero => "zero",
        }
    }

    /// Maps a discount factor at time `t` into this space.
    #[must_use]
    pub fn to_space(&self, df: f64, t: f64) -> f64 {
        match self {
            Self::Discount => df,
            Self::LogDiscount => df.ln(),
            Self::Zero => {
                if t > 0.0 {
                    -df.ln() / t
                } else {
                    0.0
                }
            }
        }
    }

    /// Maps an interpolated value at time `t` back to a discount factor.
    #[must_use]
    pub fn to_discount(&self, value: f64, t: f64) -> f64 {
        match self {
            Self::Discount => value,
            Self::LogDiscount => value.exp(),
            Self::Zero => (-value * t).exp(),
        }
    }
}

impl std::fmt::Display for InterpolationSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for InterpolationSpace {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "discount" => Ok(Self::Discount),
            "log_discount" | "logdiscount" => Ok(Self::LogDiscount),
            "zero" => Ok(Self::Zero),
            _ => Err(CurveError::UnsupportedInterpolationSpace {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for InterpolationSpace {
    type Error = CurveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InterpolationSpace> for String {
    fn from(space: InterpolationSpace) -> Self {
        space.name().to_string()
    }
}

/// Interpolation method across pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum InterpolationMethod {
    /// Piecewise linear.
    #[default]
    Linear,
    /// Not-a-knot cubic spline; needs at least four pillars.
    Cubic,
}

impl InterpolationMethod {
    /// Returns the configuration name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Cubic => "cubic",
        }
    }

    /// Minimum number of pillars the method needs.
    #[must_use]
    pub fn min_points(&self) -> usize {
        match self {
            Self::Linear => 2,
            Self::Cubic => 4,
        }
    }
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for InterpolationMethod {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "cubic" | "cubic_spline" => Ok(Self::Cubic),
            _ => Err(CurveError::UnsupportedInterpolationMethod {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for InterpolationMethod {
    type Error = CurveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InterpolationMethod> for String {
    fn from(method: InterpolationMethod) -> Self {
        method.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_space_roundtrip() {
        let df = 0.97;
        let t = 1.25;
        for space in [
            InterpolationSpace::Discount,
            InterpolationSpace::LogDiscount,
            InterpolationSpace::Zero,
        ] {
            assert_relative_eq!(space.to_discount(space.to_space(df, t), t), df, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_zero_space_at_time_zero() {
        assert_eq!(InterpolationSpace::Zero.to_space(1.0, 0.0), 0.0);
        assert_eq!(InterpolationSpace::Zero.to_discount(0.0, 0.0), 1.0);
    }

    #[test]
    fn test_parse_space() {
        assert_eq!(
            "log_discount".parse::<InterpolationSpace>().unwrap(),
            InterpolationSpace::LogDiscount
        );
        let err = "forward".parse::<InterpolationSpace>().unwrap_err();
        assert!(matches!(err, CurveError::UnsupportedInterpolationSpace { ref name } if name == "forward"));
    }

    #[test]
    fn test_parse_method() {
        assert_eq!("cubic".parse::<InterpolationMethod>().unwrap(), InterpolationMethod::Cubic);
        assert!("quadratic".parse::<InterpolationMethod>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&InterpolationSpace::LogDiscount).unwrap();
        assert_eq!(json, "\"log_discount\"");
        let method: InterpolationMethod = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(method, InterpolationMethod::Linear);
    }
}
