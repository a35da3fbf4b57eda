use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a known intensity level.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown intensity level '{0}'")]
pub struct UnknownIntensityError(pub String);

/// Activity-intensity level selected from the dropdown.
///
/// Each level binds a fixed multiplier applied to the base metabolic
/// estimate:
///
/// | Level     | Multiplier |
/// |-----------|------------|
/// | Light     | 1.3        |
/// | Usual     | 1.5        |
/// | Moderate  | 1.7        |
/// | Hard      | 2.0        |
/// | Very hard | 2.2        |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IntensityLevel {
    #[default]
    Light,
    Usual,
    Moderate,
    Hard,
    VeryHard,
}

impl IntensityLevel {
    /// All levels in dropdown order.
    pub fn all() -> &'static [IntensityLevel] {
        &[
            IntensityLevel::Light,
            IntensityLevel::Usual,
            IntensityLevel::Moderate,
            IntensityLevel::Hard,
            IntensityLevel::VeryHard,
        ]
    }

    /// Display label shown in the dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Usual => "Usual",
            Self::Moderate => "Moderate",
            Self::Hard => "Hard",
            Self::VeryHard => "Very hard",
        }
    }

    /// The fixed multiplier bound to this level.
    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::Light => Decimal::new(13, 1),
            Self::Usual => Decimal::new(15, 1),
            Self::Moderate => Decimal::new(17, 1),
            Self::Hard => Decimal::new(20, 1),
            Self::VeryHard => Decimal::new(22, 1),
        }
    }
}

impl TryFrom<&str> for IntensityLevel {
    type Error = UnknownIntensityError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .iter()
            .find(|level| level.label() == s)
            .copied()
            .ok_or_else(|| UnknownIntensityError(s.to_string()))
    }
}
