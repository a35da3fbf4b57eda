use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a known gender.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown gender '{0}'")]
pub struct UnknownGenderError(pub String);

/// Gender selection used by the calorie formula.
///
/// The two variants select different base and per-kilogram coefficients;
/// see [`crate::calculations::EstimatorConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn all() -> &'static [Gender] {
        &[Gender::Male, Gender::Female]
    }

    /// Display label shown next to the radio button.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "M" => Some(Self::Male),
            "F" => Some(Self::Female),
            _ => None,
        }
    }
}

impl TryFrom<&str> for Gender {
    type Error = UnknownGenderError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s).ok_or_else(|| UnknownGenderError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_is_male() {
        assert_eq!(Gender::default(), Gender::Male);
    }

    #[test]
    fn as_str_parse_round_trip() {
        for gender in Gender::all() {
            assert_eq!(Gender::parse(gender.as_str()), Some(*gender));
        }
    }

    #[test]
    fn try_from_rejects_unknown_code() {
        let result = Gender::try_from("X");

        assert_eq!(result, Err(UnknownGenderError("X".to_string())));
    }
}
