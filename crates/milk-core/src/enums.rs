//! Domain enums and fixed vocabularies.
//!
//! Wire values are the API's uppercase codes (`M`, `SAUDAVEL`, ...). Labels are
//! the Portuguese strings shown to farm staff.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Sex
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Macho",
            Self::Female => "Fêmea",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            other => Err(CoreError::Validation(format!(
                "sexo inválido '{other}' (use M ou F)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// HealthStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    #[serde(rename = "SAUDAVEL")]
    Healthy,
    #[serde(rename = "DOENTE")]
    Sick,
    #[serde(rename = "EM_TRATAMENTO")]
    UnderTreatment,
}

impl HealthStatus {
    pub const ALL: [Self; 3] = [Self::Healthy, Self::Sick, Self::UnderTreatment];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "SAUDAVEL",
            Self::Sick => "DOENTE",
            Self::UnderTreatment => "EM_TRATAMENTO",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Healthy => "Saudável",
            Self::Sick => "Doente",
            Self::UnderTreatment => "Em Tratamento",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("status de saúde inválido '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// MilkQuality
// ---------------------------------------------------------------------------

/// Milk quality score, 1 (worst) to 10 (best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MilkQuality(u8);

impl MilkQuality {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `score` is outside `1..=10`.
    pub fn new(score: u8) -> Result<Self, CoreError> {
        if (Self::MIN..=Self::MAX).contains(&score) {
            Ok(Self(score))
        } else {
            Err(CoreError::Validation(format!(
                "qualidade deve estar entre {} e {}, recebido {score}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    #[must_use]
    pub const fn score(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            1 => "1 - Péssima",
            2 => "2 - Muito ruim",
            3 => "3 - Ruim",
            4 => "4 - Abaixo da média",
            5 => "5 - Média",
            6 => "6 - Acima da média",
            7 => "7 - Boa",
            8 => "8 - Muito boa",
            9 => "9 - Excelente",
            _ => "10 - Perfeita",
        }
    }
}

impl TryFrom<u8> for MilkQuality {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MilkQuality> for u8 {
    fn from(value: MilkQuality) -> Self {
        value.0
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Parse a stored value. Anything but `light`/`dark` is rejected.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sex_serializes_to_single_letter() {
        assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), r#""F""#);
        assert_eq!("M".parse::<Sex>().unwrap(), Sex::Male);
        assert!("X".parse::<Sex>().is_err());
    }

    #[test]
    fn health_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::UnderTreatment).unwrap(),
            r#""EM_TRATAMENTO""#
        );
        assert_eq!(
            "DOENTE".parse::<HealthStatus>().unwrap(),
            HealthStatus::Sick
        );
        assert_eq!(HealthStatus::Healthy.label(), "Saudável");
    }

    #[test]
    fn milk_quality_rejects_out_of_range() {
        assert!(MilkQuality::new(0).is_err());
        assert!(MilkQuality::new(11).is_err());
        assert_eq!(MilkQuality::new(10).unwrap().label(), "10 - Perfeita");
        assert!(serde_json::from_str::<MilkQuality>("12").is_err());
        assert_eq!(serde_json::from_str::<MilkQuality>("7").unwrap().score(), 7);
    }

    #[test]
    fn theme_toggle_and_parse() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Theme::default(), Theme::Light);
    }
}
