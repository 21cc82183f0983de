//! Ability value object - the six core character abilities.
//!
//! Provides type safety for ability references instead of using magic strings like "STR", "DEX".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The six core ability identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ability {
    /// Strength - physical power
    Strength,
    /// Dexterity - agility and reflexes
    Dexterity,
    /// Constitution - endurance and health
    Constitution,
    /// Intelligence - reasoning and memory
    Intelligence,
    /// Wisdom - perception and insight
    Wisdom,
    /// Charisma - force of personality
    Charisma,
}

impl Ability {
    /// All six abilities in standard order.
    pub const ALL: [Ability; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Returns the short uppercase string representation (e.g., "STR", "DEX").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    /// Returns the full name of the ability (e.g., "Strength", "Dexterity").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "STR" | "STRENGTH" => Ok(Self::Strength),
            "DEX" | "DEXTERITY" => Ok(Self::Dexterity),
            "CON" | "CONSTITUTION" => Ok(Self::Constitution),
            "INT" | "INTELLIGENCE" => Ok(Self::Intelligence),
            "WIS" | "WISDOM" => Ok(Self::Wisdom),
            "CHA" | "CHARISMA" => Ok(Self::Charisma),
            _ => Err(DomainError::parse(format!("Unknown ability: {}", s))),
        }
    }
}
