//! Character classes and their first-level lookup tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use statforge_domain::{Ability, DomainError};

/// The thirteen playable classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CharacterClass {
    Artificer,
    Barbarian,
    Bard,
    Cleric,
    Druid,
    Fighter,
    Monk,
    Paladin,
    Ranger,
    Rogue,
    Sorcerer,
    Warlock,
    Wizard,
}

impl CharacterClass {
    /// All classes in alphabetical order.
    pub const ALL: [CharacterClass; 13] = [
        Self::Artificer,
        Self::Barbarian,
        Self::Bard,
        Self::Cleric,
        Self::Druid,
        Self::Fighter,
        Self::Monk,
        Self::Paladin,
        Self::Ranger,
        Self::Rogue,
        Self::Sorcerer,
        Self::Warlock,
        Self::Wizard,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Artificer => "Artificer",
            Self::Barbarian => "Barbarian",
            Self::Bard => "Bard",
            Self::Cleric => "Cleric",
            Self::Druid => "Druid",
            Self::Fighter => "Fighter",
            Self::Monk => "Monk",
            Self::Paladin => "Paladin",
            Self::Ranger => "Ranger",
            Self::Rogue => "Rogue",
            Self::Sorcerer => "Sorcerer",
            Self::Warlock => "Warlock",
            Self::Wizard => "Wizard",
        }
    }

    /// Hit die size for this class (d6..d12).
    pub fn hit_die(&self) -> u8 {
        match self {
            Self::Barbarian => 12,
            Self::Fighter | Self::Paladin | Self::Ranger => 10,
            Self::Artificer
            | Self::Bard
            | Self::Cleric
            | Self::Druid
            | Self::Monk
            | Self::Rogue
            | Self::Warlock => 8,
            Self::Sorcerer | Self::Wizard => 6,
        }
    }

    /// The two saving throws this class grants proficiency in.
    pub fn saving_throws(&self) -> [Ability; 2] {
        use Ability::*;
        match self {
            Self::Artificer => [Constitution, Intelligence],
            Self::Barbarian => [Strength, Constitution],
            Self::Bard => [Dexterity, Charisma],
            Self::Cleric => [Wisdom, Charisma],
            Self::Druid => [Intelligence, Wisdom],
            Self::Fighter => [Strength, Constitution],
            Self::Monk => [Strength, Dexterity],
            Self::Paladin => [Wisdom, Charisma],
            Self::Ranger => [Strength, Dexterity],
            Self::Rogue => [Dexterity, Intelligence],
            Self::Sorcerer => [Constitution, Charisma],
            Self::Warlock => [Wisdom, Intelligence],
            Self::Wizard => [Intelligence, Wisdom],
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for CharacterClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "artificer" => Ok(Self::Artificer),
            "barbarian" => Ok(Self::Barbarian),
            "bard" => Ok(Self::Bard),
            "cleric" => Ok(Self::Cleric),
            "druid" => Ok(Self::Druid),
            "fighter" => Ok(Self::Fighter),
            "monk" => Ok(Self::Monk),
            "paladin" => Ok(Self::Paladin),
            "ranger" => Ok(Self::Ranger),
            "rogue" => Ok(Self::Rogue),
            "sorcerer" => Ok(Self::Sorcerer),
            "warlock" => Ok(Self::Warlock),
            "wizard" => Ok(Self::Wizard),
            _ => Err(DomainError::parse(format!("Unknown class: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_die_table() {
        assert_eq!(CharacterClass::Barbarian.hit_die(), 12);
        assert_eq!(CharacterClass::Fighter.hit_die(), 10);
        assert_eq!(CharacterClass::Paladin.hit_die(), 10);
        assert_eq!(CharacterClass::Ranger.hit_die(), 10);
        assert_eq!(CharacterClass::Artificer.hit_die(), 8);
        assert_eq!(CharacterClass::Rogue.hit_die(), 8);
        assert_eq!(CharacterClass::Sorcerer.hit_die(), 6);
        assert_eq!(CharacterClass::Wizard.hit_die(), 6);
    }

    #[test]
    fn saving_throws_table() {
        use Ability::*;
        assert_eq!(
            CharacterClass::Barbarian.saving_throws(),
            [Strength, Constitution]
        );
        assert_eq!(CharacterClass::Bard.saving_throws(), [Dexterity, Charisma]);
        assert_eq!(
            CharacterClass::Warlock.saving_throws(),
            [Wisdom, Intelligence]
        );
        assert_eq!(
            CharacterClass::Wizard.saving_throws(),
            [Intelligence, Wisdom]
        );
    }

    #[test]
    fn every_class_has_two_distinct_saving_throws() {
        for class in CharacterClass::ALL {
            let [first, second] = class.saving_throws();
            assert_ne!(first, second, "{} grants duplicate saves", class);
        }
    }

    #[test]
    fn from_str_accepts_any_case() {
        assert_eq!(
            CharacterClass::from_str("Barbarian"),
            Ok(CharacterClass::Barbarian)
        );
        assert_eq!(
            CharacterClass::from_str("WIZARD"),
            Ok(CharacterClass::Wizard)
        );
        assert!(CharacterClass::from_str("bloodhunter").is_err());
    }

    #[test]
    fn display_uses_full_name() {
        assert_eq!(CharacterClass::Monk.to_string(), "Monk");
    }
}
