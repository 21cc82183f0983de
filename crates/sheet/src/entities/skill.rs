//! Skills and the abilities that govern them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use statforge_domain::{Ability, DomainError};

/// The eighteen standard skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Skill {
    Acrobatics,
    AnimalHandling,
    Arcana,
    Athletics,
    Deception,
    History,
    Insight,
    Intimidation,
    Investigation,
    Medicine,
    Nature,
    Perception,
    Performance,
    Persuasion,
    Religion,
    SleightOfHand,
    Stealth,
    Survival,
}

impl Skill {
    /// All skills in alphabetical order.
    pub const ALL: [Skill; 18] = [
        Self::Acrobatics,
        Self::AnimalHandling,
        Self::Arcana,
        Self::Athletics,
        Self::Deception,
        Self::History,
        Self::Insight,
        Self::Intimidation,
        Self::Investigation,
        Self::Medicine,
        Self::Nature,
        Self::Perception,
        Self::Performance,
        Self::Persuasion,
        Self::Religion,
        Self::SleightOfHand,
        Self::Stealth,
        Self::Survival,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Acrobatics => "Acrobatics",
            Self::AnimalHandling => "Animal Handling",
            Self::Arcana => "Arcana",
            Self::Athletics => "Athletics",
            Self::Deception => "Deception",
            Self::History => "History",
            Self::Insight => "Insight",
            Self::Intimidation => "Intimidation",
            Self::Investigation => "Investigation",
            Self::Medicine => "Medicine",
            Self::Nature => "Nature",
            Self::Perception => "Perception",
            Self::Performance => "Performance",
            Self::Persuasion => "Persuasion",
            Self::Religion => "Religion",
            Self::SleightOfHand => "Sleight of Hand",
            Self::Stealth => "Stealth",
            Self::Survival => "Survival",
        }
    }

    /// The ability whose modifier governs checks with this skill.
    pub fn ability(&self) -> Ability {
        match self {
            Self::Athletics => Ability::Strength,
            Self::Acrobatics | Self::SleightOfHand | Self::Stealth => Ability::Dexterity,
            Self::Arcana
            | Self::History
            | Self::Investigation
            | Self::Nature
            | Self::Religion => Ability::Intelligence,
            Self::AnimalHandling
            | Self::Insight
            | Self::Medicine
            | Self::Perception
            | Self::Survival => Ability::Wisdom,
            Self::Deception | Self::Intimidation | Self::Performance | Self::Persuasion => {
                Ability::Charisma
            }
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Skill {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|skill| skill.display_name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| DomainError::parse(format!("Unknown skill: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_ability_mapping() {
        assert_eq!(Skill::Athletics.ability(), Ability::Strength);
        assert_eq!(Skill::Stealth.ability(), Ability::Dexterity);
        assert_eq!(Skill::SleightOfHand.ability(), Ability::Dexterity);
        assert_eq!(Skill::Arcana.ability(), Ability::Intelligence);
        assert_eq!(Skill::Perception.ability(), Ability::Wisdom);
        assert_eq!(Skill::Survival.ability(), Ability::Wisdom);
        assert_eq!(Skill::Intimidation.ability(), Ability::Charisma);
    }

    #[test]
    fn no_skill_is_governed_by_constitution() {
        // No standard skill keys off CON; it only feeds hit points and saves.
        assert!(Skill::ALL
            .iter()
            .all(|skill| skill.ability() != Ability::Constitution));
    }

    #[test]
    fn all_lists_eighteen_skills() {
        assert_eq!(Skill::ALL.len(), 18);
    }

    #[test]
    fn from_str_handles_multi_word_names() {
        assert_eq!(Skill::from_str("Sleight of Hand"), Ok(Skill::SleightOfHand));
        assert_eq!(Skill::from_str("animal handling"), Ok(Skill::AnimalHandling));
        assert!(Skill::from_str("Basket Weaving").is_err());
    }

    #[test]
    fn display_uses_spaced_name() {
        assert_eq!(Skill::SleightOfHand.to_string(), "Sleight of Hand");
        assert_eq!(Skill::Arcana.to_string(), "Arcana");
    }
}
