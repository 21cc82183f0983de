//! Step-by-step character construction.

use std::collections::HashSet;

use statforge_domain::{CharacterStats, DomainError};

use crate::entities::{Character, CharacterClass, ClassLevel, Skill};

/// Builder for [`Character`].
///
/// Name and stats are required; everything else defaults to empty. Saving
/// throw proficiencies are granted by the first class added, matching how
/// a character only keeps its starting class's save proficiencies when
/// multiclassing.
#[derive(Debug, Default, Clone)]
pub struct CharacterBuilder {
    name: Option<String>,
    classes: Vec<ClassLevel>,
    stats: Option<CharacterStats>,
    skill_proficiencies: Vec<Skill>,
    expertise: HashSet<Skill>,
}

impl CharacterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn add_class(mut self, class: CharacterClass, level: u8) -> Self {
        self.classes.push(ClassLevel::new(class, level));
        self
    }

    pub fn stats(mut self, stats: CharacterStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn add_skill(mut self, skill: Skill) -> Self {
        if !self.skill_proficiencies.contains(&skill) {
            self.skill_proficiencies.push(skill);
        }
        self
    }

    pub fn add_expertise(mut self, skill: Skill) -> Self {
        self.expertise.insert(skill);
        self
    }

    /// Assemble the character.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name or stats are missing,
    /// or if [`Character::new`] rejects the assembled pieces.
    pub fn build(self) -> Result<Character, DomainError> {
        let name = self
            .name
            .ok_or_else(|| DomainError::validation("character name is required"))?;
        let stats = self
            .stats
            .ok_or_else(|| DomainError::validation("character stats are required"))?;
        let saving_throws = self
            .classes
            .first()
            .map(|cl| cl.class.saving_throws().to_vec())
            .unwrap_or_default();
        Character::new(
            name,
            self.classes,
            stats,
            saving_throws,
            self.skill_proficiencies,
            self.expertise,
        )
    }
}
