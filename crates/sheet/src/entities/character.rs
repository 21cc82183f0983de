//! Character entity - classes, proficiencies, and derived sheet numbers.
//!
//! `Character` consumes `CharacterStats` read-only: every derived number
//! here is plain arithmetic over `total_score`/`modifier` plus the class
//! lookup tables. Score mutation flows through `stats_mut()` into the
//! domain crate's `add_bonus`, which owns the cap invariant.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use statforge_domain::{Ability, CharacterId, CharacterStats, DomainError};

use crate::entities::{CharacterClass, Skill};

/// Maximum combined character level.
pub const MAX_CHARACTER_LEVEL: u8 = 20;

/// A class taken at some number of levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassLevel {
    pub class: CharacterClass,
    pub level: u8,
}

impl ClassLevel {
    pub fn new(class: CharacterClass, level: u8) -> Self {
        Self { class, level }
    }
}

/// A playable character: identity, class levels, ability scores, and
/// proficiencies.
///
/// Deserialization runs the same validation as [`Character::new`], so JSON
/// cannot produce a character that construction would reject.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UncheckedCharacter")]
pub struct Character {
    id: CharacterId,
    name: String,
    classes: Vec<ClassLevel>,
    stats: CharacterStats,
    saving_throw_proficiencies: Vec<Ability>,
    skill_proficiencies: Vec<Skill>,
    expertise: HashSet<Skill>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UncheckedCharacter {
    id: CharacterId,
    name: String,
    classes: Vec<ClassLevel>,
    stats: CharacterStats,
    saving_throw_proficiencies: Vec<Ability>,
    skill_proficiencies: Vec<Skill>,
    expertise: HashSet<Skill>,
}

impl TryFrom<UncheckedCharacter> for Character {
    type Error = DomainError;

    fn try_from(raw: UncheckedCharacter) -> Result<Self, Self::Error> {
        Character::validate(
            &raw.name,
            &raw.classes,
            &raw.skill_proficiencies,
            &raw.expertise,
        )?;
        Ok(Self {
            id: raw.id,
            name: raw.name,
            classes: raw.classes,
            stats: raw.stats,
            saving_throw_proficiencies: raw.saving_throw_proficiencies,
            skill_proficiencies: raw.skill_proficiencies,
            expertise: raw.expertise,
        })
    }
}

impl Character {
    /// Create a character, validating the class list and proficiency sets.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty, the class
    /// list is empty or contains a zero level, the combined level exceeds
    /// [`MAX_CHARACTER_LEVEL`], or an expertise skill is not also a
    /// proficient skill.
    pub fn new(
        name: impl Into<String>,
        classes: Vec<ClassLevel>,
        stats: CharacterStats,
        saving_throw_proficiencies: Vec<Ability>,
        skill_proficiencies: Vec<Skill>,
        expertise: HashSet<Skill>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        Self::validate(&name, &classes, &skill_proficiencies, &expertise)?;
        Ok(Self {
            id: CharacterId::new(),
            name,
            classes,
            stats,
            saving_throw_proficiencies,
            skill_proficiencies,
            expertise,
        })
    }

    fn validate(
        name: &str,
        classes: &[ClassLevel],
        skill_proficiencies: &[Skill],
        expertise: &HashSet<Skill>,
    ) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("character name cannot be empty"));
        }
        if classes.is_empty() {
            return Err(DomainError::validation(
                "character needs at least one class",
            ));
        }
        if classes.iter().any(|cl| cl.level == 0) {
            return Err(DomainError::validation("class levels must be positive"));
        }
        let total: u32 = classes.iter().map(|cl| u32::from(cl.level)).sum();
        if total > u32::from(MAX_CHARACTER_LEVEL) {
            return Err(DomainError::validation(format!(
                "total character level cannot exceed {}",
                MAX_CHARACTER_LEVEL
            )));
        }
        if let Some(skill) = expertise
            .iter()
            .find(|skill| !skill_proficiencies.contains(skill))
        {
            return Err(DomainError::validation(format!(
                "expertise in {} requires proficiency in it",
                skill.display_name()
            )));
        }
        Ok(())
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Read accessors
    // ──────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classes(&self) -> &[ClassLevel] {
        &self.classes
    }

    pub fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    /// Mutable access to the scores; all mutation goes through
    /// `CharacterStats::add_bonus`.
    pub fn stats_mut(&mut self) -> &mut CharacterStats {
        &mut self.stats
    }

    pub fn saving_throw_proficiencies(&self) -> &[Ability] {
        &self.saving_throw_proficiencies
    }

    pub fn skill_proficiencies(&self) -> &[Skill] {
        &self.skill_proficiencies
    }

    pub fn is_proficient_in_save(&self, ability: Ability) -> bool {
        self.saving_throw_proficiencies.contains(&ability)
    }

    pub fn is_proficient_in_skill(&self, skill: Skill) -> bool {
        self.skill_proficiencies.contains(&skill)
    }

    pub fn has_expertise(&self, skill: Skill) -> bool {
        self.expertise.contains(&skill)
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Derived numbers
    // ──────────────────────────────────────────────────────────────────────────

    /// Combined level across all classes.
    pub fn total_level(&self) -> u8 {
        self.classes.iter().map(|cl| cl.level).sum()
    }

    /// Proficiency bonus: +2 at level 1, +1 every four levels after.
    pub fn proficiency_bonus(&self) -> i32 {
        ((i32::from(self.total_level()) - 1) / 4) + 2
    }

    /// Maximum hit points.
    ///
    /// The first character level takes the full hit die, every later level
    /// the average roll rounded up (`die/2 + 1`); each level adds the
    /// Constitution modifier. Never drops below 1.
    pub fn max_hp(&self) -> i32 {
        let con_mod = self.stats.modifier(Ability::Constitution);
        let mut total = 0;
        let mut first_level = true;
        for cl in &self.classes {
            let die = i32::from(cl.class.hit_die());
            let avg_roll = (die / 2) + 1;
            let mut levels = i32::from(cl.level);
            if first_level {
                total += die + con_mod;
                levels -= 1;
                first_level = false;
            }
            total += levels * (avg_roll + con_mod);
        }
        total.max(1)
    }

    /// Hit dice pool grouped by die size, e.g. `["5d12", "2d8"]`.
    ///
    /// Classes sharing a die size are merged into a single pool entry, in
    /// first-seen class order.
    pub fn hit_dice(&self) -> Vec<String> {
        let mut pools: Vec<(u8, u32)> = Vec::new();
        for cl in &self.classes {
            let die = cl.class.hit_die();
            match pools.iter_mut().find(|(d, _)| *d == die) {
                Some((_, count)) => *count += u32::from(cl.level),
                None => pools.push((die, u32::from(cl.level))),
            }
        }
        pools
            .iter()
            .map(|(die, count)| format!("{}d{}", count, die))
            .collect()
    }

    /// Saving-throw bonus: ability modifier, plus the proficiency bonus
    /// when proficient.
    pub fn saving_throw_modifier(&self, ability: Ability) -> i32 {
        let modifier = self.stats.modifier(ability);
        if self.is_proficient_in_save(ability) {
            modifier + self.proficiency_bonus()
        } else {
            modifier
        }
    }

    /// Skill bonus: governing ability modifier plus 0x/1x/2x proficiency
    /// bonus for untrained/proficient/expertise.
    pub fn skill_modifier(&self, skill: Skill) -> i32 {
        let modifier = self.stats.modifier(skill.ability());
        let multiplier = if self.has_expertise(skill) {
            2
        } else if self.is_proficient_in_skill(skill) {
            1
        } else {
            0
        };
        modifier + multiplier * self.proficiency_bonus()
    }
}
