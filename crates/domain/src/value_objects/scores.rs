//! Layered ability score sets.
//!
//! A character's effective scores are the sum of a base set plus one bonus
//! set per category (racial, feat, level). Each layer is a fixed record of
//! six integers, validated when a flavored wrapper takes ownership of it;
//! bonus layers carry an immutable category tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::Ability;

/// Score component categories.
///
/// `Base` identifies the rolled/assigned scores; the other three are the
/// additive bonus layers that `CharacterStats::add_bonus` may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BonusCategory {
    Base,
    Racial,
    Feat,
    Level,
}

impl BonusCategory {
    /// The three categories a bonus set may be tagged with.
    pub const BONUS: [BonusCategory; 3] = [Self::Racial, Self::Feat, Self::Level];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Racial => "racial",
            Self::Feat => "feat",
            Self::Level => "level",
        }
    }

    /// Whether this category is a mutable bonus layer (everything but `Base`).
    pub fn is_bonus(&self) -> bool {
        !matches!(self, Self::Base)
    }
}

impl fmt::Display for BonusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BonusCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "base" => Ok(Self::Base),
            "racial" => Ok(Self::Racial),
            "feat" => Ok(Self::Feat),
            "level" => Ok(Self::Level),
            _ => Err(DomainError::parse(format!("Unknown bonus category: {}", s))),
        }
    }
}

/// A fixed record of one integer value per ability, default 0.
///
/// `ScoreSet` carries no validation rule of its own; [`BaseAbilities`] and
/// [`AbilityBonus`] apply the per-flavor rules when they take ownership of
/// a set. The type is `Copy`, so a set handed to a wrapper is a snapshot -
/// callers cannot alias the stored values afterwards. Integrality is
/// carried by the `i32` fields: non-integral input fails at the serde
/// boundary rather than at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSet {
    #[serde(default)]
    strength: i32,
    #[serde(default)]
    dexterity: i32,
    #[serde(default)]
    constitution: i32,
    #[serde(default)]
    intelligence: i32,
    #[serde(default)]
    wisdom: i32,
    #[serde(default)]
    charisma: i32,
}

impl ScoreSet {
    /// An all-zero set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one field, builder-style.
    pub fn with(mut self, ability: Ability, value: i32) -> Self {
        self.set(ability, value);
        self
    }

    /// Read the field for one ability.
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    pub(crate) fn set(&mut self, ability: Ability, value: i32) {
        match ability {
            Ability::Strength => self.strength = value,
            Ability::Dexterity => self.dexterity = value,
            Ability::Constitution => self.constitution = value,
            Ability::Intelligence => self.intelligence = value,
            Ability::Wisdom => self.wisdom = value,
            Ability::Charisma => self.charisma = value,
        }
    }

    /// Iterate the six (ability, value) pairs in standard order.
    pub fn entries(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        Ability::ALL.iter().map(move |&ability| (ability, self.get(ability)))
    }
}

/// A character's raw rolled or assigned scores. Every field must be non-negative.
///
/// Deserialization goes through [`BaseAbilities::new`], so JSON input is
/// held to the same rule as constructed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UncheckedBaseAbilities")]
pub struct BaseAbilities {
    scores: ScoreSet,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UncheckedBaseAbilities {
    scores: ScoreSet,
}

impl TryFrom<UncheckedBaseAbilities> for BaseAbilities {
    type Error = DomainError;

    fn try_from(raw: UncheckedBaseAbilities) -> Result<Self, Self::Error> {
        Self::new(raw.scores)
    }
}

impl BaseAbilities {
    /// Take ownership of a score set as base scores.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeBaseScore`] if any field is negative.
    pub fn new(scores: ScoreSet) -> Result<Self, DomainError> {
        for (ability, value) in scores.entries() {
            if value < 0 {
                return Err(DomainError::NegativeBaseScore { ability, value });
            }
        }
        Ok(Self { scores })
    }

    /// Read the score for one ability.
    pub fn get(&self, ability: Ability) -> i32 {
        self.scores.get(ability)
    }

    /// Snapshot of the underlying set (for display/serialization by the caller).
    pub fn scores(&self) -> ScoreSet {
        self.scores
    }
}

/// A bonus layer: six per-ability adjustments tagged with the category that
/// owns them. The tag is fixed at construction.
///
/// Deserialization goes through [`AbilityBonus::new`], so a `Base` tag or a
/// negative field in JSON is rejected the same way it is in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UncheckedAbilityBonus")]
pub struct AbilityBonus {
    category: BonusCategory,
    scores: ScoreSet,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UncheckedAbilityBonus {
    category: BonusCategory,
    scores: ScoreSet,
}

impl TryFrom<UncheckedAbilityBonus> for AbilityBonus {
    type Error = DomainError;

    fn try_from(raw: UncheckedAbilityBonus) -> Result<Self, Self::Error> {
        Self::new(raw.category, raw.scores)
    }
}

impl AbilityBonus {
    /// Take ownership of a score set as a bonus layer.
    ///
    /// Negative values are rejected for bonus layers just as for base
    /// scores; see the crate tests for the documented-behavior note.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownCategory`] for the `Base` tag and
    /// [`DomainError::NegativeBonusValue`] if any field is negative.
    pub fn new(category: BonusCategory, scores: ScoreSet) -> Result<Self, DomainError> {
        if !category.is_bonus() {
            return Err(DomainError::UnknownCategory { category });
        }
        for (ability, value) in scores.entries() {
            if value < 0 {
                return Err(DomainError::NegativeBonusValue {
                    category,
                    ability,
                    value,
                });
            }
        }
        Ok(Self { category, scores })
    }

    /// A zeroed layer. Callers must pass one of the three bonus categories.
    pub(crate) fn zeroed(category: BonusCategory) -> Self {
        Self {
            category,
            scores: ScoreSet::default(),
        }
    }

    /// The category this layer is tagged with.
    pub fn category(&self) -> BonusCategory {
        self.category
    }

    /// Read the bonus for one ability.
    pub fn get(&self, ability: Ability) -> i32 {
        self.scores.get(ability)
    }

    /// Snapshot of the underlying set (for display/serialization by the caller).
    pub fn scores(&self) -> ScoreSet {
        self.scores
    }

    /// Raise one field. Crate-private: the only caller is
    /// `CharacterStats::add_bonus`, which enforces the score cap first.
    pub(crate) fn increment(&mut self, ability: Ability, amount: i32) {
        let current = self.scores.get(ability);
        self.scores.set(ability, current.saturating_add(amount));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: [i32; 6]) -> ScoreSet {
        let mut scores = ScoreSet::new();
        for (ability, value) in Ability::ALL.iter().zip(values) {
            scores = scores.with(*ability, value);
        }
        scores
    }

    #[test]
    fn score_set_defaults_to_zero() {
        let scores = ScoreSet::new();
        for ability in Ability::ALL {
            assert_eq!(scores.get(ability), 0);
        }
    }

    #[test]
    fn score_set_with_get_roundtrip() {
        let scores = set([14, 12, 10, 16, 8, 10]);
        assert_eq!(scores.get(Ability::Strength), 14);
        assert_eq!(scores.get(Ability::Dexterity), 12);
        assert_eq!(scores.get(Ability::Constitution), 10);
        assert_eq!(scores.get(Ability::Intelligence), 16);
        assert_eq!(scores.get(Ability::Wisdom), 8);
        assert_eq!(scores.get(Ability::Charisma), 10);
    }

    #[test]
    fn score_set_entries_in_standard_order() {
        let scores = set([1, 2, 3, 4, 5, 6]);
        let entries: Vec<(Ability, i32)> = scores.entries().collect();
        assert_eq!(entries[0], (Ability::Strength, 1));
        assert_eq!(entries[5], (Ability::Charisma, 6));
        assert_eq!(entries.len(), 6);
    }

    #[test]
    fn score_set_partial_json_defaults_missing_fields() {
        let scores: ScoreSet = serde_json::from_str(r#"{"strength": 2, "intelligence": 2}"#)
            .expect("partial score set");
        assert_eq!(scores.get(Ability::Strength), 2);
        assert_eq!(scores.get(Ability::Intelligence), 2);
        assert_eq!(scores.get(Ability::Dexterity), 0);
    }

    #[test]
    fn score_set_rejects_float_json() {
        // Integrality is enforced at the serde boundary: i32 fields do not
        // accept fractional values.
        let result: Result<ScoreSet, _> = serde_json::from_str(r#"{"strength": 3.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn score_set_rejects_string_json() {
        let result: Result<ScoreSet, _> = serde_json::from_str(r#"{"strength": "invalid"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn base_abilities_accepts_non_negative() {
        let base = BaseAbilities::new(set([14, 12, 10, 16, 8, 10])).expect("valid base");
        assert_eq!(base.get(Ability::Strength), 14);
        assert_eq!(base.get(Ability::Wisdom), 8);
    }

    #[test]
    fn base_abilities_rejects_negative_score() {
        let err = BaseAbilities::new(set([10, -1, 10, 10, 10, 10])).unwrap_err();
        assert_eq!(
            err,
            DomainError::NegativeBaseScore {
                ability: Ability::Dexterity,
                value: -1
            }
        );
    }

    #[test]
    fn ability_bonus_valid_initialization() {
        let bonus = AbilityBonus::new(
            BonusCategory::Racial,
            ScoreSet::new()
                .with(Ability::Strength, 2)
                .with(Ability::Intelligence, 2),
        )
        .expect("valid racial bonus");
        assert_eq!(bonus.category(), BonusCategory::Racial);
        assert_eq!(bonus.get(Ability::Strength), 2);
        assert_eq!(bonus.get(Ability::Intelligence), 2);
        assert_eq!(bonus.get(Ability::Dexterity), 0); // Default value
    }

    #[test]
    fn ability_bonus_rejects_base_tag() {
        let err = AbilityBonus::new(BonusCategory::Base, ScoreSet::new()).unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownCategory {
                category: BonusCategory::Base
            }
        );
    }

    #[test]
    fn negative_bonus_rejected_current_behavior() {
        // Documented current behavior: bonus layers reject negative values
        // the same way base scores do, even though a penalty (e.g., aging)
        // would conceptually be a negative bonus.
        let err = AbilityBonus::new(
            BonusCategory::Feat,
            ScoreSet::new().with(Ability::Wisdom, -2),
        )
        .unwrap_err();
        assert_eq!(
            err,
            DomainError::NegativeBonusValue {
                category: BonusCategory::Feat,
                ability: Ability::Wisdom,
                value: -2
            }
        );
    }

    #[test]
    fn bonus_category_display_and_predicates() {
        assert_eq!(BonusCategory::Racial.to_string(), "racial");
        assert_eq!(BonusCategory::Base.to_string(), "base");
        assert!(!BonusCategory::Base.is_bonus());
        assert!(BonusCategory::BONUS.iter().all(|c| c.is_bonus()));
    }

    #[test]
    fn bonus_category_from_str() {
        use std::str::FromStr;
        assert_eq!(BonusCategory::from_str("feat"), Ok(BonusCategory::Feat));
        assert_eq!(BonusCategory::from_str("LEVEL"), Ok(BonusCategory::Level));
        assert!(BonusCategory::from_str("equipment").is_err());
    }

    #[test]
    fn base_abilities_json_rejects_negative_score() {
        let result: Result<BaseAbilities, _> =
            serde_json::from_str(r#"{"scores":{"strength":-1}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn ability_bonus_json_cannot_bypass_validation() {
        // The same rules as AbilityBonus::new apply at the serde boundary.
        let base_tag: Result<AbilityBonus, _> =
            serde_json::from_str(r#"{"category":"BASE","scores":{}}"#);
        assert!(base_tag.is_err());

        let negative: Result<AbilityBonus, _> =
            serde_json::from_str(r#"{"category":"FEAT","scores":{"wisdom":-2}}"#);
        assert!(negative.is_err());
    }

    #[test]
    fn ability_bonus_serde_roundtrip() {
        let bonus = AbilityBonus::new(
            BonusCategory::Level,
            ScoreSet::new().with(Ability::Constitution, 1),
        )
        .expect("valid level bonus");
        let json = serde_json::to_string(&bonus).unwrap();
        let parsed: AbilityBonus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, bonus);
    }
}
