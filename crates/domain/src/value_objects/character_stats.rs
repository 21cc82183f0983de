//! CharacterStats - the single source of truth for a character's effective
//! ability scores.
//!
//! Composes one base set with one bonus layer per category and derives
//! totals and modifiers. The only mutation path is [`CharacterStats::add_bonus`],
//! which validates a whole batch against the score cap before applying any
//! of it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::DomainError;
use crate::value_objects::{Ability, AbilityBonus, BaseAbilities, BonusCategory};

/// Maximum permitted total score for any single ability after all layers
/// are summed.
pub const MAX_TOTAL_SCORE: i32 = 20;

/// Aggregated ability scores: base plus racial, feat, and level layers.
///
/// Deserialization goes through [`CharacterStats::with_bonuses`], so JSON
/// cannot place a layer in a slot its tag does not match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UncheckedCharacterStats")]
pub struct CharacterStats {
    base: BaseAbilities,
    racial: AbilityBonus,
    feat: AbilityBonus,
    level: AbilityBonus,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UncheckedCharacterStats {
    base: BaseAbilities,
    racial: AbilityBonus,
    feat: AbilityBonus,
    level: AbilityBonus,
}

impl TryFrom<UncheckedCharacterStats> for CharacterStats {
    type Error = DomainError;

    fn try_from(raw: UncheckedCharacterStats) -> Result<Self, Self::Error> {
        Self::with_bonuses(raw.base, Some(raw.racial), Some(raw.feat), Some(raw.level))
    }
}

impl CharacterStats {
    /// Create stats from a base set with all bonus layers zeroed.
    pub fn new(base: BaseAbilities) -> Self {
        Self {
            base,
            racial: AbilityBonus::zeroed(BonusCategory::Racial),
            feat: AbilityBonus::zeroed(BonusCategory::Feat),
            level: AbilityBonus::zeroed(BonusCategory::Level),
        }
    }

    /// Create stats with pre-built bonus layers.
    ///
    /// Each supplied layer must be tagged for the slot it is passed as; a
    /// missing layer defaults to a zeroed set with the correct tag.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::CategoryMismatch`] if a layer's tag does not
    /// match its slot.
    pub fn with_bonuses(
        base: BaseAbilities,
        racial: Option<AbilityBonus>,
        feat: Option<AbilityBonus>,
        level: Option<AbilityBonus>,
    ) -> Result<Self, DomainError> {
        let mut stats = Self::new(base);
        if let Some(bonus) = racial {
            stats.racial = checked_slot(BonusCategory::Racial, bonus)?;
        }
        if let Some(bonus) = feat {
            stats.feat = checked_slot(BonusCategory::Feat, bonus)?;
        }
        if let Some(bonus) = level {
            stats.level = checked_slot(BonusCategory::Level, bonus)?;
        }
        Ok(stats)
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Read accessors
    // ──────────────────────────────────────────────────────────────────────────

    /// The base score set.
    pub fn base(&self) -> &BaseAbilities {
        &self.base
    }

    /// The racial bonus layer.
    pub fn racial_bonus(&self) -> &AbilityBonus {
        &self.racial
    }

    /// The feat bonus layer.
    pub fn feat_bonus(&self) -> &AbilityBonus {
        &self.feat
    }

    /// The level bonus layer.
    pub fn level_bonus(&self) -> &AbilityBonus {
        &self.level
    }

    /// Total effective score: base plus the racial, feat, and level layers.
    pub fn total_score(&self, ability: Ability) -> i32 {
        self.base.get(ability)
            + self.racial.get(ability)
            + self.feat.get(ability)
            + self.level.get(ability)
    }

    /// Derived modifier: `floor((total - 10) / 2)`.
    ///
    /// Floor division rounds toward negative infinity, so a total of 7
    /// gives -2, not the -1 a truncating division would produce.
    pub fn modifier(&self, ability: Ability) -> i32 {
        (self.total_score(ability) - 10).div_euclid(2)
    }

    /// Add positive increments to one bonus layer.
    ///
    /// The whole batch is validated against pre-mutation totals before any
    /// field changes: either every increment applies or none do.
    ///
    /// # Errors
    ///
    /// - [`DomainError::UnknownCategory`] if `category` is `Base`.
    /// - [`DomainError::InvalidIncrement`] for any non-positive amount.
    /// - [`DomainError::ScoreCapExceeded`] if any prospective total would
    ///   exceed [`MAX_TOTAL_SCORE`].
    pub fn add_bonus(
        &mut self,
        category: BonusCategory,
        increments: &HashMap<Ability, i32>,
    ) -> Result<(), DomainError> {
        if !category.is_bonus() {
            return Err(DomainError::UnknownCategory { category });
        }

        // Validate increments
        for (&ability, &amount) in increments {
            if amount <= 0 {
                return Err(DomainError::InvalidIncrement { ability, amount });
            }
        }
        // The cap check uses the total across all four layers, so an
        // increment on one layer can fail because of another layer's
        // existing bonuses.
        for (&ability, &amount) in increments {
            // checked_add: an extreme increment must surface as a cap error,
            // not wrap around and slip past the comparison.
            let attempted = self
                .total_score(ability)
                .checked_add(amount)
                .unwrap_or(i32::MAX);
            if attempted > MAX_TOTAL_SCORE {
                return Err(DomainError::ScoreCapExceeded {
                    ability,
                    attempted,
                    cap: MAX_TOTAL_SCORE,
                });
            }
        }

        // Apply increments
        let Some(target) = self.bonus_slot_mut(category) else {
            return Err(DomainError::UnknownCategory { category });
        };
        for (&ability, &amount) in increments {
            target.increment(ability, amount);
        }
        Ok(())
    }

    fn bonus_slot_mut(&mut self, category: BonusCategory) -> Option<&mut AbilityBonus> {
        match category {
            BonusCategory::Racial => Some(&mut self.racial),
            BonusCategory::Feat => Some(&mut self.feat),
            BonusCategory::Level => Some(&mut self.level),
            BonusCategory::Base => None,
        }
    }
}

/// Verify a pre-built layer is tagged for the slot it was supplied as.
fn checked_slot(slot: BonusCategory, bonus: AbilityBonus) -> Result<AbilityBonus, DomainError> {
    if bonus.category() == slot {
        Ok(bonus)
    } else {
        Err(DomainError::CategoryMismatch {
            slot,
            found: bonus.category(),
        })
    }
}
