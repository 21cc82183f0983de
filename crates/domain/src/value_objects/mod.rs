//! Value objects - Immutable objects defined by their attributes

mod ability;
mod character_stats;
mod scores;

pub use ability::Ability;
pub use character_stats::{CharacterStats, MAX_TOTAL_SCORE};
pub use scores::{AbilityBonus, BaseAbilities, BonusCategory, ScoreSet};
