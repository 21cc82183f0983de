pub mod error;
pub mod ids;
pub mod value_objects;

pub use error::DomainError;
pub use ids::CharacterId;

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    Ability, AbilityBonus, BaseAbilities, BonusCategory, CharacterStats, ScoreSet,
    MAX_TOTAL_SCORE,
};
