pub mod entities;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    Character, CharacterBuilder, CharacterClass, ClassLevel, Skill, MAX_CHARACTER_LEVEL,
};
