//! Entities - Character sheet objects with identity and lookup tables

mod builder;
mod character;
mod class;
mod skill;

pub use builder::CharacterBuilder;
pub use character::{Character, ClassLevel, MAX_CHARACTER_LEVEL};
pub use class::CharacterClass;
pub use skill::Skill;
