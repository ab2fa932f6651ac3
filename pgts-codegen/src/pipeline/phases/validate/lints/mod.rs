//! Built-in lints for catalog validation.

mod duplicate_override;
mod empty_enum;
mod foreign_key_collision;
mod name_collision;

pub use duplicate_override::DuplicateOverrideLint;
pub use empty_enum::EmptyEnumLint;
pub use foreign_key_collision::ForeignKeyCollisionLint;
pub use name_collision::NameCollisionLint;
