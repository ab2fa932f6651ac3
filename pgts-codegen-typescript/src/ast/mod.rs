//! TypeScript AST builders for declaration files.
//!
//! These provide a high-level API for constructing TypeScript declarations,
//! which can then be rendered via CodeBuilder.

mod enums;
mod interface;
mod namespace;
mod types;

pub use enums::TsEnum;
pub use interface::{Interface, Property};
pub use namespace::Namespace;
pub use types::{TypeAlias, Union};
