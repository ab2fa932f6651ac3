//! Language-specific abstractions.
//!
//! - [`TypeMapper`] - Trait for rendering resolved column types in a target language

mod traits;

pub use traits::TypeMapper;
