//! Language-agnostic code generation traits.

use pgts_ir::ForeignKey;

/// Trait for mapping catalog types to type expressions in a target language.
///
/// The [`TypeResolver`](crate::resolve::TypeResolver) decides *which* rule
/// applies to a column; the mapper decides how the result is spelled.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a builtin type from the system catalog (e.g. `int4`, `_text`).
    ///
    /// Returns `None` for types without a mapping so resolution can fall
    /// through to the enum, table and unknown rules.
    fn map_builtin(&self, type_name: &str) -> Option<String>;

    /// Reference an enum type declared in `namespace`.
    fn map_enum(&self, namespace: &str, name: &str) -> String;

    /// Reference the row type of a table declared in `namespace`.
    fn map_table(&self, namespace: &str, name: &str) -> String;

    /// Reference the type of the column a foreign key points at.
    fn map_foreign_key(&self, key: &ForeignKey) -> String;

    /// An array of `element`.
    fn map_array(&self, element: &str) -> String {
        format!("{}[]", element)
    }

    /// Make `ty` accept null.
    fn map_nullable(&self, ty: &str) -> String;

    /// The fallback for a type no rule recognized. `qualified` is
    /// `namespace.type` as the catalog reports it.
    fn map_unknown(&self, qualified: &str) -> String;
}
