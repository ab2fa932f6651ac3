//! Schema selection threaded explicitly into every catalog read.

/// Which schemas a run looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaFilter {
    schemas: Vec<String>,
}

impl SchemaFilter {
    /// Every schema in the database.
    pub fn all() -> Self {
        Self::default()
    }

    /// Only the named schemas. An empty list means all schemas.
    pub fn only<I, S>(schemas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            schemas: schemas.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true when no restriction applies.
    pub fn is_all(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Returns true when `schema` passes the filter.
    pub fn includes(&self, schema: &str) -> bool {
        self.is_all() || self.schemas.iter().any(|s| s == schema)
    }

    /// The filter as a nullable `text[]` query parameter.
    pub fn as_param(&self) -> Option<&[String]> {
        if self.is_all() {
            None
        } else {
            Some(&self.schemas)
        }
    }

    /// The selected schema names (empty for all).
    pub fn schemas(&self) -> &[String] {
        &self.schemas
    }
}
