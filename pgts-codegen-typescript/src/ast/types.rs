//! TypeScript type alias and union builders.

use pgts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript type aliases.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    doc: Option<String>,
    ty: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            ty: ty.into(),
        }
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    /// Build the type alias as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.clone()));
        }

        fragments.push(CodeFragment::line(format!(
            "export type {} = {};",
            self.name, self.ty
        )));

        fragments
    }
}

/// Builder for TypeScript union types. A union without variants is `never`.
#[derive(Debug, Clone)]
pub struct Union {
    name: String,
    doc: Option<String>,
    variants: Vec<String>,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            variants: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variants.push(variant.into());
        self
    }

    pub fn variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants.extend(variants.into_iter().map(Into::into));
        self
    }

    /// Build the union type as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Union {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let ty = if self.variants.is_empty() {
            "never".to_string()
        } else {
            self.variants.join(" | ")
        };
        TypeAlias::new(self.name.clone(), ty)
            .doc(self.doc.clone())
            .to_fragments()
    }
}
