//! TypeScript interface builder.

use pgts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A property in a TypeScript interface.
#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    /// A `//` comment rendered right above the property.
    pub comment: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            comment: None,
        }
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    pub fn comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.clone()));
        }
        if let Some(comment) = &self.comment {
            fragments.push(CodeFragment::comment(comment.clone()));
        }
        fragments.push(CodeFragment::line(format!("{}: {};", self.name, self.ty)));
        fragments
    }
}

/// Builder for TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    doc: Option<String>,
    properties: Vec<Property>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            properties: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    /// Add a plain property.
    pub fn field(self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.property(Property::new(name, ty))
    }

    /// Add a property with full configuration.
    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.clone()));
        }

        if self.properties.is_empty() {
            fragments.push(CodeFragment::line(format!(
                "export interface {} {{}}",
                self.name
            )));
        } else {
            fragments.push(CodeFragment::block(
                format!("export interface {} {{", self.name),
                self.properties.iter().flat_map(Property::to_fragments).collect(),
                Some("}".to_string()),
            ));
        }

        fragments
    }
}
