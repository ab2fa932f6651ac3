//! TypeScript `enum` declarations.

use pgts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for a string-valued TypeScript enum.
#[derive(Debug, Clone)]
pub struct TsEnum {
    name: String,
    doc: Option<String>,
    members: Vec<(String, String)>,
}

impl TsEnum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    /// Add a member. `value` is rendered as given, so it must already be a
    /// valid literal.
    pub fn member(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push((key.into(), value.into()));
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TsEnum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.clone()));
        }

        if self.members.is_empty() {
            fragments.push(CodeFragment::line(format!("export enum {} {{}}", self.name)));
        } else {
            fragments.push(CodeFragment::block(
                format!("export enum {} {{", self.name),
                self.members
                    .iter()
                    .map(|(key, value)| CodeFragment::line(format!("{} = {},", key, value)))
                    .collect(),
                Some("}".to_string()),
            ));
        }

        fragments
    }
}
