//! TypeScript namespace blocks.

use pgts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// An exported namespace whose members are separated by blank lines.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    name: String,
    doc: Option<String>,
    members: Vec<Vec<CodeFragment>>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    /// Add a member declaration.
    pub fn member(mut self, node: impl Renderable) -> Self {
        self.members.push(node.to_fragments());
        self
    }

    /// Add several member declarations.
    pub fn members<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        self.members
            .extend(nodes.into_iter().map(|node| node.to_fragments()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Namespace {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.clone()));
        }

        if self.members.is_empty() {
            fragments.push(CodeFragment::line(format!(
                "export namespace {} {{}}",
                self.name
            )));
        } else {
            fragments.push(CodeFragment::block(
                format!("export namespace {} {{", self.name),
                CodeFragment::separated(self.members.iter().cloned()),
                Some("}".to_string()),
            ));
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Interface, TypeAlias};

    #[test]
    fn test_nested_members_separated() {
        let ns = Namespace::new("Shop")
            .member(TypeAlias::new("Id", "number"))
            .member(Interface::new("Orders").field("id", "Shop.Id"))
            .build();
        assert_eq!(
            ns,
            "export namespace Shop {\n  export type Id = number;\n\n  export interface Orders {\n    id: Shop.Id;\n  }\n}\n"
        );
    }

    #[test]
    fn test_nested_namespaces() {
        let ns = Namespace::new("Db")
            .member(Namespace::new("Auth").member(TypeAlias::new("Role", "string")))
            .build();
        assert_eq!(
            ns,
            "export namespace Db {\n  export namespace Auth {\n    export type Role = string;\n  }\n}\n"
        );
    }

    #[test]
    fn test_empty_namespace() {
        assert_eq!(Namespace::new("Empty").build(), "export namespace Empty {}\n");
    }
}
