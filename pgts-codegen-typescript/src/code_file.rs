//! CodeFile abstraction for a generated TypeScript file.

use pgts_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A generated TypeScript file: a banner comment followed by body elements
/// separated by blank lines.
///
/// # Example
///
/// ```
/// use pgts_codegen_typescript::{CodeFile, ast::TypeAlias};
///
/// let file = CodeFile::new()
///     .banner(["This file has been generated."])
///     .add(TypeAlias::new("Id", "number"))
///     .render();
///
/// assert_eq!(file, "/*\n * This file has been generated.\n */\n\nexport type Id = number;\n");
/// ```
#[derive(Default)]
pub struct CodeFile {
    banner: Vec<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lines of the leading `/* ... */` banner.
    pub fn banner<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.banner = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        if !self.banner.is_empty() {
            builder.push_line("/*");
            for line in &self.banner {
                builder.push_line(&format!(" * {}", line));
            }
            builder.push_line(" */");
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 || !self.banner.is_empty() {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}
