//! TypeScript declaration generator.

use std::collections::HashMap;

use eyre::Result;
use pgts_codegen::{
    pipeline::{CompilationContext, Diagnostic, Severity},
    resolve::TypeResolver,
};
use pgts_core::to_enum_member;
use pgts_ir::{EnumType, OVERRIDE_SCHEMA, Schema, SchemaModel, Table, is_reserved_schema};
use pgts_manifest::{DEFAULT_NAMESPACE, EnumStyle};

use crate::{
    CodeFile, TypeScriptTypeMapper,
    ast::{Interface, Namespace, Property, TsEnum, TypeAlias, Union},
    escape_literal, property_name, sanitize_comment, sanitize_line, type_name,
};

const BANNER: [&str; 2] = ["This file has been generated.", "Do not edit"];

const JSON_ALIAS: &str = "Json";
const JSON_TYPE: &str = "number | string | boolean | null | { [x: string]: Json } | Json[]";

/// Options controlling the emitted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Root namespace wrapping every declaration.
    pub namespace: String,
    /// How enum types are declared.
    pub enum_style: EnumStyle,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            enum_style: EnumStyle::default(),
        }
    }
}

/// The generated file together with every diagnostic raised on the way.
#[derive(Debug, Clone)]
pub struct Emission {
    pub content: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl Emission {
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}

/// TypeScript generator for a schema model.
pub struct Generator {
    model: SchemaModel,
    options: GeneratorOptions,
    diagnostics: Vec<Diagnostic>,
}

impl Generator {
    pub fn new(model: SchemaModel, options: GeneratorOptions) -> Self {
        Self {
            model,
            options,
            diagnostics: Vec::new(),
        }
    }

    /// Create a generator from a finished pipeline run, carrying over its
    /// diagnostics.
    pub fn from_context(mut ctx: CompilationContext, options: GeneratorOptions) -> Result<Self> {
        let model = ctx.take_model()?;
        Ok(Self {
            model,
            options,
            diagnostics: ctx.diagnostics,
        })
    }

    pub fn model(&self) -> &SchemaModel {
        &self.model
    }

    /// Render the whole file.
    ///
    /// Unresolved column types never fail the emission; each one adds a
    /// warning to the returned diagnostics.
    pub fn emit(&self) -> Emission {
        let mapper = TypeScriptTypeMapper::new(&self.options.namespace);
        let resolver = TypeResolver::new(&self.model, &mapper);
        let mut diagnostics = self.diagnostics.clone();

        let mut root = Namespace::new(self.options.namespace.as_str())
            .doc(Some(self.root_doc()))
            .member(TypeAlias::new(JSON_ALIAS, JSON_TYPE));

        if !self.model.overrides().is_empty() {
            root = root.member(self.overrides_namespace());
        }

        for (name, schema) in self.model.schemas() {
            if is_reserved_schema(name) {
                continue;
            }
            root = root.member(self.schema_namespace(name, schema, &resolver, &mut diagnostics));
        }

        let content = CodeFile::new().banner(BANNER).add(root).render();
        Emission {
            content,
            diagnostics,
        }
    }

    fn root_doc(&self) -> String {
        format!(
            "This namespace represents the database and its tables\n\
             Each schema has its own namespace\n\
             To access them, use: `{}.<Schema>.<Table>['<column>']`",
            self.options.namespace
        )
    }

    fn overrides_namespace(&self) -> Namespace {
        Namespace::new(type_name(OVERRIDE_SCHEMA)).members(
            self.model
                .overrides()
                .iter()
                .map(|o| TypeAlias::new(o.name.as_str(), o.value.as_str())),
        )
    }

    fn schema_namespace(
        &self,
        name: &str,
        schema: &Schema,
        resolver: &TypeResolver<'_, TypeScriptTypeMapper>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Namespace {
        let mut namespace = Namespace::new(type_name(name));

        for enum_type in schema.types() {
            namespace = match self.options.enum_style {
                EnumStyle::Enum if !enum_type.labels.is_empty() => {
                    match member_collision(enum_type) {
                        None => namespace.member(ts_enum(enum_type)),
                        Some((first, second, member)) => {
                            diagnostics.push(
                                Diagnostic::warning(
                                    "emit",
                                    format!(
                                        "labels '{}' and '{}' both map to enum member {}, rendering '{}' as a union",
                                        first, second, member, enum_type.name
                                    ),
                                )
                                .at(format!("{}.{}", name, enum_type.name)),
                            );
                            namespace.member(union(enum_type))
                        }
                    }
                }
                _ => namespace.member(union(enum_type)),
            };
        }

        for table in schema.tables() {
            namespace = namespace.member(self.interface(table, resolver, diagnostics));
        }

        namespace
    }

    fn interface(
        &self,
        table: &Table,
        resolver: &TypeResolver<'_, TypeScriptTypeMapper>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Interface {
        let mut interface = Interface::new(type_name(&table.name))
            .doc(sanitize_comment(table.description.as_deref()));

        for column in &table.columns {
            let resolved = resolver.resolve(table, column);
            if let Some(diagnostic) = resolved.diagnostic(table, column) {
                diagnostics.push(diagnostic);
            }

            let comment = self
                .model
                .foreign_key(&table.schema, &table.name, &column.name)
                .map(|key| format!("foreign key `{}`", sanitize_line(&key.constraint)));

            interface = interface.property(
                Property::new(property_name(&column.name), resolved.expr)
                    .doc(sanitize_comment(column.description.as_deref()))
                    .comment(comment),
            );
        }

        interface
    }
}

fn literal(label: &str) -> String {
    format!("'{}'", escape_literal(label))
}

fn union(enum_type: &EnumType) -> Union {
    Union::new(type_name(&enum_type.name))
        .doc(sanitize_comment(enum_type.description.as_deref()))
        .variants(enum_type.labels.iter().map(|label| literal(label)))
}

fn member_name(label: &str) -> String {
    property_name(&to_enum_member(label))
}

fn ts_enum(enum_type: &EnumType) -> TsEnum {
    enum_type.labels.iter().fold(
        TsEnum::new(type_name(&enum_type.name))
            .doc(sanitize_comment(enum_type.description.as_deref())),
        |e, label| e.member(member_name(label), literal(label)),
    )
}

/// The first two labels that share a member name, with that name.
fn member_collision(enum_type: &EnumType) -> Option<(&str, &str, String)> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for label in &enum_type.labels {
        let member = member_name(label);
        if let Some(&first) = seen.get(&member) {
            return Some((first, label.as_str(), member));
        }
        seen.insert(member, label);
    }
    None
}
