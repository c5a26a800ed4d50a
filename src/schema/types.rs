//! Schema types

use serde::{Deserialize, Serialize};

/// Inferred semantic type for a field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    String,
    Integer,
    Float,
    Boolean,
    Timestamp,
    /// Fallback for fields whose values span incompatible kinds.
    ///
    /// Carries the observed alternatives in canonical order
    /// (string, integer, float, boolean, timestamp).
    Union(Vec<TypeTag>),
}

/// Canonical ordering of primitive tags inside a union
const UNION_ORDER: [TypeTag; 5] = [
    TypeTag::String,
    TypeTag::Integer,
    TypeTag::Float,
    TypeTag::Boolean,
    TypeTag::Timestamp,
];

impl TypeTag {
    /// Reduce a set of observed kinds to a single tag.
    ///
    /// - no kinds observed (all values null): `String`
    /// - a single kind: that kind
    /// - exactly integer + float: `Float` (numeric widening)
    /// - anything else: `Union` of the observed kinds
    pub fn from_kinds(kinds: &std::collections::HashSet<TypeTag>) -> TypeTag {
        match kinds.len() {
            0 => TypeTag::String,
            1 => kinds
                .iter()
                .next()
                .cloned()
                .unwrap_or(TypeTag::String),
            2 if kinds.contains(&TypeTag::Integer) && kinds.contains(&TypeTag::Float) => {
                TypeTag::Float
            }
            _ => TypeTag::Union(
                UNION_ORDER
                    .iter()
                    .filter(|t| kinds.contains(t))
                    .cloned()
                    .collect(),
            ),
        }
    }

    /// Check if this tag is the union fallback
    pub fn is_union(&self) -> bool {
        matches!(self, TypeTag::Union(_))
    }

    /// Rust type name used when rendering a declaration
    pub fn rust_type(&self) -> &'static str {
        match self {
            TypeTag::String => "String",
            TypeTag::Integer => "i64",
            TypeTag::Float => "f64",
            TypeTag::Boolean => "bool",
            TypeTag::Timestamp => "DateTime<Utc>",
            TypeTag::Union(_) => "serde_json::Value",
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeTag::String => write!(f, "string"),
            TypeTag::Integer => write!(f, "integer"),
            TypeTag::Float => write!(f, "float"),
            TypeTag::Boolean => write!(f, "boolean"),
            TypeTag::Timestamp => write!(f, "timestamp"),
            TypeTag::Union(alternatives) => {
                let parts: Vec<String> = alternatives.iter().map(ToString::to_string).collect();
                write!(f, "{}", parts.join(" | "))
            }
        }
    }
}

/// One field of an inferred schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name, taken verbatim from the sample
    pub name: String,

    /// Inferred type
    pub type_tag: TypeTag,

    /// True if the field was null or absent in at least one record
    pub optional: bool,
}

impl FieldDescriptor {
    /// Create a new field descriptor
    pub fn new(name: impl Into<String>, type_tag: TypeTag, optional: bool) -> Self {
        Self {
            name: name.into(),
            type_tag,
            optional,
        }
    }
}

/// An inferred record schema: a declaration name plus ordered fields
///
/// Fields are ordered required-first; within each group, order of first
/// appearance in the sample. The same sample always yields the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructSchema {
    /// Declared type name, used verbatim
    pub name: String,

    /// Fields in render order
    pub fields: Vec<FieldDescriptor>,
}

impl StructSchema {
    /// Create a new empty schema
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field
    pub fn add_field(&mut self, field: FieldDescriptor) {
        self.fields.push(field);
    }

    /// Get a field by name
    pub fn get_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Required fields, in render order
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| !f.optional)
    }

    /// Optional fields, in render order
    pub fn optional_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.optional)
    }

    /// Render the schema as a Rust struct declaration
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("#[derive(Debug, Clone, Serialize, Deserialize)]\n");
        out.push_str(&format!("pub struct {} {{\n", self.name));

        for field in &self.fields {
            if field.type_tag.is_union() {
                out.push_str(&format!("    // mixed kinds: {}\n", field.type_tag));
            }
            if field.optional {
                out.push_str("    #[serde(default)]\n");
                out.push_str(&format!(
                    "    pub {}: Option<{}>,\n",
                    field.name,
                    field.type_tag.rust_type()
                ));
            } else {
                out.push_str(&format!(
                    "    pub {}: {},\n",
                    field.name,
                    field.type_tag.rust_type()
                ));
            }
        }

        out.push_str("}\n");
        out
    }
}
