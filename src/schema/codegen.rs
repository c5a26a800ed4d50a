//! Struct generation from sample records

use super::inference::TypeInferrer;
use super::types::{FieldDescriptor, StructSchema, TypeTag};
use serde_json::Value;
use std::collections::HashSet;

/// Struct generator: turns a sample of records into a schema declaration
#[derive(Debug, Clone, Default)]
pub struct StructGenerator {
    inferrer: TypeInferrer,
}

impl StructGenerator {
    /// Create a new generator with default inference settings
    pub fn new() -> Self {
        Self {
            inferrer: TypeInferrer::new(),
        }
    }

    /// Use a custom type inferrer
    #[must_use]
    pub fn with_inferrer(mut self, inferrer: TypeInferrer) -> Self {
        self.inferrer = inferrer;
        self
    }

    /// Infer a schema from sample records.
    ///
    /// The field universe is the union of keys across every record. A field
    /// is optional iff it is null or absent in at least one record. Required
    /// fields come first, then optional fields; within each group, order of
    /// first appearance. An empty sample yields a schema with no fields.
    pub fn generate(&self, name: &str, records: &[Value]) -> StructSchema {
        let mut schema = StructSchema::new(name);

        let mut required = Vec::new();
        let mut optional = Vec::new();

        for field_name in field_universe(records) {
            let values = value_list(records, &field_name);
            let type_tag = self.inferrer.infer(&values);
            let is_optional = values
                .iter()
                .any(|v| matches!(v, None | Some(Value::Null)));

            let field = FieldDescriptor::new(field_name, type_tag, is_optional);
            if is_optional {
                optional.push(field);
            } else {
                required.push(field);
            }
        }

        for field in required.into_iter().chain(optional) {
            schema.add_field(field);
        }

        schema
    }

    /// Infer a schema and render it as a declaration string
    pub fn generate_code(&self, name: &str, records: &[Value]) -> String {
        self.generate(name, records).render()
    }

    /// Infer the type of a single field's value list
    pub fn infer_field(&self, records: &[Value], field_name: &str) -> TypeTag {
        self.inferrer.infer(&value_list(records, field_name))
    }
}

/// Generate a struct declaration with default settings (convenience function)
pub fn generate_struct(name: &str, records: &[Value]) -> String {
    StructGenerator::new().generate_code(name, records)
}

/// All field names observed anywhere in the sample, in first-seen order
fn field_universe(records: &[Value]) -> Vec<String> {
    let mut names = Vec::new();
    let mut seen = HashSet::new();

    for record in records {
        if let Value::Object(map) = record {
            for key in map.keys() {
                if seen.insert(key.clone()) {
                    names.push(key.clone());
                }
            }
        }
    }

    names
}

/// The values observed for one field across all records.
///
/// `None` marks records where the field is absent; non-object records count
/// as absent for every field.
fn value_list<'a>(records: &'a [Value], field_name: &str) -> Vec<Option<&'a Value>> {
    records
        .iter()
        .map(|record| match record {
            Value::Object(map) => map.get(field_name),
            _ => None,
        })
        .collect()
}
