//! Shape raw introspection responses into compact summaries for an AI agent.

use crate::errors::ApiError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Introspection query listing the name of every type in the schema
pub(crate) const TYPE_NAMES_QUERY: &str = r#"
query IntrospectionQuery {
  __schema {
    types {
      name
    }
  }
}
"#;

/// Introspection query fetching the kind and fields of every type in the schema
pub(crate) const TYPE_INFO_QUERY: &str = r#"
query IntrospectionQuery {
  __schema {
    types {
      name
      kind
      fields {
        name
        type {
          name
          kind
          ofType {
            name
            kind
          }
        }
      }
    }
  }
}
"#;

/// Summaries of the requested types, keyed by type name in schema order
pub type TypeSummaries = IndexMap<String, TypeSummary>;

/// The kind and fields of a single schema type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeSummary {
    pub kind: String,
    pub fields: Vec<FieldSummary>,
}

/// A field of a schema type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSummary {
    pub name: String,
    /// The named type of the field, looking through at most one wrapper
    #[serde(rename = "type")]
    pub type_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Introspection<T> {
    #[serde(rename = "__schema")]
    schema: SchemaTypes<T>,
}

#[derive(Debug, Deserialize)]
struct SchemaTypes<T> {
    types: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct NamedType {
    name: String,
}

#[derive(Debug, Deserialize)]
struct FullType {
    name: String,
    kind: String,
    #[serde(default)]
    fields: Option<Vec<Field>>,
}

#[derive(Debug, Deserialize)]
struct Field {
    name: String,
    #[serde(rename = "type")]
    field_type: TypeRef,
}

#[derive(Debug, Deserialize)]
struct TypeRef {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "ofType")]
    of_type: Option<Box<TypeRef>>,
}

impl TypeRef {
    /// The direct name, or the name of the wrapped type. Deeper wrappers are not unwrapped.
    fn resolved_name(self) -> Option<String> {
        self.name
            .or_else(|| self.of_type.and_then(|of_type| of_type.name))
    }
}

/// Extract every type name from a [`TYPE_NAMES_QUERY`] response, in server order
pub(crate) fn type_names(data: Value) -> Result<Vec<String>, ApiError> {
    let introspection: Introspection<NamedType> = serde_json::from_value(data)?;
    Ok(introspection
        .schema
        .types
        .into_iter()
        .map(|named| named.name)
        .collect())
}

/// Summarize the requested types from a [`TYPE_INFO_QUERY`] response.
///
/// Names that are not in the schema are skipped. Types without fields, such as
/// scalars and enums, have an empty field list.
pub(crate) fn type_summaries<S: AsRef<str>>(
    data: Value,
    names: &[S],
) -> Result<TypeSummaries, ApiError> {
    let requested: HashSet<&str> = names.iter().map(|name| name.as_ref()).collect();
    let introspection: Introspection<FullType> = serde_json::from_value(data)?;

    Ok(introspection
        .schema
        .types
        .into_iter()
        .filter(|full_type| requested.contains(full_type.name.as_str()))
        .map(|full_type| {
            let fields = full_type
                .fields
                .unwrap_or_default()
                .into_iter()
                .map(|field| FieldSummary {
                    name: field.name,
                    type_name: field.field_type.resolved_name(),
                })
                .collect();
            (
                full_type.name,
                TypeSummary {
                    kind: full_type.kind,
                    fields,
                },
            )
        })
        .collect())
}
