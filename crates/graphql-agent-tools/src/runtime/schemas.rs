//! Schemas for config fields whose Rust types do not describe their accepted format

use schemars::{Schema, SchemaGenerator, json_schema};

/// Header names mapped to values. Both are checked when the client is created.
pub(super) fn header_map(_generator: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "object",
        "additionalProperties": { "type": "string" }
    })
}

pub(super) fn level(_generator: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "string",
        "enum": ["trace", "debug", "info", "warn", "error"]
    })
}
