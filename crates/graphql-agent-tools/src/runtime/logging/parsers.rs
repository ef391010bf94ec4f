//! Deserializers for logging options written as plain strings

use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};
use tracing::Level;

/// A level name such as `debug` or `WARN`
pub(super) fn level<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse::<Level>().map_err(|_| {
        D::Error::invalid_value(
            Unexpected::Str(&name),
            &"one of trace, debug, info, warn or error",
        )
    })
}
