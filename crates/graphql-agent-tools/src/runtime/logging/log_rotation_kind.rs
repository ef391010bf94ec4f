use schemars::JsonSchema;
use serde::Deserialize;
use tracing_appender::rolling::Rotation;

/// How often a log file is rolled over
#[derive(Debug, Deserialize, JsonSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogRotationKind {
    Minutely,
    Hourly,
    Daily,
    Never,
}

impl From<LogRotationKind> for Rotation {
    fn from(value: LogRotationKind) -> Self {
        match value {
            LogRotationKind::Minutely => Rotation::MINUTELY,
            LogRotationKind::Hourly => Rotation::HOURLY,
            LogRotationKind::Daily => Rotation::DAILY,
            LogRotationKind::Never => Rotation::NEVER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LogRotationKind;
    use rstest::rstest;
    use tracing_appender::rolling::Rotation;

    #[rstest]
    #[case(LogRotationKind::Minutely, Rotation::MINUTELY)]
    #[case(LogRotationKind::Hourly, Rotation::HOURLY)]
    #[case(LogRotationKind::Daily, Rotation::DAILY)]
    #[case(LogRotationKind::Never, Rotation::NEVER)]
    fn maps_to_rotation(#[case] kind: LogRotationKind, #[case] expected: Rotation) {
        assert_eq!(Rotation::from(kind), expected);
    }

    #[test]
    fn deserializes_lowercase_names() {
        assert_eq!(
            serde_json::from_str::<LogRotationKind>(r#""hourly""#).unwrap(),
            LogRotationKind::Hourly
        );
    }
}
