//! crates/logging/src/levels.rs
//! Severity and timestamp-precision enums for the debug logger.

use platform::TextColor;

/// Message severity, also used as the logger's minimum threshold.
///
/// Ordering follows declaration order: `Info < Warn < Error`. A message is
/// emitted when its level is at or above the configured threshold.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogLevel {
    /// Coarse progress messages.
    Info,
    /// Potentially harmful situations the host survives.
    Warn,
    /// Events that may break the host or precede a crash. Default threshold.
    Error,
}

impl LogLevel {
    /// Label prefixed to the message body.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO : ",
            Self::Warn => "WARNING : ",
            Self::Error => "ERROR : ",
        }
    }

    /// Console color for the call-site tag and body of a line at this level.
    #[must_use]
    pub const fn color(self) -> TextColor {
        match self {
            Self::Info => TextColor::LightGray,
            Self::Warn => TextColor::Yellow,
            Self::Error => TextColor::LightRed,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Error
    }
}

/// Granularity of the timestamp segment rendered in front of each line.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimePrecision {
    /// No timestamp segment at all.
    None,
    /// Hour and minute. Default.
    Partial,
    /// Hour, minute, and second.
    Precise,
    /// Hour, minute, second, and millisecond.
    Full,
}

impl Default for TimePrecision {
    fn default() -> Self {
        Self::Partial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering_matches_filtering_contract() {
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn default_threshold_is_error() {
        assert_eq!(LogLevel::default(), LogLevel::Error);
    }

    #[test]
    fn default_precision_is_partial() {
        assert_eq!(TimePrecision::default(), TimePrecision::Partial);
    }

    #[test]
    fn labels_match_line_format() {
        assert_eq!(LogLevel::Info.label(), "INFO : ");
        assert_eq!(LogLevel::Warn.label(), "WARNING : ");
        assert_eq!(LogLevel::Error.label(), "ERROR : ");
    }

    #[test]
    fn level_colors_follow_palette() {
        assert_eq!(LogLevel::Info.color(), TextColor::LightGray);
        assert_eq!(LogLevel::Warn.color(), TextColor::Yellow);
        assert_eq!(LogLevel::Error.color(), TextColor::LightRed);
    }

    #[test]
    fn precision_ordering_is_increasing_detail() {
        assert!(TimePrecision::None < TimePrecision::Partial);
        assert!(TimePrecision::Partial < TimePrecision::Precise);
        assert!(TimePrecision::Precise < TimePrecision::Full);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn levels_round_trip_through_serde() {
        let level: LogLevel =
            serde_json::from_str(&serde_json::to_string(&LogLevel::Warn).unwrap()).unwrap();
        assert_eq!(level, LogLevel::Warn);

        let precision: TimePrecision =
            serde_json::from_str(&serde_json::to_string(&TimePrecision::Full).unwrap()).unwrap();
        assert_eq!(precision, TimePrecision::Full);
    }
}
