use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;
use tracing::warn;

/// Error returned when parsing a board mode from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {expected}: '{got}'")]
pub struct ParsePrefError {
    pub expected: &'static str,
    pub got: String,
}

/// The dimension used to partition tickets into columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    #[default]
    Status,
    User,
    Priority,
}

impl GroupBy {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::User => "user",
            Self::Priority => "priority",
        }
    }

    /// Lenient parse for persisted values: unknown text falls back to the
    /// default and logs a warning instead of failing.
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            warn!("unknown grouping mode '{s}', falling back to '{}'", Self::default());
            Self::default()
        })
    }
}

/// The dimension used to order tickets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Priority,
    Title,
}

impl SortBy {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Title => "title",
        }
    }

    /// Lenient parse for persisted values: unknown text falls back to the
    /// default and logs a warning instead of failing.
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            warn!("unknown sort mode '{s}', falling back to '{}'", Self::default());
            Self::default()
        })
    }
}

/// The pair of board controls a derivation runs under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub group_by: GroupBy,
    pub sort_by: SortBy,
}

fn normalize(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupBy {
    type Err = ParsePrefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "status" => Ok(Self::Status),
            // "assignee" kept as a compatibility alias for the user dimension
            "user" | "assignee" => Ok(Self::User),
            "priority" => Ok(Self::Priority),
            _ => Err(ParsePrefError {
                expected: "grouping mode",
                got: s.to_string(),
            }),
        }
    }
}

impl FromStr for SortBy {
    type Err = ParsePrefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "priority" => Ok(Self::Priority),
            "title" => Ok(Self::Title),
            _ => Err(ParsePrefError {
                expected: "sort mode",
                got: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GroupBy, Preferences, SortBy};
    use std::str::FromStr;

    #[test]
    fn defaults_are_status_and_priority() {
        let prefs = Preferences::default();
        assert_eq!(prefs.group_by, GroupBy::Status);
        assert_eq!(prefs.sort_by, SortBy::Priority);
    }

    #[test]
    fn display_parse_roundtrips() {
        for value in [GroupBy::Status, GroupBy::User, GroupBy::Priority] {
            let rendered = value.to_string();
            let reparsed = GroupBy::from_str(&rendered).expect("rendered value should parse");
            assert_eq!(value, reparsed);
        }

        for value in [SortBy::Priority, SortBy::Title] {
            let rendered = value.to_string();
            let reparsed = SortBy::from_str(&rendered).expect("rendered value should parse");
            assert_eq!(value, reparsed);
        }
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        assert_eq!(GroupBy::from_str("  Priority "), Ok(GroupBy::Priority));
        assert_eq!(GroupBy::from_str("ASSIGNEE"), Ok(GroupBy::User));
        assert_eq!(SortBy::from_str(" TITLE"), Ok(SortBy::Title));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert!(GroupBy::from_str("bogus").is_err());
        assert!(GroupBy::from_str("").is_err());
        assert!(SortBy::from_str("severity").is_err());
    }

    #[test]
    fn lenient_parse_falls_back_to_defaults() {
        assert_eq!(GroupBy::parse_or_default("bogus"), GroupBy::Status);
        assert_eq!(GroupBy::parse_or_default(""), GroupBy::Status);
        assert_eq!(SortBy::parse_or_default("bogus"), SortBy::Priority);

        // Known values still win.
        assert_eq!(GroupBy::parse_or_default("user"), GroupBy::User);
        assert_eq!(SortBy::parse_or_default("title"), SortBy::Title);
    }

    #[test]
    fn serde_uses_lowercase_tokens() {
        assert_eq!(
            serde_json::to_string(&GroupBy::Priority).expect("serialize"),
            "\"priority\""
        );
        assert_eq!(
            serde_json::from_str::<SortBy>("\"title\"").expect("deserialize"),
            SortBy::Title
        );
    }
}
