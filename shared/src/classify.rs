//! Client-side triage labels. Neither value is stored by the backend.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

const HIGH_PRIORITY_KEYWORDS: [&str; 3] = ["app crash", "payment issue", "account locked"];
const MEDIUM_PRIORITY_KEYWORDS: [&str; 3] =
    ["job posting issue", "login problem", "profile update"];

/// Ticket priority derived from the free-text query type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Blocks the user from using the product or paying.
    High,
    /// Degrades a core flow.
    Medium,
    /// Everything else.
    Low,
}

impl Priority {
    /// Case-insensitive keyword match; high wins over medium.
    pub fn classify(query_type: &str) -> Priority {
        let lowered = query_type.to_lowercase();
        if HIGH_PRIORITY_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            Priority::High
        } else if MEDIUM_PRIORITY_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    /// CSS-friendly lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How loud a flagged item is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Few reports or backend-labelled low.
    #[default]
    Low,
    /// Worth a look soon.
    Medium,
    /// Needs attention first.
    High,
}

impl Severity {
    /// Thresholds used on reported-group cards.
    pub fn from_report_count(count: usize) -> Severity {
        match count {
            n if n >= 10 => Severity::High,
            n if n >= 5 => Severity::Medium,
            _ => Severity::Low,
        }
    }

    /// CSS-friendly lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Backend severities are free-form; unknown values read as low.
impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(match raw.trim().to_ascii_lowercase().as_str() {
            "high" | "critical" => Severity::High,
            "medium" => Severity::Medium,
            _ => Severity::Low,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn high_priority_keywords() {
        assert_eq!(Priority::classify("App Crash on launch"), Priority::High);
        assert_eq!(Priority::classify("PAYMENT ISSUE"), Priority::High);
        assert_eq!(Priority::classify("my account locked after reset"), Priority::High);
    }

    #[test]
    fn medium_priority_keywords() {
        assert_eq!(Priority::classify("Login Problem"), Priority::Medium);
        assert_eq!(Priority::classify("profile update failing"), Priority::Medium);
        assert_eq!(Priority::classify("Job posting issue"), Priority::Medium);
    }

    #[test]
    fn high_beats_medium() {
        assert_eq!(Priority::classify("login problem and app crash"), Priority::High);
    }

    #[test]
    fn everything_else_is_low() {
        assert_eq!(Priority::classify(""), Priority::Low);
        assert_eq!(Priority::classify("General question"), Priority::Low);
        assert_eq!(Priority::classify("app"), Priority::Low);
    }

    #[test]
    fn severity_thresholds() {
        assert_eq!(Severity::from_report_count(0), Severity::Low);
        assert_eq!(Severity::from_report_count(4), Severity::Low);
        assert_eq!(Severity::from_report_count(5), Severity::Medium);
        assert_eq!(Severity::from_report_count(9), Severity::Medium);
        assert_eq!(Severity::from_report_count(10), Severity::High);
    }

    #[test]
    fn unknown_backend_severity_is_low() {
        let severity: Severity = serde_json::from_value(json!("spicy")).unwrap();
        assert_eq!(severity, Severity::Low);
        let severity: Severity = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(severity, Severity::Low);
    }
}
