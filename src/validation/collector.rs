//! Error collection.
//!
//! Failures are kept as structured [`ErrorEntry`] values and only turned into
//! delimited text on [`ErrorCollector::render`]. Delimiters are read at render
//! time, so changing them affects errors collected earlier too.

use serde::{Deserialize, Serialize};

/// Default text placed before each rendered error.
pub const DEFAULT_ERROR_BEFORE: &str = "<p>";

/// Default text placed after each rendered error.
pub const DEFAULT_ERROR_AFTER: &str = "</p>";

/// Text wrapped around each rendered error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    /// Placed before the message
    pub before: String,
    /// Placed after the message
    pub after: String,
}

impl Delimiters {
    /// Create delimiters.
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
        }
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_BEFORE, DEFAULT_ERROR_AFTER)
    }
}

/// What produced an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorSource {
    /// A named rule from the rule library.
    Rule {
        rule: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        parameter: Option<String>,
    },
    /// A custom rule, by registration index on its field.
    Custom { index: usize },
}

/// One validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// Field that failed
    pub field: String,
    /// Rule that failed
    pub source: ErrorSource,
    /// Formatted, user-facing message
    pub message: String,
}

impl ErrorEntry {
    /// Entry for a failed named rule.
    pub fn rule(
        field: impl Into<String>,
        rule: impl Into<String>,
        parameter: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            source: ErrorSource::Rule {
                rule: rule.into(),
                parameter: parameter.map(str::to_string),
            },
            message: message.into(),
        }
    }

    /// Entry for a failed custom rule.
    pub fn custom(field: impl Into<String>, index: usize, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            source: ErrorSource::Custom { index },
            message: message.into(),
        }
    }
}

/// Accumulates errors in processing order.
#[derive(Debug, Clone, Default)]
pub struct ErrorCollector {
    entries: Vec<ErrorEntry>,
    delimiters: Delimiters,
}

impl ErrorCollector {
    /// Create an empty collector with default delimiters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collector with the given delimiters.
    pub fn with_delimiters(delimiters: Delimiters) -> Self {
        Self {
            entries: Vec::new(),
            delimiters,
        }
    }

    /// Record an error.
    pub fn add(&mut self, entry: ErrorEntry) {
        self.entries.push(entry);
    }

    /// Change the delimiters used by [`render`](Self::render).
    pub fn set_delimiters(&mut self, delimiters: Delimiters) {
        self.delimiters = delimiters;
    }

    /// Current delimiters.
    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    /// Render every error as `before + message + after`, one per line.
    pub fn render(&self) -> String {
        let Delimiters { before, after } = &self.delimiters;
        self.entries
            .iter()
            .map(|e| format!("{}{}{}\n", before, e.message, after))
            .collect()
    }

    /// All entries in processing order.
    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    /// All messages in processing order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.message.as_str())
    }

    /// Entries for one field.
    pub fn for_field<'a, 'b>(&'a self, field: &'b str) -> impl Iterator<Item = &'a ErrorEntry> + 'b
    where
        'a: 'b,
    {
        self.entries.iter().filter(move |e| e.field == field)
    }

    /// Drop all entries, keeping the delimiters.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no error was collected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<ErrorEntry> for ErrorCollector {
    fn extend<I: IntoIterator<Item = ErrorEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_delimiters() {
        let mut collector = ErrorCollector::new();
        collector.add(ErrorEntry::rule("prenom", "required", None, "Le champ Prénom est requis."));
        collector.add(ErrorEntry::custom("age", 0, "Tu dois être majeur !"));

        assert_eq!(
            collector.render(),
            "<p>Le champ Prénom est requis.</p>\n<p>Tu dois être majeur !</p>\n"
        );
    }

    #[test]
    fn test_delimiters_apply_to_earlier_errors() {
        let mut collector = ErrorCollector::new();
        collector.add(ErrorEntry::custom("age", 0, "too young"));
        collector.set_delimiters(Delimiters::new("<li>", "</li>"));

        assert_eq!(collector.render(), "<li>too young</li>\n");
    }

    #[test]
    fn test_empty_render() {
        assert_eq!(ErrorCollector::new().render(), "");
    }

    #[test]
    fn test_for_field_outlives_name() {
        let mut collector = ErrorCollector::new();
        collector.add(ErrorEntry::rule("age", "numeric", None, "a"));

        let found: Vec<&ErrorEntry> = {
            let name = String::from("age");
            collector.for_field(&name).collect()
        };
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_for_field_and_clear() {
        let mut collector = ErrorCollector::new();
        collector.extend([
            ErrorEntry::rule("age", "numeric", None, "a"),
            ErrorEntry::rule("nom", "required", None, "b"),
            ErrorEntry::rule("age", "less_than", Some("60"), "c"),
        ]);

        let age: Vec<&str> = collector.for_field("age").map(|e| e.message.as_str()).collect();
        assert_eq!(age, vec!["a", "c"]);

        collector.clear();
        assert!(collector.is_empty());
        assert_eq!(collector.delimiters(), &Delimiters::default());
    }

    #[test]
    fn test_entry_serialization() {
        let entry = ErrorEntry::rule("age", "less_than", Some("60"), "too old");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "field": "age",
                "source": {"kind": "rule", "rule": "less_than", "parameter": "60"},
                "message": "too old"
            })
        );

        let custom = serde_json::to_value(ErrorEntry::custom("age", 1, "x")).unwrap();
        assert_eq!(custom["source"], serde_json::json!({"kind": "custom", "index": 1}));
    }
}
