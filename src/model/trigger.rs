//! Domain models for trigger phrases.

/// Phrases seeded into an empty store on startup.
pub const DEFAULT_TRIGGER_PHRASES: [&str; 3] = ["shiny hunt pings", "collection pings", "rare ping"];

/// Longest trigger phrase accepted from a command.
pub const MAX_PHRASE_LENGTH: usize = 100;

/// A trigger phrase and whether it currently participates in matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerKeyword {
    /// Lowercased, trimmed phrase.
    pub phrase: String,
    pub enabled: bool,
}

impl TriggerKeyword {
    pub fn new(phrase: &str, enabled: bool) -> Self {
        Self {
            phrase: normalize_phrase(phrase),
            enabled,
        }
    }

    pub fn from_entity(entity: entity::trigger_keyword::Model) -> Self {
        Self {
            phrase: entity.phrase,
            enabled: entity.enabled,
        }
    }
}

/// Canonical form of a phrase: trimmed, lowercased, inner whitespace collapsed.
pub fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_phrase("  Shiny   Hunt PINGS "), "shiny hunt pings");
    }
}
