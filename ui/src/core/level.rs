//! Proficiency level identifiers (A0 … C2).

use std::fmt;

/// Levels offered on the course listing page, in teaching order.
pub const KNOWN_LEVELS: [&str; 7] = ["A0", "A1", "A2", "B1", "B2", "C1", "C2"];

/// A level identifier normalized to uppercase.
///
/// Any string is accepted; unknown levels render an empty gallery and use the
/// raw identifier as their title.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Level(String);

impl Level {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_known(&self) -> bool {
        KNOWN_LEVELS.contains(&self.0.as_str())
    }

    /// Fluent message id holding the localized title (`level-b1`).
    pub fn title_key(&self) -> String {
        format!("level-{}", self.0.to_lowercase())
    }

    pub fn known() -> impl Iterator<Item = Level> {
        KNOWN_LEVELS.iter().map(|raw| Level::new(raw))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_uppercase() {
        assert_eq!(Level::new("b1").as_str(), "B1");
        // Uppercasing is the only normalization.
        assert_eq!(Level::new(" c2 ").as_str(), " C2 ");
        assert_ne!(Level::new(" b1\t"), Level::new("B1"));
    }

    #[test]
    fn title_key_is_lowercase_fluent_id() {
        assert_eq!(Level::new("A0").title_key(), "level-a0");
    }

    #[test]
    fn unknown_levels_are_kept_verbatim() {
        let level = Level::new("x9");
        assert_eq!(level.as_str(), "X9");
        assert!(!level.is_known());
        assert_eq!(Level::known().count(), KNOWN_LEVELS.len());
    }
}
