//! Generation timestamps.
//!
//! Scaffolding stamps the current year into the license text. Passing an
//! explicit [`GeneratedAt`] keeps the rest of the output reproducible.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// The moment a set of files was generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedAt(DateTime<Utc>);

impl GeneratedAt {
    /// Current wall-clock time.
    pub fn now() -> Self {
        GeneratedAt(Utc::now())
    }

    /// Midnight UTC on January 1st of `year`. Falls back to now for
    /// years chrono cannot represent.
    pub fn from_year(year: i32) -> Self {
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
            .single()
            .map(GeneratedAt)
            .unwrap_or_else(Self::now)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Format as ISO 8601 string.
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }
}

impl Default for GeneratedAt {
    fn default() -> Self {
        Self::now()
    }
}

impl std::fmt::Display for GeneratedAt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_iso8601())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_year() {
        let at = GeneratedAt::from_year(2024);
        assert_eq!(at.year(), 2024);
        assert_eq!(at.to_iso8601(), "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_serialization() {
        let at = GeneratedAt::from_year(2030);
        let json = serde_json::to_string(&at).unwrap();
        let parsed: GeneratedAt = serde_json::from_str(&json).unwrap();
        assert_eq!(at, parsed);
    }
}
