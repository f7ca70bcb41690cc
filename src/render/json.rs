//! JSON rendering for extraction results.

use crate::error::{Error, Result};

use super::Extraction;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert an extraction result to JSON.
pub fn to_json(extraction: &Extraction, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(extraction),
        JsonFormat::Compact => serde_json::to_string(extraction),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

impl Extraction {
    /// Render this result as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        to_json(self, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ExtractionStats;

    fn sample() -> Extraction {
        let mut stats = ExtractionStats::new();
        stats.pdf_version = Some("1.4".to_string());
        stats.stream_count = 1;
        Extraction::new("Report Title".to_string(), stats)
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"text\""));
        assert!(json.contains("Report Title"));
        assert!(json.contains("\"pdf_version\": \"1.4\""));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = sample().to_json(JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
        assert!(json.contains("\"stream_count\":1"));
    }

    #[test]
    fn test_json_round_trips_stats() {
        let original = sample();
        let json = original.to_json(JsonFormat::Compact).unwrap();
        let parsed: Extraction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.text, original.text);
        assert_eq!(parsed.stats, original.stats);
    }
}
