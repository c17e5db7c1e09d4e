//! JSON rendering for annotation reports.

use super::AnnotationReport;
use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a report to JSON.
pub fn to_json(report: &AnnotationReport, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(report),
        JsonFormat::Compact => serde_json::to_string(report),
    };

    result.map_err(|e| Error::Serialize(format!("JSON serialization error: {}", e)))
}

/// Read a report back from JSON.
pub fn from_json(json: &str) -> Result<AnnotationReport> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::AnnotationLayer;
    use crate::model::{MarkKind, PageSize, Rect};

    fn sample_report() -> AnnotationReport {
        let mut layer = AnnotationLayer::new(1, PageSize::letter());
        layer
            .push(0, Rect::new(72.0, 72.0, 90.0, 84.0), MarkKind::Word)
            .unwrap();
        AnnotationReport::from_layer(None, &layer)
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample_report(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"annotations\""));
        assert!(json.contains("\"word\""));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample_report(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
    }

    #[test]
    fn test_from_json() {
        let json = to_json(&sample_report(), JsonFormat::Compact).unwrap();
        let report = from_json(&json).unwrap();
        assert_eq!(report.annotations.len(), 1);
        assert_eq!(report.annotations[0].kind, MarkKind::Word);

        assert!(from_json("{").is_err());
    }
}
