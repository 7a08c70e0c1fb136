use export_core::{ExportDefaults, Value};

use super::cells::header_text;
use super::features::ExcelFeatures;

/// Widest column Excel will display, in character units.
const MAX_COLUMN_WIDTH: f64 = 255.0;

/// Column sizing heuristic based on header text only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnWidthRule {
    /// Width floor
    pub min_width: f64,
    /// Added to the header's character count
    pub padding: f64,
}

impl ColumnWidthRule {
    /// `max(min_width, chars(header) + padding)`, capped at Excel's maximum.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn width_for(&self, header: &Value) -> f64 {
        let chars = header_text(header).chars().count() as f64;
        (chars + self.padding).max(self.min_width).min(MAX_COLUMN_WIDTH)
    }
}

impl Default for ColumnWidthRule {
    fn default() -> Self {
        Self {
            min_width: 10.0,
            padding: 2.0,
        }
    }
}

/// XLSX encoder entry point.
#[derive(Debug, Clone, Default)]
pub struct XlsxEncoder {
    /// Enabled worksheet decorations.
    features: ExcelFeatures,
    /// Column sizing.
    pub(super) widths: ColumnWidthRule,
}

impl XlsxEncoder {
    /// Create a new encoder with all features enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder from configured defaults.
    #[must_use]
    pub fn from_defaults(defaults: &ExportDefaults) -> Self {
        Self {
            features: ExcelFeatures::from_defaults(defaults),
            widths: ColumnWidthRule {
                min_width: defaults.min_column_width,
                padding: defaults.column_padding,
            },
        }
    }

    /// Check if header freezing is enabled.
    #[must_use]
    pub fn freeze_header(&self) -> bool {
        self.features.contains(ExcelFeatures::FREEZE_HEADER)
    }

    /// Check if the auto-filter is enabled.
    #[must_use]
    pub fn add_filter(&self) -> bool {
        self.features.contains(ExcelFeatures::ADD_FILTER)
    }

    /// Configure header freezing.
    #[must_use]
    pub fn with_frozen_header(mut self, enabled: bool) -> Self {
        self.features.set(ExcelFeatures::FREEZE_HEADER, enabled);
        self
    }

    /// Configure the auto-filter.
    #[must_use]
    pub fn with_filter(mut self, enabled: bool) -> Self {
        self.features.set(ExcelFeatures::ADD_FILTER, enabled);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_width_heuristic() {
        let rule = ColumnWidthRule::default();
        assert!((rule.width_for(&json!("id")) - 10.0).abs() < f64::EPSILON);
        assert!((rule.width_for(&json!(null)) - 10.0).abs() < f64::EPSILON);
        assert!((rule.width_for(&json!("Customer name")) - 15.0).abs() < f64::EPSILON);
        assert!((rule.width_for(&json!("Množství")) - 10.0).abs() < f64::EPSILON);
        assert!((rule.width_for(&json!("x".repeat(400))) - 255.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builder_toggles() {
        let encoder = XlsxEncoder::new();
        assert!(encoder.freeze_header());
        assert!(encoder.add_filter());

        let encoder = encoder.with_frozen_header(false).with_filter(false);
        assert!(!encoder.freeze_header());
        assert!(!encoder.add_filter());
    }
}
