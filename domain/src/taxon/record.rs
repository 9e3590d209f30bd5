//! Taxon record - the mapped first match of a taxonomy search.

use super::count::format_count;
use serde::{Deserialize, Serialize};

/// Stand-in for any field the search response did not carry.
pub const PLACEHOLDER: &str = "N/A";

/// Site prefix for the observations page of a taxon.
pub const DEFAULT_OBSERVATIONS_BASE: &str = "https://www.inaturalist.org/observations";

/// Build the observations link for a taxon id.
pub fn observations_url(base: &str, taxon_id: u64) -> String {
    format!("{}?taxon_id={}", base.trim_end_matches('/'), taxon_id)
}

/// Result of a successful lookup (Value Object)
///
/// Every display field is already a string so renderers never need to
/// reason about absent values: missing fields hold [`PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonRecord {
    /// Numeric taxon identifier
    pub taxon_id: u64,
    /// Scientific name of the taxon
    pub scientific_name: String,
    /// Preferred common name
    pub common_name: String,
    /// Observation count, en-US formatted
    pub observations_count: String,
    /// Number of taxonomic revisions
    pub taxon_changes_count: String,
    /// The exact term the search matched
    pub matched_term: String,
    /// The term as the user entered it
    pub entered_term: String,
    /// Link to the taxon's observations
    pub observations_url: String,
}

impl TaxonRecord {
    /// Start a record for `taxon_id` matched from `entered_term`.
    ///
    /// All optional fields start as [`PLACEHOLDER`]; the observations link
    /// points at [`DEFAULT_OBSERVATIONS_BASE`].
    pub fn new(taxon_id: u64, entered_term: impl Into<String>) -> Self {
        Self {
            taxon_id,
            scientific_name: PLACEHOLDER.to_string(),
            common_name: PLACEHOLDER.to_string(),
            observations_count: PLACEHOLDER.to_string(),
            taxon_changes_count: PLACEHOLDER.to_string(),
            matched_term: PLACEHOLDER.to_string(),
            entered_term: entered_term.into(),
            observations_url: observations_url(DEFAULT_OBSERVATIONS_BASE, taxon_id),
        }
    }

    pub fn with_scientific_name(mut self, name: Option<&str>) -> Self {
        self.scientific_name = text_or_placeholder(name);
        self
    }

    pub fn with_common_name(mut self, name: Option<&str>) -> Self {
        self.common_name = text_or_placeholder(name);
        self
    }

    pub fn with_observations_count(mut self, count: Option<u64>) -> Self {
        self.observations_count = count.map_or_else(|| PLACEHOLDER.to_string(), format_count);
        self
    }

    pub fn with_taxon_changes_count(mut self, count: Option<u64>) -> Self {
        self.taxon_changes_count =
            count.map_or_else(|| PLACEHOLDER.to_string(), |c| c.to_string());
        self
    }

    pub fn with_matched_term(mut self, term: Option<&str>) -> Self {
        self.matched_term = text_or_placeholder(term);
        self
    }

    /// Point the observations link at a different site prefix.
    pub fn with_observations_base(mut self, base: &str) -> Self {
        self.observations_url = observations_url(base, self.taxon_id);
        self
    }
}

fn text_or_placeholder(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_uses_placeholders() {
        let record = TaxonRecord::new(43584, "Homo sapiens");
        assert_eq!(record.scientific_name, PLACEHOLDER);
        assert_eq!(record.common_name, PLACEHOLDER);
        assert_eq!(record.observations_count, PLACEHOLDER);
        assert_eq!(record.taxon_changes_count, PLACEHOLDER);
        assert_eq!(record.matched_term, PLACEHOLDER);
        assert_eq!(record.entered_term, "Homo sapiens");
        assert_eq!(
            record.observations_url,
            "https://www.inaturalist.org/observations?taxon_id=43584"
        );
    }

    #[test]
    fn test_builder_fills_fields() {
        let record = TaxonRecord::new(41944, "puma")
            .with_scientific_name(Some("Puma concolor"))
            .with_common_name(Some("Cougar"))
            .with_observations_count(Some(52_310))
            .with_taxon_changes_count(Some(2))
            .with_matched_term(Some("Puma"));

        assert_eq!(record.scientific_name, "Puma concolor");
        assert_eq!(record.common_name, "Cougar");
        assert_eq!(record.observations_count, "52,310");
        assert_eq!(record.taxon_changes_count, "2");
        assert_eq!(record.matched_term, "Puma");
    }

    #[test]
    fn test_blank_text_degrades_to_placeholder() {
        let record = TaxonRecord::new(1, "x").with_common_name(Some("   "));
        assert_eq!(record.common_name, PLACEHOLDER);
    }

    #[test]
    fn test_observations_base_override() {
        let record = TaxonRecord::new(7, "x").with_observations_base("http://localhost:9000/obs/");
        assert_eq!(record.observations_url, "http://localhost:9000/obs?taxon_id=7");
    }
}
