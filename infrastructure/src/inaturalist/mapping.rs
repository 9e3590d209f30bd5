//! Mapping of an autocomplete payload to a [`TaxonRecord`]

use serde_json::Value;
use taxa_application::LookupError;
use taxa_domain::TaxonRecord;

/// Map the first entry of an autocomplete response.
///
/// - `Ok(None)`: the `results` array is empty.
/// - `Err(Malformed)`: there is no `results` array, or the first result
///   has no numeric `id`.
///
/// Missing optional fields become the placeholder.
pub fn map_first_result(
    entered: &str,
    payload: &Value,
    observations_base: &str,
) -> Result<Option<TaxonRecord>, LookupError> {
    let results = payload
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| LookupError::Malformed("missing results array".to_string()))?;

    let Some(taxon) = results.first() else {
        return Ok(None);
    };

    let taxon_id = taxon["id"]
        .as_u64()
        .ok_or_else(|| LookupError::Malformed("first result has no numeric id".to_string()))?;

    let record = TaxonRecord::new(taxon_id, entered)
        .with_scientific_name(taxon["name"].as_str())
        .with_common_name(taxon["preferred_common_name"].as_str())
        .with_observations_count(taxon["observations_count"].as_u64())
        .with_taxon_changes_count(taxon["taxon_changes_count"].as_u64())
        .with_matched_term(taxon["matched_term"].as_str())
        .with_observations_base(observations_base);

    Ok(Some(record))
}
