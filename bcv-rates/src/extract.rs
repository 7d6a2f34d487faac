//! Rate extraction from the BCV home page.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::debug;

use bcv_types::domain::is_plausible_rate;
use bcv_types::{CandidateRejection, ExtractError};

use crate::sanitize::sanitize;

/// CSS selector for the dollar quote: the `<strong>` inside the `#dolar` box.
pub const RATE_SELECTOR: &str = "#dolar strong";

static SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(RATE_SELECTOR).expect("rate selector is valid CSS"));

/// Finds the dollar rate in the page markup.
///
/// Every element matching [`RATE_SELECTOR`] is a candidate. Candidates that do
/// not parse or are not above 1 are skipped; the last valid one in document
/// order wins.
pub fn extract_rate(markup: &str) -> Result<f64, ExtractError> {
    let document = Html::parse_document(markup);
    let candidates: Vec<String> = document
        .select(&SELECTOR)
        .map(|element| element.text().collect())
        .collect();

    if candidates.is_empty() {
        return Err(ExtractError::NoMatch);
    }

    candidates
        .iter()
        .filter_map(|text| match parse_candidate(text) {
            Ok(rate) => Some(rate),
            Err(rejection) => {
                debug!(candidate = %text.trim(), %rejection, "Skipping rate candidate");
                None
            }
        })
        .last()
        .ok_or(ExtractError::NoValidCandidate {
            candidates: candidates.len(),
        })
}

/// Sanitizes and validates the text of a single candidate element.
pub fn parse_candidate(text: &str) -> Result<f64, CandidateRejection> {
    let cleaned = sanitize(text);
    let value: f64 = cleaned
        .parse()
        .map_err(|_| CandidateRejection::Unparsable(cleaned.clone()))?;

    if !is_plausible_rate(value) {
        return Err(CandidateRejection::Implausible(value));
    }
    Ok(value)
}
