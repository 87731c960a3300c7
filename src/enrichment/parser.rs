/*!
 * Best-effort extraction of structured results from model output.
 *
 * The model is asked for a JSON array but routinely wraps it in prose or
 * code fences. The contract is a deliberate two-stage scrape: locate the
 * outermost bracket pair, then strictly decode it. This is inherently lossy;
 * everything unparseable degrades to "not covered" rather than an error.
 */

use serde::Deserialize;
use serde_json::Value;

/// One per-item enrichment result as returned by the model
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ParsedResult {
    /// 1-based ordinal within the batch
    #[serde(default = "default_index")]
    pub index: usize,

    /// Translated title
    #[serde(default)]
    pub translated: String,

    /// Short summary
    #[serde(default)]
    pub summary: String,
}

fn default_index() -> usize {
    1
}

/// Extract per-item results from raw model output.
///
/// Returns the retained results (those whose index falls in
/// `[1, expected_count]`) and whether every ordinal in that range was
/// covered. Duplicated indexes keep all occurrences so that the caller's
/// in-order application gives last-write-wins. Never fails: decode and shape
/// errors yield whatever was salvageable with `fully_covered = false`.
pub fn parse(raw_text: &str, expected_count: usize) -> (Vec<ParsedResult>, bool) {
    let Some(start) = raw_text.find('[') else {
        return (Vec::new(), false);
    };
    let Some(end) = raw_text.rfind(']') else {
        return (Vec::new(), false);
    };
    if end <= start {
        return (Vec::new(), false);
    }

    let elements: Vec<Value> = match serde_json::from_str(&raw_text[start..=end]) {
        Ok(v) => v,
        Err(_) => return (Vec::new(), false),
    };

    let mut results = Vec::new();
    for element in elements {
        // Malformed elements are skipped, the rest are salvaged
        let Ok(result) = serde_json::from_value::<ParsedResult>(element) else {
            continue;
        };
        if result.index >= 1 && result.index <= expected_count {
            results.push(result);
        }
    }

    let mut covered = vec![false; expected_count];
    for result in &results {
        covered[result.index - 1] = true;
    }
    let fully_covered = covered.iter().all(|c| *c);

    (results, fully_covered)
}
