//! Extraction orchestration.

use crate::{locate_json_blocks, parse_json_safely, validate_screens};
use serde_json::Value;
use storyreel_core::ExtractionResult;
use tracing::{debug, instrument, warn};

/// Extract storyboard records from free-form assistant text.
///
/// Locates candidate JSON blocks, parses each one, and accumulates the
/// records: arrays contribute their elements, lone objects contribute
/// themselves, in block-discovery order. When `validate` is true the
/// accumulated records are checked against the screen schema.
///
/// A validation failure does NOT fail the extraction: raw `data` is still
/// returned with `success = true`, the diagnostic lands in `error`, and
/// only `validated_data` is withheld. Callers that persist raw records are
/// not blocked by schema drift in AI output.
///
/// This function is total over untrusted model output: every failure mode
/// is reported through the result, never panicked or propagated.
#[instrument(skip(text), fields(text_len = text.len()))]
pub fn extract_storyboard(text: &str, validate: bool) -> ExtractionResult {
    let blocks = locate_json_blocks(text);
    if blocks.is_empty() {
        debug!("No candidate JSON blocks located");
        return ExtractionResult::failure("No JSON blocks found in the text");
    }

    let mut records = Vec::new();
    let mut parsed_blocks = Vec::new();

    for block in &blocks {
        match parse_json_safely(block) {
            Ok(Value::Array(items)) => {
                records.extend(items);
                parsed_blocks.push(block.clone());
            }
            Ok(value @ Value::Object(_)) => {
                records.push(value);
                parsed_blocks.push(block.clone());
            }
            Ok(_) => {
                debug!("Parsed JSON block was neither an array nor an object; skipping");
            }
            // Already logged by the parser; try the next block.
            Err(_) => {}
        }
    }

    if records.is_empty() {
        return ExtractionResult::failure_with_candidates("Failed to parse any JSON blocks", blocks);
    }

    let mut validated_data = None;
    let mut error = None;
    if validate {
        match validate_screens(&records) {
            Ok(screens) => validated_data = Some(screens),
            Err(e) => {
                warn!(error = %e, "Validation failed; returning raw records only");
                error = Some(e.kind.to_string());
            }
        }
    }

    ExtractionResult {
        success: true,
        data: Some(records),
        validated_data,
        error,
        raw_json_strings: Some(parsed_blocks),
    }
}
