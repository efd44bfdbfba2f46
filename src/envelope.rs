//! Assembly of the output envelope printed on stdout.
//!
//! The envelope is one JSON object built by hand from text fragments; the
//! response body is never parsed. [`success`] embeds the reformatted body as
//! raw JSON, [`failure`] embeds an arbitrary message through [`escape`].

use crate::count::count_occurrences;
use crate::escape::escape;
use crate::reformat::reformat;

/// Marker counted to approximate the number of work orders in a response.
///
/// Heuristic: assumes each item of interest carries the marker exactly once.
/// Responses whose nested records also carry an `"Id"` property overcount.
pub const ITEM_MARKER: &str = "\"Id\":";

/// Builds the success envelope around a raw response body.
///
/// The body is assumed to be valid JSON text, or empty; an empty body is
/// rendered as `"data": null` so the envelope itself stays parseable.
pub fn success(body: &str) -> String {
    let count = count_occurrences(body, ITEM_MARKER);
    let formatted = reformat(body);
    let data = if formatted.is_empty() {
        "null"
    } else {
        formatted.as_str()
    };

    format!(
        "{{\n  \"success\": true,\n  \"count\": {},\n  \"data\": {}\n}}",
        count, data
    )
}

/// Builds the failure envelope around an error message.
pub fn failure(message: &str) -> String {
    format!(
        "{{\n  \"success\": false,\n  \"message\": \"{}\"\n}}",
        escape(message)
    )
}
