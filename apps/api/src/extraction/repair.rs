//! Best-effort cleanup of model output before JSON parsing.
//!
//! The only repair performed is closing unbalanced `{` at the end of the text.
//! Brackets, strings cut mid-literal and dangling keys are left alone, and
//! braces inside string literals are counted like any other.

use tracing::warn;

/// Removes Markdown code-fence markers (```` ```json ```` or ```` ``` ````,
/// each with an optional trailing newline) wherever they appear, then trims.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json\n", "")
        .replace("```json", "")
        .replace("```\n", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Strips code fences and, if the result does not end with `}`, appends one
/// `}` for every unmatched `{`.
pub fn repair_truncated_json(text: &str) -> String {
    let mut cleaned = strip_code_fences(text);

    if !cleaned.ends_with('}') {
        let open = cleaned.matches('{').count();
        let close = cleaned.matches('}').count();
        let missing = open.saturating_sub(close);
        if missing > 0 {
            warn!("JSON appears truncated, appending {missing} closing braces");
            cleaned.extend(std::iter::repeat('}').take(missing));
        }
    }

    cleaned
}
