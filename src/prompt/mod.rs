//! Prompt construction: instruction template selection, diff truncation,
//! and final prompt assembly.

pub mod instructions;

use tracing::debug;

use crate::config::{Language, MessageLength};

use self::instructions::{
    CUSTOM_PLACEHOLDER, CUSTOM_TEMPLATE, ENGLISH_LONG, ENGLISH_SHORT, RUSSIAN_LONG, RUSSIAN_SHORT,
};

/// Maximum number of characters of diff included in the prompt.
pub const MAX_DIFF_LENGTH: usize = 10_000;

/// Marker appended when the diff is cut off.
pub const TRUNCATION_MARKER: &str = "\n...(truncated)";

/// Truncate an oversized diff to [`MAX_DIFF_LENGTH`] characters and append
/// the truncation marker. Diffs at or under the limit pass through verbatim.
pub fn truncate_diff(diff: &str) -> String {
    match diff.char_indices().nth(MAX_DIFF_LENGTH) {
        None => diff.to_string(),
        Some((byte_idx, _)) => {
            debug!(
                "Diff length {} chars exceeds {}, truncating",
                diff.chars().count(),
                MAX_DIFF_LENGTH
            );
            let mut out = diff[..byte_idx].to_string();
            out.push_str(TRUNCATION_MARKER);
            out
        }
    }
}

/// Select the instruction template for a language/length pair.
///
/// Japanese maps onto the English templates. The custom template ignores the
/// length selector and substitutes the user's free text for the placeholder
/// token.
pub fn instructions_for(
    language: Language,
    message_length: MessageLength,
    custom_instructions: &str,
) -> String {
    match (language, message_length) {
        (Language::Custom, _) => CUSTOM_TEMPLATE.replace(CUSTOM_PLACEHOLDER, custom_instructions),
        (Language::English | Language::Japanese, MessageLength::Short) => ENGLISH_SHORT.to_string(),
        (Language::English | Language::Japanese, MessageLength::Long) => ENGLISH_LONG.to_string(),
        (Language::Russian, MessageLength::Short) => RUSSIAN_SHORT.to_string(),
        (Language::Russian, MessageLength::Long) => RUSSIAN_LONG.to_string(),
    }
}

/// Assemble the full generation prompt from instructions, the (already
/// truncated) diff, and the blame analysis text.
pub fn assemble_prompt(instructions: &str, diff: &str, blame_analysis: &str) -> String {
    format!(
        "{instructions}\n\n\
         Git diff to analyze:\n\
         {diff}\n\n\
         Git blame analysis:\n\
         {blame_analysis}\n\n\
         Please provide ONLY the commit message, without any additional text or explanations."
    )
}
