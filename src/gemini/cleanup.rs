//! Post-processing of raw model output into a clean commit message.

use regex_lite::Regex;

/// Clean raw model output into a usable commit message.
///
/// Strips wrapping quote characters and "Here's a commit message:" style
/// lead-ins, collapses runs of 3+ newlines down to 2, and trims surrounding
/// whitespace. The transform is idempotent: the quote and lead-in strips
/// iterate to a fixed point, since removing a lead-in can expose a quote and
/// vice versa.
///
/// An empty result is the caller's signal of a failed generation.
pub fn clean_message(raw: &str) -> String {
    let lead_in =
        Regex::new(r"(?i)^(here'?s? (is )?(a )?)?commit message:?\s*").expect("Invalid regex");

    let mut text = raw.trim().to_string();
    loop {
        let next = strip_lead_in(&lead_in, &strip_quotes(&text));
        if next == text {
            break;
        }
        text = next;
    }

    collapse_blank_lines(&text).trim().to_string()
}

/// Remove one leading and one trailing quote character, then trim.
fn strip_quotes(text: &str) -> String {
    let mut s = text.trim();
    if let Some(rest) = s.strip_prefix(['"', '\'']) {
        s = rest;
    }
    if let Some(rest) = s.strip_suffix(['"', '\'']) {
        s = rest;
    }
    s.trim().to_string()
}

/// Remove one "commit message:" lead-in phrase, then trim.
fn strip_lead_in(lead_in: &Regex, text: &str) -> String {
    lead_in.replace(text, "").trim().to_string()
}

/// Collapse 3-or-more consecutive newlines into exactly 2.
fn collapse_blank_lines(text: &str) -> String {
    let runs = Regex::new(r"\n{3,}").expect("Invalid regex");
    runs.replace_all(text, "\n\n").into_owned()
}
