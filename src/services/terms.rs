use std::fs;
use std::io;
use std::path::Path;

/// Canonicalize one line of input: full-width spaces become plain spaces,
/// every literal parenthesis is dropped (balanced or not), and the result is
/// trimmed. Idempotent.
pub fn normalize_term(raw: &str) -> String {
    raw.replace('\u{3000}', " ")
        .replace(['(', ')'], "")
        .trim()
        .to_string()
}

pub fn terms_from_text(content: &str) -> Vec<String> {
    content
        .lines()
        .map(normalize_term)
        .filter(|term| !term.is_empty())
        .collect()
}

/// Resolve the term source: an explicit file wins over an inline string;
/// with neither, stdin is read to end-of-stream. Duplicates are preserved.
pub fn load_terms(inline: Option<&str>, file: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let content = if let Some(path) = file {
        fs::read_to_string(path)?
    } else if let Some(text) = inline {
        text.to_string()
    } else {
        io::read_to_string(io::stdin())?
    };
    Ok(terms_from_text(&content))
}
