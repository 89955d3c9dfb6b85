//! Filename derivation from paste content.

/// Characters allowed in a derived filename besides ASCII alphanumerics.
/// They also can't sit on either end of the result.
const PERMISSIBLE_CHARS: [char; 4] = ['-', '_', '.', ' '];

/// Fallback when no content line yields a usable name.
const DEFAULT_FILENAME: &str = "untitled";

/// Derives a filename (without extension) from the first meaningful line of
/// `text`.
///
/// A line qualifies if it has at least two ASCII alphanumeric characters, so
/// punctuation-only lines never become a name. Within the chosen line every
/// character outside `[A-Za-z0-9-_. ]` becomes `_`, then `-_. ` are trimmed
/// from both ends. Returns `"untitled"` when nothing qualifies.
pub fn derive_filename(text: &str) -> String {
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let good = line.chars().filter(char::is_ascii_alphanumeric).count();
        if good < 2 {
            continue;
        }

        let mapped: String = line
            .chars()
            .map(|c| if is_valid(c) { c } else { '_' })
            .collect();
        return mapped
            .trim_matches(|c| PERMISSIBLE_CHARS.contains(&c))
            .to_string();
    }
    DEFAULT_FILENAME.to_string()
}

fn is_valid(c: char) -> bool {
    c.is_ascii_alphanumeric() || PERMISSIBLE_CHARS.contains(&c)
}
