use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Lowercases, decomposes (NFD), drops diacritics and collapses every run of
/// characters outside `[a-z0-9]` into one hyphen. Leading and trailing
/// hyphens never make it into the output.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for ch in lowered.nfd().filter(|c| !is_diacritic(*c)) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    out
}

/// Approximates the Unicode `Diacritic` property: combining marks, minus the
/// combining Latin small letters (U+0363..=U+036F, which are letters rather
/// than accents), plus the spacing Latin and Greek diacritics.
///
/// Combining marks outside the Latin and Greek blocks that Unicode does not
/// flag as `Diacritic` (some Indic vowel signs, for example) are still
/// stripped here instead of hyphenated. Those scripts never survive the
/// `[a-z0-9]` filter anyway, so only the hyphen placement can differ.
fn is_diacritic(c: char) -> bool {
    let combining_letter = matches!(c, '\u{363}'..='\u{36f}');
    (is_combining_mark(c) && !combining_letter)
        || matches!(
            c,
            '^' | '`'
                | '\u{a8}'
                | '\u{af}'
                | '\u{b4}'
                | '\u{b7}'
                | '\u{b8}'
                | '\u{2b0}'..='\u{2ff}'
                | '\u{1fbd}'
                | '\u{1fbf}'..='\u{1fc1}'
                | '\u{1fcd}'..='\u{1fcf}'
                | '\u{1fdd}'..='\u{1fdf}'
                | '\u{1fed}'..='\u{1fef}'
                | '\u{1ffd}'..='\u{1ffe}'
        )
}
