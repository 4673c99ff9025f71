use crate::application::ports::util::SlugGenerator;
use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block, left behind by NFD on accented letters.
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Apostrophes join the letters around them instead of splitting the word.
const fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}

/// Lowercases, folds accents to their base letter and joins the remaining
/// ASCII letter/digit runs with single hyphens.
///
/// Anything else (whitespace, hyphens, punctuation, letters with no ASCII
/// base such as CJK) separates runs. Apostrophes are dropped outright, so
/// `"O'Brien"` becomes `"obrien"` rather than the `"o-brien"` a plain
/// `[^a-z0-9\s-]` replacement would give.
#[must_use]
pub fn slugify(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let lowered = input.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut separated = false;

    for c in lowered
        .trim()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
    {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if separated && !slug.is_empty() {
                slug.push('-');
            }
            separated = false;
            slug.push(c);
        } else if !is_apostrophe(c) {
            separated = true;
        }
    }

    slug
}

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
