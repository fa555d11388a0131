//! Text normalization shared by keyword detection.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lower-cases, strips diacritics (NFD + combining-mark removal) and trims.
///
/// `"Überfordert "` becomes `"uberfordert"`. Characters without a
/// decomposition, such as `ß`, are kept as they are.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}
