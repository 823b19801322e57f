//! ASCII transliteration of Latin-extended letters.
//!
//! Runs after lowercasing, so only lowercase forms are listed. Characters
//! without an entry are left alone and later replaced by a separator.

use std::borrow::Cow;

/// Returns the ASCII substitution for `c`, if the table has one.
pub fn transliterate_char(c: char) -> Option<&'static str> {
    let mapped = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'č' | 'ĉ' | 'ċ' => "c",
        'ď' | 'đ' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' | 'ĕ' | 'ė' => "e",
        'ƒ' => "f",
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => "g",
        'ĥ' | 'ħ' => "h",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'ĩ' | 'ĭ' => "i",
        'į' | 'ı' | 'ĳ' | 'ĵ' => "j",
        'ķ' | 'ĸ' => "k",
        'ł' | 'ľ' | 'ĺ' | 'ļ' | 'ŀ' => "l",
        'ñ' | 'ń' | 'ň' | 'ņ' | 'ŉ' | 'ŋ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' | 'ŏ' => "o",
        'œ' => "oe",
        'ŕ' | 'ř' | 'ŗ' => "r",
        'ś' | 'š' | 'ş' | 'ŝ' | 'ș' => "s",
        'ť' | 'ţ' | 'ŧ' | 'ț' => "t",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ŭ' | 'ũ' | 'ų' => "u",
        'ŵ' => "w",
        'ý' | 'ÿ' | 'ŷ' => "y",
        'ž' | 'ż' | 'ź' => "z",
        _ => return None,
    };
    Some(mapped)
}

/// Applies [`transliterate_char`] to every character of `value`.
///
/// Borrows the input when nothing needs replacing.
pub fn transliterate(value: &str) -> Cow<'_, str> {
    if value.is_ascii() || !value.chars().any(|c| transliterate_char(c).is_some()) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match transliterate_char(c) {
            Some(ascii) => out.push_str(ascii),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}
