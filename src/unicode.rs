//! Character-level Unicode classification for Japanese text.

/// Assigned hiragana syllables (U+3041..U+3096). Script shifting uses this
/// range rather than the whole block so that voicing marks and iteration
/// marks stay untouched.
const HIRAGANA_SYLLABLES: std::ops::RangeInclusive<char> = '\u{3041}'..='\u{3096}';

/// Distance between a hiragana syllable and its katakana counterpart.
const KANA_OFFSET: u32 = 0x60;

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Katakana letters from small ァ through the prolonged sound mark ー
/// (U+30A1..U+30FC). The middle dot ・ (U+30FB) falls inside the range and
/// counts as katakana here.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A1}'..='\u{30FC}').contains(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

/// CJK symbols (U+3000..U+303F) and the full-width ASCII forms
/// (U+FF01..U+FF5E).
pub fn is_japanese_punctuation(c: char) -> bool {
    ('\u{3000}'..='\u{303F}').contains(&c) || ('\u{FF01}'..='\u{FF5E}').contains(&c)
}

/// True when `s` is non-empty and every char is katakana.
pub fn is_katakana_str(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_katakana)
}

/// Shift a single hiragana syllable to katakana; anything else is returned as is.
pub fn hiragana_to_katakana_char(c: char) -> char {
    if HIRAGANA_SYLLABLES.contains(&c) {
        char::from_u32(c as u32 + KANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// Shift a single katakana syllable to hiragana; anything else is returned as is.
pub fn katakana_to_hiragana_char(c: char) -> char {
    let shifted = (c as u32).checked_sub(KANA_OFFSET).and_then(char::from_u32);
    match shifted {
        Some(h) if HIRAGANA_SYLLABLES.contains(&h) => h,
        _ => c,
    }
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, etc.) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars().map(hiragana_to_katakana_char).collect()
}

/// Convert a katakana string to hiragana. ー and katakana-only letters
/// (ヷ, ヺ, ...) have no hiragana counterpart and pass through.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars().map(katakana_to_hiragana_char).collect()
}
