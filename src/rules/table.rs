//! Static syllable tables. Kana are written in hiragana; the compiler shifts
//! them to katakana when building the katakana sub-trie.

// ---------------------------------------------------------------------------
// Kana -> romaji
// ---------------------------------------------------------------------------

/// Base syllabary shared by every scheme before spelling overrides.
#[rustfmt::skip]
pub(super) const MORAE: &[(char, &str)] = &[
    ('あ', "a"), ('い', "i"), ('う', "u"), ('え', "e"), ('お', "o"),
    ('か', "ka"), ('き', "ki"), ('く', "ku"), ('け', "ke"), ('こ', "ko"),
    ('さ', "sa"), ('し', "shi"), ('す', "su"), ('せ', "se"), ('そ', "so"),
    ('た', "ta"), ('ち', "chi"), ('つ', "tsu"), ('て', "te"), ('と', "to"),
    ('な', "na"), ('に', "ni"), ('ぬ', "nu"), ('ね', "ne"), ('の', "no"),
    ('は', "ha"), ('ひ', "hi"), ('ふ', "fu"), ('へ', "he"), ('ほ', "ho"),
    ('ま', "ma"), ('み', "mi"), ('む', "mu"), ('め', "me"), ('も', "mo"),
    ('や', "ya"), ('ゆ', "yu"), ('よ', "yo"),
    ('ら', "ra"), ('り', "ri"), ('る', "ru"), ('れ', "re"), ('ろ', "ro"),
    ('わ', "wa"), ('を', "wo"), ('ん', "n"),
    ('が', "ga"), ('ぎ', "gi"), ('ぐ', "gu"), ('げ', "ge"), ('ご', "go"),
    ('ざ', "za"), ('じ', "ji"), ('ず', "zu"), ('ぜ', "ze"), ('ぞ', "zo"),
    ('だ', "da"), ('ぢ', "ji"), ('づ', "zu"), ('で', "de"), ('ど', "do"),
    ('ば', "ba"), ('び', "bi"), ('ぶ', "bu"), ('べ', "be"), ('ぼ', "bo"),
    ('ぱ', "pa"), ('ぴ', "pi"), ('ぷ', "pu"), ('ぺ', "pe"), ('ぽ', "po"),
    ('ゔ', "vu"),
    ('ぁ', "a"), ('ぃ', "i"), ('ぅ', "u"), ('ぇ', "e"), ('ぉ', "o"),
    ('ゃ', "ya"), ('ゅ', "yu"), ('ょ', "yo"),
];

/// Kunrei-shiki spellings that differ from Hepburn.
#[rustfmt::skip]
pub(super) const KUNREI_SPELLINGS: &[(char, &str)] = &[
    ('し', "si"), ('ち', "ti"), ('つ', "tu"), ('ふ', "hu"),
    ('じ', "zi"), ('ぢ', "zi"), ('づ', "zu"), ('を', "o"),
];

/// Nihon-shiki keeps the historical d-row and を.
#[rustfmt::skip]
pub(super) const NIHON_SPELLINGS: &[(char, &str)] = &[
    ('し', "si"), ('ち', "ti"), ('つ', "tu"), ('ふ', "hu"),
    ('じ', "zi"), ('ぢ', "di"), ('づ', "du"), ('を', "wo"),
];

/// Small-y glides, in the order of [`Contraction::suffixes`].
pub(super) const GLIDES: [char; 3] = ['ゃ', 'ゅ', 'ょ'];

/// Morae that take a small-y glide. The token is the first letter of the
/// mora's token followed by the matching suffix.
pub(super) struct Contraction {
    pub kana: &'static [char],
    pub suffixes: [&'static str; 3],
}

const PALATAL: &[char] = &['き', 'に', 'ひ', 'み', 'り', 'ぎ', 'び', 'ぴ'];

#[rustfmt::skip]
pub(super) const HEPBURN_CONTRACTIONS: &[Contraction] = &[
    Contraction { kana: PALATAL, suffixes: ["ya", "yu", "yo"] },
    Contraction { kana: &['し', 'ち'], suffixes: ["ha", "hu", "ho"] },
    Contraction { kana: &['じ', 'ぢ'], suffixes: ["a", "u", "o"] },
];

#[rustfmt::skip]
pub(super) const SYSTEMATIC_CONTRACTIONS: &[Contraction] = &[
    Contraction { kana: PALATAL, suffixes: ["ya", "yu", "yo"] },
    Contraction { kana: &['し', 'ち', 'じ', 'ぢ'], suffixes: ["ya", "yu", "yo"] },
];

pub(super) const NASAL: char = 'ん';

/// Kana that get an apostrophe after a preceding ん.
pub(super) const NASAL_FOLLOWERS: &[char] = &['や', 'ゆ', 'よ', 'あ', 'い', 'う', 'え', 'お'];

pub(super) const SOKUON: char = 'っ';

/// Root entries that are never geminated.
#[rustfmt::skip]
pub(super) const GEMINATION_EXCLUDED: &[char] = &[
    'あ', 'い', 'う', 'え', 'お', 'や', 'ゆ', 'よ', 'ん',
    'ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ', 'ゃ', 'ゅ', 'ょ', 'っ',
];

/// Token onsets that are never doubled under the sokuon.
pub(super) const VOWELS: &[char] = &['a', 'i', 'u', 'e', 'o'];

/// Tokens starting with this digraph double the substitute letter instead.
pub(super) const AFFRICATE: (&str, char) = ("ch", 't');

/// Katakana prolonged sound mark.
pub(super) const PROLONGED: char = 'ー';

/// Full-width punctuation and its ASCII rendering.
#[rustfmt::skip]
pub(super) const PUNCTUATION: &[(char, char)] = &[
    ('。', '.'), ('、', ','), ('：', ':'), ('・', '/'), ('！', '!'),
    ('？', '?'), ('〜', '~'), ('ー', '-'), ('「', '‘'), ('」', '’'),
    ('『', '“'), ('』', '”'), ('［', '['), ('］', ']'), ('（', '('),
    ('）', ')'), ('｛', '{'), ('｝', '}'), ('　', ' '),
];

// ---------------------------------------------------------------------------
// Romaji -> kana
// ---------------------------------------------------------------------------

/// Latin spellings accepted by the kana composer. Hepburn, Kunrei and
/// Nihon-shiki spellings all map to the same kana.
#[rustfmt::skip]
pub(super) const KANA_MORAE: &[(&str, &str)] = &[
    ("a", "あ"), ("i", "い"), ("u", "う"), ("e", "え"), ("o", "お"),
    ("ka", "か"), ("ki", "き"), ("ku", "く"), ("ke", "け"), ("ko", "こ"),
    ("ca", "か"), ("cu", "く"), ("co", "こ"),
    ("sa", "さ"), ("si", "し"), ("su", "す"), ("se", "せ"), ("so", "そ"),
    ("shi", "し"),
    ("ta", "た"), ("ti", "ち"), ("tu", "つ"), ("te", "て"), ("to", "と"),
    ("chi", "ち"), ("tsu", "つ"),
    ("na", "な"), ("ni", "に"), ("nu", "ぬ"), ("ne", "ね"), ("no", "の"),
    ("ha", "は"), ("hi", "ひ"), ("hu", "ふ"), ("he", "へ"), ("ho", "ほ"),
    ("fu", "ふ"),
    ("ma", "ま"), ("mi", "み"), ("mu", "む"), ("me", "め"), ("mo", "も"),
    ("ya", "や"), ("yu", "ゆ"), ("yo", "よ"),
    ("ra", "ら"), ("ri", "り"), ("ru", "る"), ("re", "れ"), ("ro", "ろ"),
    ("wa", "わ"), ("wi", "ゐ"), ("we", "ゑ"), ("wo", "を"),
    ("n", "ん"),
    ("ga", "が"), ("gi", "ぎ"), ("gu", "ぐ"), ("ge", "げ"), ("go", "ご"),
    ("za", "ざ"), ("zi", "じ"), ("zu", "ず"), ("ze", "ぜ"), ("zo", "ぞ"),
    ("ji", "じ"),
    ("da", "だ"), ("di", "ぢ"), ("du", "づ"), ("de", "で"), ("do", "ど"),
    ("ba", "ば"), ("bi", "び"), ("bu", "ぶ"), ("be", "べ"), ("bo", "ぼ"),
    ("pa", "ぱ"), ("pi", "ぴ"), ("pu", "ぷ"), ("pe", "ぺ"), ("po", "ぽ"),
    ("va", "ゔぁ"), ("vi", "ゔぃ"), ("vu", "ゔ"), ("ve", "ゔぇ"), ("vo", "ゔぉ"),
    ("xa", "ぁ"), ("xi", "ぃ"), ("xu", "ぅ"), ("xe", "ぇ"), ("xo", "ぉ"),
    ("la", "ぁ"), ("li", "ぃ"), ("lu", "ぅ"), ("le", "ぇ"), ("lo", "ぉ"),
    ("xya", "ゃ"), ("xyu", "ゅ"), ("xyo", "ょ"),
    ("lya", "ゃ"), ("lyu", "ゅ"), ("lyo", "ょ"),
    ("xtu", "っ"), ("xtsu", "っ"), ("ltu", "っ"),
    ("xwa", "ゎ"), ("xka", "ゕ"), ("xke", "ゖ"),
];

/// Onsets that combine with `ya yi yu ye yo` into an i-row mora plus a small glide.
#[rustfmt::skip]
pub(super) const PALATAL_ONSETS: &[(char, char)] = &[
    ('k', 'き'), ('s', 'し'), ('t', 'ち'), ('n', 'に'), ('h', 'ひ'),
    ('m', 'み'), ('r', 'り'), ('g', 'ぎ'), ('z', 'じ'), ('d', 'ぢ'),
    ('b', 'び'), ('p', 'ぴ'), ('v', 'ゔ'), ('q', 'く'), ('f', 'ふ'),
];

#[rustfmt::skip]
pub(super) const SMALL_Y: &[(&str, char)] = &[
    ("ya", 'ゃ'), ("yi", 'ぃ'), ("yu", 'ゅ'), ("ye", 'ぇ'), ("yo", 'ょ'),
];

const DIGRAPH_GLIDES: &[(char, char)] = &[('a', 'ゃ'), ('u', 'ゅ'), ('e', 'ぇ'), ('o', 'ょ')];

/// Hepburn spellings that fuse the glide into the onset (`sha`, `cho`, `ju`)
/// plus `f` + vowel for ふぁ-style loanword syllables.
pub(super) const DIGRAPHS: &[(&str, char, &[(char, char)])] = &[
    ("sh", 'し', DIGRAPH_GLIDES),
    ("ch", 'ち', DIGRAPH_GLIDES),
    ("j", 'じ', DIGRAPH_GLIDES),
    ("f", 'ふ', &[('a', 'ぁ'), ('i', 'ぃ'), ('e', 'ぇ'), ('o', 'ぉ')]),
];

/// `n` is ん on its own; `n'` ends it explicitly and `xn` is an alias.
pub(super) const NASAL_LATIN: char = 'n';
pub(super) const NASAL_APOSTROPHE: char = '\'';
pub(super) const NASAL_ALIAS_PREFIX: char = 'x';

/// Root letters that never double into a っ.
pub(super) const KANA_GEMINATION_EXCLUDED: &[char] = &['a', 'i', 'u', 'e', 'o', 'n', 'x', 'l'];

/// Affricate gemination: `t` followed by the `c` subtree (`tchi` -> っち).
pub(super) const KANA_AFFRICATE: (char, char) = ('t', 'c');

/// Macron vowels and the kana that lengthens the preceding mora in hiragana.
/// Long o is written う.
pub(super) const MACRONS: &[(char, char, char)] = &[
    ('a', 'ā', 'あ'),
    ('i', 'ī', 'い'),
    ('u', 'ū', 'う'),
    ('e', 'ē', 'え'),
    ('o', 'ō', 'う'),
];

pub(super) fn macron(vowel: char) -> Option<char> {
    MACRONS
        .iter()
        .find(|&&(plain, _, _)| plain == vowel)
        .map(|&(_, long, _)| long)
}
