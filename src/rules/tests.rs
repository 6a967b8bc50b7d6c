use super::romaji::{geminate, LongVowel};
use super::table::{GEMINATION_EXCLUDED, MORAE};
use super::*;
use crate::converter::RomanizationMethod;

fn lookup<'a>(rules: &'a RuleSet, path: &str) -> Option<&'a str> {
    rules.trie().get(path).map(String::as_str)
}

// ---------------------------------------------------------------------------
// Token transforms
// ---------------------------------------------------------------------------

#[test]
fn geminate_doubles_leading_consonant() {
    assert_eq!(geminate("ka"), "kka");
    assert_eq!(geminate("tsu"), "ttsu");
    assert_eq!(geminate("shu"), "sshu");
    assert_eq!(geminate("tya"), "ttya");
    assert_eq!(geminate(""), "");
}

#[test]
fn geminate_affricate_uses_t() {
    assert_eq!(geminate("chi"), "tchi");
    assert_eq!(geminate("cha"), "tcha");
}

#[test]
fn long_vowel_transforms() {
    assert_eq!(LongVowel::Double.extend("su"), "suu");
    assert_eq!(LongVowel::Double.extend("kyo"), "kyoo");
    assert_eq!(LongVowel::Hyphen.extend("su"), "su-");
    assert_eq!(LongVowel::Macron.extend("su"), "sū");
    assert_eq!(LongVowel::Macron.extend("kyo"), "kyō");
    assert_eq!(LongVowel::Macron.extend("e"), "ē");
    assert_eq!(LongVowel::Double.extend(""), "");
}

#[test]
fn script_shifts_table_kana() {
    assert_eq!(Script::Hiragana.kana('か'), 'か');
    assert_eq!(Script::Katakana.kana('か'), 'カ');
    assert_eq!(Script::Katakana.kana('ー'), 'ー');
    assert_eq!(Script::Katakana.kana_str("ゔぁ"), "ヴァ");
    assert_eq!(Script::Hiragana.prolonged_sound_mark(), None);
    assert_eq!(Script::Katakana.prolonged_sound_mark(), Some('ー'));
}

// ---------------------------------------------------------------------------
// Kana -> romaji rules
// ---------------------------------------------------------------------------

#[test]
fn every_method_compiles() {
    for method in RomanizationMethod::ALL {
        let rules = RuleSet::compile_romaji(method).unwrap();
        assert!(!rules.trie().is_empty(), "{method} produced no rules");
        assert!(!rules.fold_case());
    }
}

#[test]
fn base_and_contractions() {
    let rules = RuleSet::romaji(RomanizationMethod::Hepburn);
    assert_eq!(lookup(rules, "し"), Some("shi"));
    assert_eq!(lookup(rules, "シ"), Some("shi"));
    assert_eq!(lookup(rules, "きゃ"), Some("kya"));
    assert_eq!(lookup(rules, "しょ"), Some("sho"));
    assert_eq!(lookup(rules, "チュ"), Some("chu"));
    assert_eq!(lookup(rules, "ぢゃ"), Some("ja"));
    assert_eq!(lookup(rules, "かゃ"), None);

    let kunrei = RuleSet::romaji(RomanizationMethod::Kunrei);
    assert_eq!(lookup(kunrei, "し"), Some("si"));
    assert_eq!(lookup(kunrei, "しょ"), Some("syo"));
    assert_eq!(lookup(kunrei, "ちゃ"), Some("tya"));
    assert_eq!(lookup(kunrei, "ぢゃ"), Some("zya"));

    let nihon = RuleSet::romaji(RomanizationMethod::Nihon);
    assert_eq!(lookup(nihon, "ぢゃ"), Some("dya"));
    assert_eq!(lookup(nihon, "づ"), Some("du"));
}

#[test]
fn nasal_apostrophes() {
    let rules = RuleSet::romaji(RomanizationMethod::Hepburn);
    assert_eq!(lookup(rules, "んや"), Some("n'ya"));
    assert_eq!(lookup(rules, "んお"), Some("n'o"));
    assert_eq!(lookup(rules, "ンヨ"), Some("n'yo"));
    assert_eq!(lookup(rules, "んか"), None);
}

#[test]
fn gemination_covers_every_geminable_mora() {
    for method in RomanizationMethod::ALL {
        let rules = RuleSet::romaji(method);
        for script in [Script::Hiragana, Script::Katakana] {
            for &(kana, _) in MORAE {
                if GEMINATION_EXCLUDED.contains(&kana) {
                    continue;
                }
                let plain = script.kana(kana).to_string();
                let doubled = format!("{}{}", script.kana('っ'), plain);
                let token = lookup(rules, &plain).unwrap();
                if token.starts_with(['a', 'i', 'u', 'e', 'o']) {
                    assert_eq!(lookup(rules, &doubled), None, "{method}: {doubled}");
                    continue;
                }
                assert_eq!(
                    lookup(rules, &doubled),
                    Some(geminate(token).as_str()),
                    "{method}: {doubled}"
                );
            }
        }
    }
}

#[test]
fn gemination_skips_vowel_spellings() {
    let kunrei = RuleSet::romaji(RomanizationMethod::Kunrei);
    assert_eq!(lookup(kunrei, "を"), Some("o"));
    assert_eq!(lookup(kunrei, "っを"), None);
    assert_eq!(lookup(kunrei, "ッヲ"), None);
    assert_eq!(lookup(kunrei, "っか"), Some("kka"));

    let nihon = RuleSet::romaji(RomanizationMethod::Nihon);
    assert_eq!(lookup(nihon, "っを"), Some("wwo"));
}

#[test]
fn gemination_reaches_contractions() {
    let rules = RuleSet::romaji(RomanizationMethod::Hepburn);
    assert_eq!(lookup(rules, "っしゅ"), Some("sshu"));
    assert_eq!(lookup(rules, "ッチャ"), Some("tcha"));
    assert_eq!(lookup(rules, "っ"), Some(""));
    assert_eq!(lookup(rules, "っあ"), None);
    assert_eq!(lookup(rules, "っん"), None);
}

#[test]
fn long_vowel_only_in_katakana() {
    let rules = RuleSet::romaji(RomanizationMethod::Hepburn);
    assert_eq!(lookup(rules, "スー"), Some("suu"));
    assert_eq!(lookup(rules, "キャー"), Some("kyaa"));
    assert_eq!(lookup(rules, "すー"), None);
    assert_eq!(lookup(rules, "ンー"), None);
    assert_eq!(lookup(rules, "ッカー"), None);
    assert_eq!(lookup(rules, "ンアー"), None);
    assert_eq!(lookup(rules, "ー"), Some("-"));

    let wapuro = RuleSet::romaji(RomanizationMethod::Wapuro);
    assert_eq!(lookup(wapuro, "パー"), Some("pa-"));
    let macron = RuleSet::romaji(RomanizationMethod::HepburnMacron);
    assert_eq!(lookup(macron, "ヒー"), Some("hī"));
}

#[test]
fn punctuation() {
    let rules = RuleSet::romaji(RomanizationMethod::Kunrei);
    assert_eq!(lookup(rules, "。"), Some("."));
    assert_eq!(lookup(rules, "「"), Some("‘"));
    assert_eq!(lookup(rules, "　"), Some(" "));
    assert_eq!(lookup(rules, "・"), Some("/"));
}

#[test]
fn registry_returns_shared_instance() {
    let a = RuleSet::romaji(RomanizationMethod::Nihon);
    let b = RuleSet::romaji(RomanizationMethod::Nihon);
    assert!(std::ptr::eq(a, b));
    let c = RuleSet::romaji(RomanizationMethod::Kunrei);
    assert!(!std::ptr::eq(a, c));
}

// ---------------------------------------------------------------------------
// Romaji -> kana rules
// ---------------------------------------------------------------------------

#[test]
fn kana_rules_compile() {
    for script in [Script::Hiragana, Script::Katakana] {
        let rules = RuleSet::compile_kana(script).unwrap();
        assert!(rules.fold_case());
        assert_eq!(rules.trie(), RuleSet::kana(script).trie());
    }
}

#[test]
fn kana_base_and_placeholders() {
    let rules = RuleSet::kana(Script::Hiragana);
    assert_eq!(lookup(rules, "ka"), Some("か"));
    assert_eq!(lookup(rules, "k"), Some(""));
    assert_eq!(lookup(rules, "n"), Some("ん"));
    assert_eq!(lookup(rules, "shi"), Some("し"));
    assert_eq!(lookup(rules, "si"), Some("し"));
    assert_eq!(lookup(rules, "vu"), Some("ゔ"));

    let katakana = RuleSet::kana(Script::Katakana);
    assert_eq!(lookup(katakana, "vu"), Some("ヴ"));
    assert_eq!(lookup(katakana, "xwa"), Some("ヮ"));
}

#[test]
fn kana_contractions() {
    let rules = RuleSet::kana(Script::Hiragana);
    assert_eq!(lookup(rules, "kya"), Some("きゃ"));
    assert_eq!(lookup(rules, "sya"), Some("しゃ"));
    assert_eq!(lookup(rules, "sha"), Some("しゃ"));
    assert_eq!(lookup(rules, "che"), Some("ちぇ"));
    assert_eq!(lookup(rules, "ju"), Some("じゅ"));
    assert_eq!(lookup(rules, "dyo"), Some("ぢょ"));
    assert_eq!(lookup(rules, "fa"), Some("ふぁ"));
    assert_eq!(lookup(RuleSet::kana(Script::Katakana), "tye"), Some("チェ"));
}

#[test]
fn kana_nasal_aliases() {
    let rules = RuleSet::kana(Script::Hiragana);
    assert_eq!(lookup(rules, "n'"), Some("ん"));
    assert_eq!(lookup(rules, "xn"), Some("ん"));
    assert_eq!(lookup(rules, "xna"), None);
    assert_eq!(lookup(rules, "nn"), None);
}

#[test]
fn kana_gemination() {
    let rules = RuleSet::kana(Script::Hiragana);
    assert_eq!(lookup(rules, "kka"), Some("っか"));
    assert_eq!(lookup(rules, "kk"), Some("っ"));
    assert_eq!(lookup(rules, "sshi"), Some("っし"));
    assert_eq!(lookup(rules, "ttsu"), Some("っつ"));
    assert_eq!(lookup(rules, "ccha"), Some("っちゃ"));
    assert_eq!(lookup(rules, "tchi"), Some("っち"));
    assert_eq!(lookup(rules, "tccha"), None);
    assert_eq!(lookup(rules, "aa"), None);
    assert_eq!(lookup(RuleSet::kana(Script::Katakana), "ppu"), Some("ップ"));
}

#[test]
fn kana_long_vowels() {
    let hiragana = RuleSet::kana(Script::Hiragana);
    assert_eq!(lookup(hiragana, "kō"), Some("こう"));
    assert_eq!(lookup(hiragana, "kyō"), Some("きょう"));
    assert_eq!(lookup(hiragana, "ā"), Some("ああ"));
    assert_eq!(lookup(hiragana, "nē"), Some("ねえ"));
    assert_eq!(lookup(hiragana, "kkō"), Some("っこう"));

    let katakana = RuleSet::kana(Script::Katakana);
    assert_eq!(lookup(katakana, "kō"), Some("コー"));
    assert_eq!(lookup(katakana, "shū"), Some("シュー"));
}

#[test]
fn kana_punctuation() {
    let rules = RuleSet::kana(Script::Hiragana);
    assert_eq!(lookup(rules, "."), Some("。"));
    assert_eq!(lookup(rules, "-"), Some("ー"));
    assert_eq!(lookup(rules, "["), Some("［"));
    assert_eq!(lookup(rules, " "), None);
}

#[test]
fn rule_error_messages() {
    assert!(RuleError::MissingMora('き').to_string().contains("き"));
    let err: RuleError = TrieError::DuplicateKey {
        path: "か".into(),
        symbol: 'ー',
    }
    .into();
    assert!(err.to_string().contains("duplicate key"));
}
