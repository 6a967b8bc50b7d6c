use super::*;

use crate::trie::Trie;

fn inu_overlay() -> Trie {
    mapping_from_pairs([("い", "i"), ("いぬ", "dog")]).unwrap()
}

#[test]
fn test_custom_romaji_mapping() {
    let overlay = inu_overlay();
    let options = RomajiOptions {
        custom_mapping: Some(&overlay),
        ..Default::default()
    };
    assert_eq!(to_romaji("いぬ", &options), "dog");
    assert_eq!(to_romaji("いぬがいる", &options), "doggairu");
    assert_eq!(romaji("いぬ", RomanizationMethod::Hepburn), "inu");
}

#[test]
fn test_custom_mapping_leaves_rules_untouched() {
    let overlay = inu_overlay();
    let options = RomajiOptions {
        custom_mapping: Some(&overlay),
        ..Default::default()
    };
    let _ = to_romaji("いぬ", &options);
    let rules = RuleSet::romaji(RomanizationMethod::Hepburn);
    assert!(rules.trie().get("いぬ").is_none());
    assert_eq!(overlay.get("ぬ"), None);
}

#[test]
fn test_custom_mapping_with_upcase() {
    let overlay = mapping_from_pairs([("イヌ", "dog")]).unwrap();
    let options = RomajiOptions {
        method: RomanizationMethod::Kunrei,
        upcase_katakana: true,
        custom_mapping: Some(&overlay),
    };
    assert_eq!(to_romaji("イヌとシ", &options), "DOGtoSI");
}

#[test]
fn test_custom_mapping_from_toml() {
    let overlay = parse_mapping_toml(
        r#"
[mappings]
"東京" = "Tokyo"
"#,
    )
    .unwrap();
    let options = RomajiOptions {
        custom_mapping: Some(&overlay),
        ..Default::default()
    };
    assert_eq!(to_romaji("東京にいく", &options), "Tokyoniiku");
}

#[test]
fn test_custom_kana_mapping() {
    let overlay = mapping_from_pairs([("wanikani", "鰐蟹")]).unwrap();
    let options = KanaOptions {
        custom_mapping: Some(&overlay),
    };
    assert_eq!(to_kana("wanikani", &options), "鰐蟹");
    assert_eq!(to_kana("WANIKANI", &options), "鰐蟹");
    assert_eq!(kana("wanikani"), "わにかに");
}

#[test]
fn test_custom_kana_mapping_any_case() {
    let overlay = mapping_from_pairs([("Tokyo", "東京")]).unwrap();
    let options = KanaOptions {
        custom_mapping: Some(&overlay),
    };
    assert_eq!(to_kana("Tokyo", &options), "東京");
    assert_eq!(to_kana("tokyo ni", &options), "東京 に");
    assert_eq!(to_kana("TOKYO", &options), "東京");
    assert_eq!(overlay.get("Tokyo").map(String::as_str), Some("東京"));
    assert_eq!(overlay.get("tokyo"), None);
}

#[test]
fn test_custom_kana_mapping_mixed_case_input() {
    let overlay = mapping_from_pairs([("wani", "ワニ")]).unwrap();
    let options = KanaOptions {
        custom_mapping: Some(&overlay),
    };
    assert_eq!(to_kana("kana", &options), "かな");
    assert_eq!(to_kana("wani KANA", &options), "ワニ カナ");
    assert_eq!(to_kana("KANA WANI", &options), "カナ ワニ");
}
