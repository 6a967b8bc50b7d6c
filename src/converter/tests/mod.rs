use super::*;

mod custom;

fn romaji(input: &str, method: RomanizationMethod) -> String {
    to_romaji(
        input,
        &RomajiOptions {
            method,
            ..Default::default()
        },
    )
}

fn romaji_upcase(input: &str, method: RomanizationMethod) -> String {
    to_romaji(
        input,
        &RomajiOptions {
            method,
            upcase_katakana: true,
            custom_mapping: None,
        },
    )
}

fn kana(input: &str) -> String {
    to_kana(input, &KanaOptions::default())
}
