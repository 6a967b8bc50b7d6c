use std::collections::BTreeMap;

use serde::Deserialize;

use crate::trie::Trie;

#[derive(Deserialize)]
struct MappingConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("empty key in custom mapping")]
    EmptyKey,
}

/// Build an overlay trie from `(path, token)` pairs. Later pairs overwrite
/// earlier ones with the same path.
pub fn mapping_from_pairs<I, K, V>(pairs: I) -> Result<Trie, MappingError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut trie = Trie::new();
    for (path, token) in pairs {
        let path = path.as_ref();
        if path.is_empty() {
            return Err(MappingError::EmptyKey);
        }
        trie.insert(path.chars(), token.into());
    }
    Ok(trie)
}

/// Parse a TOML `[mappings]` table into an overlay trie.
///
/// ```toml
/// [mappings]
/// "いぬ" = "dog"
/// ```
pub fn parse_mapping_toml(toml_str: &str) -> Result<Trie, MappingError> {
    let config: MappingConfig =
        toml::from_str(toml_str).map_err(|e| MappingError::Parse(e.to_string()))?;
    if config.mappings.is_empty() {
        return Err(MappingError::Empty);
    }
    mapping_from_pairs(config.mappings)
}
