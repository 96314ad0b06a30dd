use std::collections::HashMap;

/// A known alternative spelling of a player's handle.
///
/// Both sides are already cleaned (lower-case, no class or `#` suffix),
/// because the lookup happens before capitalisation.
#[derive(Debug, Clone)]
pub struct AliasEntry {
    pub alias: &'static str,
    pub canonical: &'static str,
}

impl AliasEntry {
    pub fn new(alias: &'static str, canonical: &'static str) -> Self {
        Self { alias, canonical }
    }
}

/// Get the handles that players have registered under more than one name
pub fn get_aliases() -> Vec<AliasEntry> {
    vec![
        AliasEntry::new("bloodninja", "blo0dninja2"),
        AliasEntry::new("justinlaw", "justinatlaw"),
        AliasEntry::new("swerve", "djswerve"),
        AliasEntry::new("ravels", "gravels"),
        AliasEntry::new("ltigre", "elteegrey"),
        AliasEntry::new("azunin", "azurin"),
        AliasEntry::new("ftw", "exul"),
        AliasEntry::new("alvn", "alvin"),
    ]
}

/// Exact-match correction table handed to the name normalizer.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    corrections: HashMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: &[AliasEntry]) -> Self {
        entries
            .iter()
            .map(|e| (e.alias.to_string(), e.canonical.to_string()))
            .collect()
    }

    pub fn insert(&mut self, alias: impl Into<String>, canonical: impl Into<String>) {
        self.corrections.insert(alias.into(), canonical.into());
    }

    pub fn correct<'a>(&'a self, cleaned: &'a str) -> &'a str {
        self.corrections
            .get(cleaned)
            .map(String::as_str)
            .unwrap_or(cleaned)
    }

    pub fn len(&self) -> usize {
        self.corrections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corrections.is_empty()
    }
}

impl FromIterator<(String, String)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            corrections: iter.into_iter().collect(),
        }
    }
}
