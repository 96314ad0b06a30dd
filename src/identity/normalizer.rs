use anyhow::{Context, Result};
use regex::Regex;

use crate::config::AliasTable;

/// Turns a bracket display name into the key players are tracked under.
///
/// Order matters: clean, then correct, then capitalise the first letter.
/// The alias table is consulted once, against the cleaned lower-case form.
pub struct NameNormalizer {
    aliases: AliasTable,
    class_suffix: Regex,
    number_suffix: Regex,
}

impl NameNormalizer {
    pub fn new(aliases: AliasTable) -> Result<Self> {
        Ok(Self {
            aliases,
            class_suffix: Self::compile_regex(r"\s*\(.*")?,
            number_suffix: Self::compile_regex(r"#.*")?,
        })
    }

    pub fn normalize(&self, raw_name: &str) -> String {
        let cleaned = self.clean_up(raw_name);
        let corrected = self.aliases.correct(&cleaned);
        capitalize_first(corrected)
    }

    fn clean_up(&self, raw_name: &str) -> String {
        let lower = raw_name.to_lowercase();
        let without_class = self.class_suffix.replace_all(&lower, "");
        self.number_suffix
            .replace_all(&without_class, "")
            .into_owned()
    }

    fn compile_regex(pattern: &str) -> Result<Regex> {
        Regex::new(pattern).with_context(|| format!("Failed to compile name pattern {}", pattern))
    }
}

/// Upper-case the first character only; the rest is left untouched.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
