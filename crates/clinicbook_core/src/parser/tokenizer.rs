//! Prefix-based argument tokenizer.
//!
//! # Invariants
//! - A prefix is recognised only when preceded by whitespace (or at the very
//!   start of the arguments).
//! - Values keep their order of appearance per prefix and are trimmed.
//! - Text before the first recognised prefix is the preamble.

use crate::parser::syntax::Prefix;
use crate::parser::ParseError;
use std::collections::HashMap;

/// Tokenized arguments: preamble plus all values per prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`, if any.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in order of appearance.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(&prefix)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    pub fn are_all_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|prefix| self.is_present(*prefix))
    }

    /// Fails if any of `prefixes` was given more than once.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<Prefix> = prefixes
            .iter()
            .copied()
            .filter(|prefix| self.all_values(*prefix).len() > 1)
            .collect();
        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated))
        }
    }
}

/// Splits `args` on the given prefixes.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let padded = format!(" {args}");
    let mut markers: Vec<(usize, Prefix)> = Vec::new();
    for prefix in prefixes {
        let needle = format!(" {prefix}");
        for (at, _) in padded.match_indices(needle.as_str()) {
            markers.push((at + 1, *prefix));
        }
    }
    markers.sort_by_key(|(position, _)| *position);

    let preamble_end = markers.first().map_or(padded.len(), |(position, _)| *position);
    let mut multimap = ArgumentMultimap {
        preamble: padded[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (slot, (position, prefix)) in markers.iter().enumerate() {
        let start = position + prefix.as_str().len();
        let end = markers
            .get(slot + 1)
            .map_or(padded.len(), |(next, _)| *next);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(padded[start..end].trim().to_string());
    }

    multimap
}
