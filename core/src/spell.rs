use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The special action a recognized spell switches the game into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpellTarget {
    /// Blacken any one cell (`LOK`).
    PickOneBlock,
    /// Blacken one cell, then an adjacent second one (`TLAK`).
    PickTwoBlocks,
    /// Blacken every cell sharing the picked cell's letter (`TA`).
    BlackenAllSameLetter,
    /// Mark one empty slot for text entry (`BE`).
    MarkOneEmptyBlock,
}

/// Error type for spell dictionary validation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SpellBookError {
    #[error("duplicate spell code: {0}")]
    DuplicateCode(String),
    #[error("spell code {0} is a prefix of {1} and would always shadow it")]
    PrefixConflict(String, String),
    #[error("spell codes cannot be empty")]
    EmptyCode,
}

/// A finite mapping from spell codes to their target actions.
///
/// The buffer is matched after every picked letter, so a code that is a
/// strict prefix of another would always fire first and make the longer one
/// unreachable. Such sets are rejected at construction instead of silently
/// resolving one way or the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellBook {
    entries: Vec<(String, SpellTarget)>,
}

impl SpellBook {
    /// The spell set of the printed puzzle book.
    pub fn standard() -> Self {
        Self::new(vec![
            ("LOK".to_string(), SpellTarget::PickOneBlock),
            ("TLAK".to_string(), SpellTarget::PickTwoBlocks),
            ("TA".to_string(), SpellTarget::BlackenAllSameLetter),
            ("BE".to_string(), SpellTarget::MarkOneEmptyBlock),
        ])
        .expect("standard spell set is valid")
    }

    pub fn new(entries: Vec<(String, SpellTarget)>) -> Result<Self, SpellBookError> {
        for (i, (code, _)) in entries.iter().enumerate() {
            if code.is_empty() {
                return Err(SpellBookError::EmptyCode);
            }
            for (other, _) in &entries[i + 1..] {
                if code == other {
                    return Err(SpellBookError::DuplicateCode(code.clone()));
                }
                if other.starts_with(code.as_str()) {
                    return Err(SpellBookError::PrefixConflict(code.clone(), other.clone()));
                }
                if code.starts_with(other.as_str()) {
                    return Err(SpellBookError::PrefixConflict(other.clone(), code.clone()));
                }
            }
        }
        Ok(Self { entries })
    }

    /// Exact-match lookup of an accumulated buffer.
    pub fn lookup(&self, buffer: &str) -> Option<SpellTarget> {
        self.entries
            .iter()
            .find(|(code, _)| code == buffer)
            .map(|(_, target)| *target)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_set_lookup() {
        let book = SpellBook::standard();
        assert_eq!(book.lookup("LOK"), Some(SpellTarget::PickOneBlock));
        assert_eq!(book.lookup("TLAK"), Some(SpellTarget::PickTwoBlocks));
        assert_eq!(book.lookup("TA"), Some(SpellTarget::BlackenAllSameLetter));
        assert_eq!(book.lookup("BE"), Some(SpellTarget::MarkOneEmptyBlock));
        assert_eq!(book.lookup("LO"), None);
        assert_eq!(book.lookup(""), None);
    }

    #[test]
    fn rejects_duplicates() {
        let result = SpellBook::new(vec![
            ("LOK".to_string(), SpellTarget::PickOneBlock),
            ("LOK".to_string(), SpellTarget::PickTwoBlocks),
        ]);
        assert_eq!(result, Err(SpellBookError::DuplicateCode("LOK".to_string())));
    }

    #[test]
    fn rejects_prefix_conflicts() {
        let result = SpellBook::new(vec![
            ("LOKA".to_string(), SpellTarget::PickTwoBlocks),
            ("LOK".to_string(), SpellTarget::PickOneBlock),
        ]);
        assert_eq!(
            result,
            Err(SpellBookError::PrefixConflict(
                "LOK".to_string(),
                "LOKA".to_string()
            ))
        );
    }

    #[test]
    fn rejects_empty_code() {
        let result = SpellBook::new(vec![(String::new(), SpellTarget::PickOneBlock)]);
        assert_eq!(result, Err(SpellBookError::EmptyCode));
    }
}
