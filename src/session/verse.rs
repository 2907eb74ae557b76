use serde::{Deserialize, Serialize};

/// A passage to memorize: a citation label plus the text itself.
/// Immutable once constructed; the session clones what it needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub reference: String,
    pub text: String,
}

impl Verse {
    pub fn new(reference: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            text: text.into(),
        }
    }

    /// Tokenize the text into words. Runs of whitespace collapse, so empty
    /// or all-whitespace text yields no words rather than empty-string words.
    pub fn words(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
