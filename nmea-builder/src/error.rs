use core::fmt;

use crate::message::{Field, SentenceType};
use crate::MAX_SENTENCE_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuildError {
    /// A required field was unset. `field` is the first one missing in the sentence's check order.
    MissingField { sentence: SentenceType, field: Field },
    /// Out-of-range values produced more than `MAX_SENTENCE_LEN` bytes.
    Overflow { sentence: SentenceType },
}

impl BuildError {
    pub fn sentence(&self) -> SentenceType {
        match self {
            BuildError::MissingField { sentence, .. } => *sentence,
            BuildError::Overflow { sentence } => *sentence,
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BuildError::MissingField { sentence, field } => {
                write!(f, "{}: {} has not been set", sentence, field)
            }
            BuildError::Overflow { sentence } => {
                write!(f, "{}: sentence exceeds {} bytes", sentence, MAX_SENTENCE_LEN)
            }
        }
    }
}

impl core::error::Error for BuildError {}
