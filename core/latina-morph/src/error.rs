use alloc::string::{String, ToString};
use core::fmt;

/// A pattern produced no form (or no root) for one exact category.
///
/// Sparse ending tables are normal, so this is a local, recoverable
/// condition: bulk recomputation turns it into an absent slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormingError {
    NoEnding {
        pattern: &'static str,
        category: String,
    },
    EndingMismatch {
        pattern: &'static str,
        category: String,
        form: String,
        ending: String,
    },
    EmptyRoot {
        pattern: &'static str,
        category: String,
        form: String,
    },
}

impl FormingError {
    pub fn no_ending(pattern: &'static str, category: impl fmt::Display) -> Self {
        FormingError::NoEnding { pattern, category: category.to_string() }
    }
}

impl fmt::Display for FormingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormingError::NoEnding { pattern, category } => {
                write!(f, "pattern '{}' defines no ending for {}", pattern, category)
            }
            FormingError::EndingMismatch { pattern, category, form, ending } => write!(
                f,
                "'{}' does not end in '{}', the {} ending of pattern '{}'",
                form, ending, category, pattern
            ),
            FormingError::EmptyRoot { pattern, category, form } => write!(
                f,
                "removing the {} ending of pattern '{}' from '{}' leaves no root",
                category, pattern, form
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormingError {}
