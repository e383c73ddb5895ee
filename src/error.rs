//! Error types for corpus loading
//!
//! Every failure is fatal for the whole load: the pipeline either returns a
//! complete train/test split or one of these errors. There is no partial
//! result and no skip-and-continue mode.

use std::fmt;

/// Errors raised while loading a graph corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The corpus file is missing, truncated, or a line does not parse as
    /// the expected integer sequence. `line` is 1-based; 0 means the file
    /// could not be read at all.
    Format { line: usize, message: String },
    /// A sample's edge or node counts do not reconcile with the counts
    /// declared in its record. `sample` is the 0-based position of the
    /// record in the corpus.
    Integrity {
        sample: usize,
        quantity: &'static str,
        declared: usize,
        found: usize,
    },
    /// Class balancing requires exactly two label classes.
    Configuration { num_classes: usize },
    /// One of the class buckets is empty after balancing.
    EmptyDataset { label: u32 },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Format { line: 0, message } => {
                write!(f, "format error: {}", message)
            }
            LoadError::Format { line, message } => {
                write!(f, "format error at line {}: {}", line, message)
            }
            LoadError::Integrity {
                sample,
                quantity,
                declared,
                found,
            } => write!(
                f,
                "integrity error in sample {}: declared {} {}, found {}",
                sample, declared, quantity, found
            ),
            LoadError::Configuration { num_classes } => write!(
                f,
                "class balancing requires exactly two label classes, corpus has {}",
                num_classes
            ),
            LoadError::EmptyDataset { label } => {
                write!(f, "no samples with class label {}", label)
            }
        }
    }
}

impl std::error::Error for LoadError {}
