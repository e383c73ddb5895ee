//! graphcorpus: loader for labeled-graph text corpora
//!
//! Parses a whitespace-delimited corpus of labeled graphs, interns node
//! feature tags and class labels into dense vocabularies, balances the
//! two classes by undersampling the majority, interleaves them, and
//! produces a shuffled train/test split for an external model trainer.
//!
//! The whole pipeline is synchronous and single-pass:
//!
//! ```text
//! parse_corpus -> GraphBuilder (+ CorpusVocab) -> balance_classes
//!     -> interleave -> split_indices -> LoadedCorpus
//! ```
//!
//! [`load_corpus`] / [`load_corpus_file`] run it end to end.

pub mod config;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod json;
pub mod parser;
pub mod vocab;

pub use config::SplitConfig;
pub use dataset::{
    balance_classes, interleave, load_corpus, load_corpus_file, split_indices, LoadedCorpus,
};
pub use error::LoadError;
pub use graph::{GraphBuilder, SampleGraph};
pub use json::{dataset_to_json, DatasetJson, SampleGraphJson};
pub use parser::{parse_corpus, parse_corpus_file, RawGraphRecord, RawNodeEntry};
pub use vocab::{CorpusVocab, Vocabulary};
