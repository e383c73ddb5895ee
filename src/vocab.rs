//! Dense vocabularies for raw label and feature ids
//!
//! Raw identifiers in the corpus are arbitrary integers. Downstream model
//! code wants contiguous zero-based indices, so each distinct raw value is
//! assigned the next free index the first time it is seen. Assignment
//! follows corpus order, which makes the mapping reproducible across runs
//! on the same file.

use indexmap::IndexMap;

/// Insertion-ordered mapping from raw corpus ids to dense indices.
///
/// Append-only: indices are never reassigned and the map never shrinks.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    ids: IndexMap<i64, u32>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Vocabulary {
            ids: IndexMap::new(),
        }
    }

    /// Intern a raw id, returning its dense index (get-or-create).
    pub fn intern(&mut self, raw: i64) -> u32 {
        if let Some(&idx) = self.ids.get(&raw) {
            return idx;
        }
        let idx = self.ids.len() as u32;
        self.ids.insert(raw, idx);
        idx
    }

    /// Dense index of an already-interned raw id.
    pub fn get(&self, raw: i64) -> Option<u32> {
        self.ids.get(&raw).copied()
    }

    /// Number of distinct raw ids seen so far.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// The label and feature vocabularies shared across one parse pass.
///
/// A single instance is owned by the load; per-graph vocabularies would
/// break the dense-index contract.
#[derive(Debug, Clone, Default)]
pub struct CorpusVocab {
    labels: Vocabulary,
    features: Vocabulary,
}

impl CorpusVocab {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a raw graph label, returning its dense class index.
    pub fn intern_label(&mut self, raw: i64) -> u32 {
        self.labels.intern(raw)
    }

    /// Intern a raw node feature tag, returning its dense feature index.
    pub fn intern_feature(&mut self, raw: i64) -> u32 {
        self.features.intern(raw)
    }

    /// Size of the label vocabulary.
    pub fn num_classes(&self) -> usize {
        self.labels.len()
    }

    /// Size of the feature vocabulary.
    pub fn num_features(&self) -> usize {
        self.features.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order() {
        let mut vocab = Vocabulary::new();
        assert_eq!(vocab.intern(9), 0);
        assert_eq!(vocab.intern(7), 1);
        assert_eq!(vocab.intern(-3), 2);
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn test_intern_is_idempotent() {
        let mut vocab = Vocabulary::new();
        let first = vocab.intern(42);
        let second = vocab.intern(42);
        assert_eq!(first, second);
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.get(42), Some(first));
        assert_eq!(vocab.get(43), None);
    }

    #[test]
    fn test_labels_and_features_are_separate() {
        let mut vocab = CorpusVocab::new();
        assert_eq!(vocab.intern_label(5), 0);
        assert_eq!(vocab.intern_feature(5), 0);
        assert_eq!(vocab.intern_feature(6), 1);
        assert_eq!(vocab.num_classes(), 1);
        assert_eq!(vocab.num_features(), 2);
    }
}
