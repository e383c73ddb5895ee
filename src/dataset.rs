//! Class balancing, interleaving, and the train/test split
//!
//! The corpus is a two-class dataset. After parsing, samples are
//! partitioned by dense class label, the majority class is undersampled
//! to the minority size, the two buckets are interleaved so consecutive
//! positions alternate class membership, and the interleaved order is
//! shuffled and cut into train and test sets.
//!
//! Undersampling keeps the first `min` samples of the majority class in
//! corpus order rather than sampling at random; the discarded tail is
//! never seen by training. Interleaving fixes class alternation before
//! the shuffle; class balance of the resulting train/test sets is a
//! statistical consequence, not a guarantee.

use std::path::Path;

use rand::prelude::*;
use tracing::info;

use crate::config::SplitConfig;
use crate::error::LoadError;
use crate::graph::{GraphBuilder, SampleGraph};
use crate::parser::{parse_corpus, parse_corpus_file, RawGraphRecord};
use crate::vocab::CorpusVocab;

/// Result of a full corpus load: the split plus the derived vocabulary
/// sizes the caller needs to configure model input/output dimensions.
#[derive(Debug, Clone)]
pub struct LoadedCorpus {
    pub train: Vec<SampleGraph>,
    pub test: Vec<SampleGraph>,
    /// Size of the label vocabulary.
    pub num_classes: usize,
    /// Size of the feature vocabulary.
    pub num_features: usize,
}

/// Load, balance, and split a corpus file.
pub fn load_corpus_file(
    path: impl AsRef<Path>,
    config: &SplitConfig,
) -> Result<LoadedCorpus, LoadError> {
    let records = parse_corpus_file(path)?;
    load_records(records, config)
}

/// Load, balance, and split corpus text already held in memory.
pub fn load_corpus(input: &str, config: &SplitConfig) -> Result<LoadedCorpus, LoadError> {
    let records = parse_corpus(input)?;
    load_records(records, config)
}

fn load_records(
    records: Vec<RawGraphRecord>,
    config: &SplitConfig,
) -> Result<LoadedCorpus, LoadError> {
    let mut vocab = CorpusVocab::new();
    let mut graphs = Vec::with_capacity(records.len());
    for (sample, record) in records.iter().enumerate() {
        graphs.push(GraphBuilder::build(record, sample, &mut vocab)?);
    }

    // Second pass: replace raw labels with dense class indices. The label
    // vocabulary is frozen after this pass, so the counts below are final.
    for graph in &mut graphs {
        graph.label = i64::from(vocab.intern_label(graph.label));
    }
    let num_classes = vocab.num_classes();
    let num_features = vocab.num_features();
    info!(graphs = graphs.len(), num_classes, num_features, "corpus parsed");

    let (bucket_a, bucket_b) = balance_classes(&graphs, num_classes)?;
    let order = interleave(&bucket_a, &bucket_b);
    let (train_idx, test_idx) = split_indices(order, config);

    let train: Vec<SampleGraph> = train_idx.iter().map(|&i| graphs[i].clone()).collect();
    let test: Vec<SampleGraph> = test_idx.iter().map(|&i| graphs[i].clone()).collect();

    let test_class0 = test.iter().filter(|g| g.label == 0).count();
    info!(
        train = train.len(),
        test = test.len(),
        test_class0,
        test_class1 = test.len() - test_class0,
        "dataset split"
    );

    Ok(LoadedCorpus {
        train,
        test,
        num_classes,
        num_features,
    })
}

/// Partition sample indices by dense class label and truncate the
/// majority class to the minority size.
///
/// Returns `(bucket_a, bucket_b)` holding the indices of class-0 and
/// class-1 samples in corpus order, both of length
/// `min(count_class0, count_class1)`.
pub fn balance_classes(
    graphs: &[SampleGraph],
    num_classes: usize,
) -> Result<(Vec<usize>, Vec<usize>), LoadError> {
    if num_classes > 2 {
        return Err(LoadError::Configuration { num_classes });
    }

    let mut bucket_a = Vec::new();
    let mut bucket_b = Vec::new();
    for (idx, graph) in graphs.iter().enumerate() {
        if graph.label == 0 {
            bucket_a.push(idx);
        } else {
            bucket_b.push(idx);
        }
    }

    let min = bucket_a.len().min(bucket_b.len());
    if min == 0 {
        let label = if bucket_a.is_empty() { 0 } else { 1 };
        return Err(LoadError::EmptyDataset { label });
    }
    bucket_a.truncate(min);
    bucket_b.truncate(min);
    Ok((bucket_a, bucket_b))
}

/// Alternate the two balanced buckets: `[a0, b0, a1, b1, ...]`.
pub fn interleave(bucket_a: &[usize], bucket_b: &[usize]) -> Vec<usize> {
    debug_assert_eq!(bucket_a.len(), bucket_b.len());
    let mut order = Vec::with_capacity(bucket_a.len() + bucket_b.len());
    for (&a, &b) in bucket_a.iter().zip(bucket_b) {
        order.push(a);
        order.push(b);
    }
    order
}

/// Shuffle the interleaved order (when enabled) and cut it into train and
/// test index sets. The test set takes `round(n * test_fraction)` samples
/// from the tail of the (possibly shuffled) order.
pub fn split_indices(mut order: Vec<usize>, config: &SplitConfig) -> (Vec<usize>, Vec<usize>) {
    if config.shuffle {
        let mut rng: StdRng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        order.shuffle(&mut rng);
    }
    let test_len = (order.len() as f64 * config.test_fraction).round() as usize;
    let train_len = order.len() - test_len;
    let test = order.split_off(train_len);
    (order, test)
}
