//! End-to-end tests for the corpus loading pipeline

use graphcorpus::{
    load_corpus, load_corpus_file, parse_corpus, CorpusVocab, GraphBuilder, LoadError,
    SplitConfig,
};

/// Two classes (raw labels 1 and -1), three triangle samples of class 1
/// and two path samples of class -1. Node features draw from {3, 4, 8}.
const CORPUS: &str = "\
5
3 1
3 2 1 2
3 2 0 2
4 2 0 1
3 -1
8 1 1
8 2 0 2
8 1 1
3 1
3 2 1 2
3 2 0 2
3 2 0 1
2 -1
4 1 1
4 1 0
3 1
8 2 1 2
3 2 0 2
4 2 0 1
";

fn no_shuffle() -> SplitConfig {
    SplitConfig {
        shuffle: false,
        ..SplitConfig::default()
    }
}

#[test]
fn test_loads_balanced_split() {
    let loaded = load_corpus(CORPUS, &no_shuffle()).unwrap();

    // 3 samples of class 0, 2 of class 1: balanced total is 2 * 2.
    assert_eq!(loaded.train.len() + loaded.test.len(), 4);
    assert_eq!(loaded.num_classes, 2);
    assert_eq!(loaded.num_features, 3);

    // round(4 * 0.2) = 1 held out.
    assert_eq!(loaded.test.len(), 1);

    // Every emitted graph carries a dense label.
    for graph in loaded.train.iter().chain(&loaded.test) {
        assert!(graph.label == 0 || graph.label == 1);
        assert_eq!(graph.edge_pairs.len(), 2 * graph.num_edges);
        assert_eq!(graph.node_tags.len(), graph.num_nodes);
    }
}

#[test]
fn test_vocabularies_are_deterministic() {
    let first = load_corpus(CORPUS, &no_shuffle()).unwrap();
    let second = load_corpus(CORPUS, &no_shuffle()).unwrap();

    assert_eq!(first.num_classes, second.num_classes);
    assert_eq!(first.num_features, second.num_features);

    let tags = |loaded: &graphcorpus::LoadedCorpus| -> Vec<Vec<u32>> {
        loaded
            .train
            .iter()
            .chain(&loaded.test)
            .map(|g| g.node_tags.clone())
            .collect()
    };
    assert_eq!(tags(&first), tags(&second));

    let edges = |loaded: &graphcorpus::LoadedCorpus| -> Vec<Vec<u32>> {
        loaded
            .train
            .iter()
            .chain(&loaded.test)
            .map(|g| g.edge_pairs.clone())
            .collect()
    };
    assert_eq!(edges(&first), edges(&second));
}

#[test]
fn test_seeded_loads_are_identical() {
    let config = SplitConfig {
        seed: Some(13),
        ..SplitConfig::default()
    };
    let first = load_corpus(CORPUS, &config).unwrap();
    let second = load_corpus(CORPUS, &config).unwrap();

    let labels = |loaded: &graphcorpus::LoadedCorpus| -> Vec<i64> {
        loaded.train.iter().chain(&loaded.test).map(|g| g.label).collect()
    };
    assert_eq!(labels(&first), labels(&second));
    assert_eq!(first.train.len(), second.train.len());
}

#[test]
fn test_split_covers_balanced_set_for_any_seed() {
    for seed in [0u64, 1, 99, 4096] {
        let config = SplitConfig {
            seed: Some(seed),
            ..SplitConfig::default()
        };
        let loaded = load_corpus(CORPUS, &config).unwrap();
        assert_eq!(loaded.train.len() + loaded.test.len(), 4);

        // Exactly two samples per class across the union of the split.
        let class0 = loaded
            .train
            .iter()
            .chain(&loaded.test)
            .filter(|g| g.label == 0)
            .count();
        assert_eq!(class0, 2);
    }
}

#[test]
fn test_first_seen_interning_matches_corpus_order() {
    let records = parse_corpus(CORPUS).unwrap();
    let mut vocab = CorpusVocab::new();
    let graphs: Vec<_> = records
        .iter()
        .enumerate()
        .map(|(i, r)| GraphBuilder::build(r, i, &mut vocab).unwrap())
        .collect();

    // Feature 3 appears first, then 4, then 8.
    assert_eq!(graphs[0].node_tags, vec![0, 0, 1]);
    assert_eq!(graphs[1].node_tags, vec![2, 2, 2]);

    // Raw label 1 is seen first, so it interns to class 0.
    assert_eq!(vocab.intern_label(1), 0);
    assert_eq!(vocab.intern_label(-1), 1);
}

#[test]
fn test_load_from_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CORPUS.as_bytes()).unwrap();

    let loaded = load_corpus_file(file.path(), &no_shuffle()).unwrap();
    assert_eq!(loaded.train.len() + loaded.test.len(), 4);
}

#[test]
fn test_missing_file_is_format_error() {
    let err = load_corpus_file("/no/such/corpus.txt", &SplitConfig::default()).unwrap_err();
    assert!(matches!(err, LoadError::Format { line: 0, .. }));
}

#[test]
fn test_truncated_corpus_aborts_load() {
    // Header promises 5 graphs, body ends after the first.
    let truncated = "5\n3 1\n3 2 1 2\n3 2 0 2\n4 2 0 1\n";
    let err = load_corpus(truncated, &SplitConfig::default()).unwrap_err();
    assert!(matches!(err, LoadError::Format { .. }));
}
