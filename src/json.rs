//! JSON serialization types for loaded datasets
//!
//! Mirror types for handing a loaded split to an external trainer without
//! linking this crate.

use serde::{Deserialize, Serialize};

use crate::dataset::LoadedCorpus;
use crate::graph::SampleGraph;

/// JSON representation of a graph sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleGraphJson {
    pub num_nodes: usize,
    pub node_tags: Vec<u32>,
    pub label: i64,
    /// Flattened `(u, v)` pairs, `2 * num_edges` entries.
    pub edge_pairs: Vec<u32>,
}

impl SampleGraphJson {
    pub fn from_graph(graph: &SampleGraph) -> Self {
        SampleGraphJson {
            num_nodes: graph.num_nodes,
            node_tags: graph.node_tags.clone(),
            label: graph.label,
            edge_pairs: graph.edge_pairs.clone(),
        }
    }
}

/// JSON representation of a full loaded dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetJson {
    pub num_classes: usize,
    pub num_features: usize,
    pub train: Vec<SampleGraphJson>,
    pub test: Vec<SampleGraphJson>,
}

impl DatasetJson {
    pub fn from_corpus(corpus: &LoadedCorpus) -> Self {
        DatasetJson {
            num_classes: corpus.num_classes,
            num_features: corpus.num_features,
            train: corpus.train.iter().map(SampleGraphJson::from_graph).collect(),
            test: corpus.test.iter().map(SampleGraphJson::from_graph).collect(),
        }
    }
}

/// Serialize a loaded dataset to a JSON string.
pub fn dataset_to_json(corpus: &LoadedCorpus) -> serde_json::Result<String> {
    serde_json::to_string(&DatasetJson::from_corpus(corpus))
}
