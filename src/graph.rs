//! Per-sample graph construction
//!
//! Builds the graph entity handed to model code: dense node tags and a
//! deduplicated undirected edge list, plus the reconciliation checks that
//! catch corrupt records.
//!
//! In a well-formed corpus every undirected edge is declared once from
//! each endpoint, so the second mention of an edge counts as a duplicate.
//! The declared per-node edge counts must equal distinct edges plus
//! duplicate mentions, which is what the edge reconciliation check
//! verifies. A neighbor index outside the declared node range shows up as
//! a node-count mismatch instead.

use indexmap::IndexSet;

use crate::error::LoadError;
use crate::parser::RawGraphRecord;
use crate::vocab::CorpusVocab;

/// One labeled graph sample, as handed to the training collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleGraph {
    /// Number of nodes in the sample.
    pub num_nodes: usize,
    /// Dense feature index per node, in node order.
    pub node_tags: Vec<u32>,
    /// Class label. Holds the raw corpus value during the parse pass and
    /// is replaced by the dense class index before the graph leaves the
    /// loader; callers only ever see the dense index.
    pub label: i64,
    /// Number of distinct undirected edges.
    pub num_edges: usize,
    /// Flattened `(u, v)` pairs, `2 * num_edges` entries. Edges appear in
    /// the order first declared, oriented as first declared, so the list
    /// is identical across runs for the same input.
    pub edge_pairs: Vec<u32>,
}

/// Builds a [`SampleGraph`] from a raw record, interning node features
/// through the shared vocabulary.
pub struct GraphBuilder {
    /// Normalized `(min, max)` endpoint pairs, for duplicate detection.
    seen: IndexSet<(u32, u32)>,
    /// Edges in first-declared order and orientation.
    pairs: Vec<(u32, u32)>,
    /// Neighbor mentions that referred to an already-present edge.
    duplicates: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        GraphBuilder {
            seen: IndexSet::new(),
            pairs: Vec::new(),
            duplicates: 0,
        }
    }

    /// Construct and validate the graph for `record`.
    ///
    /// `sample` is the 0-based position of the record in the corpus, used
    /// only for error reporting.
    pub fn build(
        record: &RawGraphRecord,
        sample: usize,
        vocab: &mut CorpusVocab,
    ) -> Result<SampleGraph, LoadError> {
        let mut builder = GraphBuilder::new();
        let mut node_tags = Vec::with_capacity(record.node_count);
        let mut declared_total = 0usize;
        // Neighbors outside the declared node range would silently grow
        // the node set; collected here and reported as a node mismatch.
        let mut extra_nodes: IndexSet<usize> = IndexSet::new();

        for (i, node) in record.nodes.iter().enumerate() {
            node_tags.push(vocab.intern_feature(node.feature));
            declared_total += node.declared_edges;
            for &j in &node.neighbors {
                if j >= record.node_count {
                    extra_nodes.insert(j);
                }
                builder.add_edge(i as u32, j as u32);
            }
        }

        if !extra_nodes.is_empty() {
            return Err(LoadError::Integrity {
                sample,
                quantity: "nodes",
                declared: record.node_count,
                found: record.node_count + extra_nodes.len(),
            });
        }
        if builder.pairs.len() + builder.duplicates != declared_total {
            return Err(LoadError::Integrity {
                sample,
                quantity: "edges",
                declared: declared_total,
                found: builder.pairs.len() + builder.duplicates,
            });
        }

        let num_edges = builder.pairs.len();
        let mut edge_pairs = Vec::with_capacity(2 * num_edges);
        for &(u, v) in &builder.pairs {
            edge_pairs.push(u);
            edge_pairs.push(v);
        }

        Ok(SampleGraph {
            num_nodes: record.node_count,
            node_tags,
            label: record.label,
            num_edges,
            edge_pairs,
        })
    }

    /// Record the edge `{u, v}` if not already present, otherwise count a
    /// duplicate mention.
    fn add_edge(&mut self, u: u32, v: u32) {
        let key = if u <= v { (u, v) } else { (v, u) };
        if self.seen.insert(key) {
            self.pairs.push((u, v));
        } else {
            self.duplicates += 1;
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
