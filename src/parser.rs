//! Corpus text format parser
//!
//! The corpus is plain text, whitespace-delimited integers:
//!
//! ```text
//! <graph_count>
//! <node_count> <label>
//! <feature> <edge_count> <neighbor>...   (one line per node)
//! ...
//! ```
//!
//! Each node line declares its own edge count followed by neighbor
//! indices, 0-based within the current graph. The parser keeps the
//! declared edge count and the neighbor list separate and does not require
//! them to agree; reconciling the two is the graph builder's job, so that
//! a corrupt record is reported as an integrity failure on the offending
//! sample rather than a generic parse error.

use std::fs;
use std::path::Path;

use crate::error::LoadError;

/// One raw per-node entry: feature tag, declared edge count, neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNodeEntry {
    pub feature: i64,
    pub declared_edges: usize,
    pub neighbors: Vec<usize>,
}

/// One raw graph record, in corpus order. Transient: consumed by the
/// graph builder during the load and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGraphRecord {
    pub node_count: usize,
    pub label: i64,
    pub nodes: Vec<RawNodeEntry>,
}

/// Parse a corpus file from disk.
pub fn parse_corpus_file(path: impl AsRef<Path>) -> Result<Vec<RawGraphRecord>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| LoadError::Format {
        line: 0,
        message: format!("failed to read {}: {}", path.display(), e),
    })?;
    parse_corpus(&content)
}

/// Parse corpus text already held in memory.
pub fn parse_corpus(input: &str) -> Result<Vec<RawGraphRecord>, LoadError> {
    let mut cursor = LineCursor::new(input);

    let header = cursor.next_fields()?;
    let graph_count = match header.as_slice() {
        [n] if *n >= 0 => *n as usize,
        _ => return Err(cursor.malformed("expected a single non-negative graph count")),
    };

    let mut records = Vec::with_capacity(graph_count);
    for _ in 0..graph_count {
        records.push(parse_record(&mut cursor)?);
    }
    Ok(records)
}

/// Line iterator that tracks the 1-based line number for error reports.
struct LineCursor<'a> {
    lines: std::str::Lines<'a>,
    line_no: usize,
}

impl<'a> LineCursor<'a> {
    fn new(input: &'a str) -> Self {
        LineCursor {
            lines: input.lines(),
            line_no: 0,
        }
    }

    /// Read the next line and parse every whitespace-separated field as an
    /// integer.
    fn next_fields(&mut self) -> Result<Vec<i64>, LoadError> {
        let line = self.lines.next().ok_or_else(|| LoadError::Format {
            line: self.line_no,
            message: "unexpected end of input".to_string(),
        })?;
        self.line_no += 1;
        line.split_whitespace()
            .map(|tok| {
                tok.parse::<i64>().map_err(|_| LoadError::Format {
                    line: self.line_no,
                    message: format!("expected integer, found {:?}", tok),
                })
            })
            .collect()
    }

    fn malformed(&self, message: &str) -> LoadError {
        LoadError::Format {
            line: self.line_no,
            message: message.to_string(),
        }
    }
}

fn parse_record(cursor: &mut LineCursor) -> Result<RawGraphRecord, LoadError> {
    let header = cursor.next_fields()?;
    let (node_count, label) = match header.as_slice() {
        [n, label] if *n >= 0 => (*n as usize, *label),
        _ => return Err(cursor.malformed("expected sample header `<node_count> <label>`")),
    };

    let mut nodes = Vec::with_capacity(node_count);
    for _ in 0..node_count {
        let row = cursor.next_fields()?;
        let (feature, declared_edges, neighbor_fields) = match row.as_slice() {
            [feature, declared, rest @ ..] if *declared >= 0 => {
                (*feature, *declared as usize, rest)
            }
            _ => {
                return Err(cursor.malformed(
                    "expected node line `<feature> <edge_count> <neighbor>...`",
                ))
            }
        };
        let mut neighbors = Vec::with_capacity(neighbor_fields.len());
        for &n in neighbor_fields {
            if n < 0 {
                return Err(cursor.malformed("neighbor indices must be non-negative"));
            }
            neighbors.push(n as usize);
        }
        nodes.push(RawNodeEntry {
            feature,
            declared_edges,
            neighbors,
        });
    }

    Ok(RawGraphRecord {
        node_count,
        label,
        nodes,
    })
}
