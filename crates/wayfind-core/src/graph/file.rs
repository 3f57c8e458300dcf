//! Graph deserialization from the line-oriented text format.
//!
//! ```text
//! <number of nodes>
//! <node id>                        (repeated node-count times)
//! <number of edges>
//! <from id> <to id> <weight>       (repeated edge-count times)
//! ```
//!
//! Node identifiers are arbitrary non-whitespace tokens and treated as
//! opaque strings. Weights are non-negative integers.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, WayfindError};

use super::UndirectedGraph;

impl UndirectedGraph {
    /// Build a graph from a file in the line-oriented text format.
    ///
    /// A missing file and a malformed file are both usage errors; parsing
    /// and construction happen in a single fail-fast pass.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(WayfindError::GraphFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse and construct in a single pass, failing on the first
    /// malformed line. Content after the declared edges is ignored.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut parser = LineParser::new(reader);
        let mut graph = UndirectedGraph::new();

        let node_count = parser.count("node count")?;
        for _ in 0..node_count {
            let line = parser.next_line()?;
            let mut tokens = line.split_whitespace();
            match (tokens.next(), tokens.next()) {
                (Some(id), None) => graph.add_node(id),
                _ => return Err(parser.invalid("expected exactly one node identifier")),
            }
        }

        let edge_count = parser.count("edge count")?;
        for _ in 0..edge_count {
            let line = parser.next_line()?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != 3 {
                return Err(parser.invalid("expected `<from id> <to id> <weight>`"));
            }

            let weight: u64 = tokens[2].parse().map_err(|_| {
                parser.invalid(format!(
                    "weight must be a non-negative integer, got `{}`",
                    tokens[2]
                ))
            })?;
            graph.add_edge(tokens[0], tokens[1], weight);
        }

        Ok(graph)
    }
}

/// Line-at-a-time reader that tracks the current line number for error
/// reporting.
struct LineParser<R: BufRead> {
    lines: std::io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> LineParser<R> {
    fn new(reader: R) -> Self {
        LineParser {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    fn next_line(&mut self) -> Result<String> {
        self.line_no += 1;
        match self.lines.next() {
            Some(Ok(line)) => Ok(line),
            Some(Err(err)) => Err(self.invalid(err.to_string())),
            None => Err(self.invalid("unexpected end of file")),
        }
    }

    fn count(&mut self, what: &str) -> Result<usize> {
        let line = self.next_line()?;
        let token = line.trim();
        token
            .parse()
            .map_err(|_| self.invalid(format!("{what} must be a non-negative integer, got `{token}`")))
    }

    fn invalid(&self, reason: impl Into<String>) -> WayfindError {
        WayfindError::InvalidGraphFile {
            line: self.line_no,
            reason: reason.into(),
        }
    }
}
