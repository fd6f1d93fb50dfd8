use std::io;

use thiserror::Error;

use crate::instance::VertexId;

/** errors raised while reading the command line (fatal, nothing is printed on stdout) */
#[derive(Debug, Error)]
pub enum ConfigError {
    /// missing, extra or unknown arguments
    #[error("invalid arguments: {0}")]
    Arguments(String),
    /// the instance file cannot be read
    #[error("unable to read instance {path}: {source}")]
    UnreadableInstance {
        /// path given on the command line
        path: String,
        /// underlying io error
        source: io::Error,
    },
    /// the time budget is not a strictly positive finite number of seconds
    #[error("time limit is incorrect: {0:?}")]
    InvalidTimeBudget(String),
}

/** errors raised while building a graph from an edge list */
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// an edge endpoint is not in 0..n
    #[error("vertex {vertex} out of range (nb vertices: {n})")]
    VertexOutOfRange {
        /// faulty (0-indexed) vertex
        vertex: VertexId,
        /// number of vertices of the graph
        n: usize,
    },
    /// an edge (u,u)
    #[error("self-loop on vertex {0}")]
    SelfLoop(VertexId),
}

/** errors raised while reading a DIMACS file. Line numbers start at 1. */
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// the file does not contain a `p` line
    #[error("missing problem line (p <format> <n> <m>)")]
    MissingHeader,
    /// a second `p` line
    #[error("line {line}: duplicate problem line")]
    DuplicateHeader {
        /// line number
        line: usize,
    },
    /// an `e` line appears before the `p` line
    #[error("line {line}: edge before the problem line")]
    EdgeBeforeHeader {
        /// line number
        line: usize,
    },
    /// wrong number of tokens or non-numeric tokens
    #[error("line {line}: malformed line {content:?}")]
    MalformedLine {
        /// line number
        line: usize,
        /// content of the line
        content: String,
    },
    /// vertex id 0 or greater than n (ids are 1-indexed in the file)
    #[error("line {line}: vertex {vertex} out of range 1..={n}")]
    VertexOutOfRange {
        /// line number
        line: usize,
        /// faulty (1-indexed) vertex
        vertex: usize,
        /// number of vertices declared by the problem line
        n: usize,
    },
    /// the edge list is rejected by the graph constructor
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/** errors reported by the executables */
#[derive(Debug, Error)]
pub enum Error {
    /// bad command line
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// bad instance
    #[error("invalid instance: {0}")]
    Parse(#[from] ParseError),
    /// results cannot be written
    #[error("unable to export results to {path}: {source}")]
    Export {
        /// output file
        path: String,
        /// underlying io error
        source: io::Error,
    },
    /// statistics cannot be serialized
    #[error("unable to serialize statistics: {0}")]
    Json(#[from] serde_json::Error),
}
