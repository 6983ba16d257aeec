use std::path::PathBuf;
use thiserror::Error;

/// Caller contract violations raised by the search engines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("source vertex {vertex} out of range (graph has {vertices} vertices)")]
    SourceOutOfRange { vertex: usize, vertices: usize },

    #[error("destination vertex {vertex} out of range (graph has {vertices} vertices)")]
    DestinationOutOfRange { vertex: usize, vertices: usize },

    #[error("edge {from} -> {to} points outside the graph ({vertices} vertices)")]
    DanglingEdge {
        from: usize,
        to: usize,
        vertices: usize,
    },
}

/// Failures while reading a graph or dictionary from text.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("graph input has no vertex count")]
    MissingHeader,

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("line {line}: vertex {vertex} out of range (graph has {vertices} vertices)")]
    VertexOutOfRange {
        line: usize,
        vertex: usize,
        vertices: usize,
    },
}
