//! Text ingestion for graphs and dictionaries.
//!
//! Graph format: the vertex count, then whitespace-separated `from to weight`
//! triples. Lines starting with `#` are comments. The vertex count is capped
//! at [`MAX_VERTICES`].

use crate::error::LoadError;
use crate::graph::Graph;
use crate::ladder::Dictionary;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Largest vertex count accepted from a graph header.
pub const MAX_VERTICES: usize = 1 << 28;

pub fn load_graph(path: &Path) -> Result<Graph, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = read_graph(BufReader::new(file))?;
    debug!(
        "loaded {} with {} vertices and {} edges",
        path.display(),
        graph.vertices,
        graph.edge_count()
    );
    Ok(graph)
}

pub fn read_graph<R: BufRead>(reader: R) -> Result<Graph, LoadError> {
    let mut graph: Option<Graph> = None;
    // A triple may span lines; remember where it started for error messages.
    let mut pending: Vec<(usize, &'static str, u64)> = Vec::with_capacity(3);

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        for token in trimmed.split_whitespace() {
            if graph.is_none() {
                let vertices = parse_number(token, line_no, "vertex count")?;
                graph = Some(allocate_graph(vertices, line_no)?);
                continue;
            }
            let Some(g) = graph.as_mut() else {
                continue;
            };

            let field = ["source vertex", "destination vertex", "weight"][pending.len()];
            pending.push((line_no, field, parse_number(token, line_no, field)?));

            if let [(line, _, from), (_, _, to), (_, _, weight)] = pending[..] {
                let (from, to) = (from as usize, to as usize);
                for vertex in [from, to] {
                    if vertex >= g.vertices {
                        warn!("line {}: rejecting edge {} -> {}", line, from, to);
                        return Err(LoadError::VertexOutOfRange {
                            line,
                            vertex,
                            vertices: g.vertices,
                        });
                    }
                }
                g.add_edge(from, to, weight);
                pending.clear();
            }
        }
    }

    if let Some(&(line, field, _)) = pending.last() {
        return Err(LoadError::Parse {
            line,
            reason: format!("incomplete edge, missing value after {field}"),
        });
    }

    graph.ok_or(LoadError::MissingHeader)
}

fn allocate_graph(vertices: u64, line: usize) -> Result<Graph, LoadError> {
    let too_large = || LoadError::Parse {
        line,
        reason: format!("vertex count {vertices} exceeds the limit of {MAX_VERTICES}"),
    };
    let vertices = usize::try_from(vertices)
        .ok()
        .filter(|&n| n <= MAX_VERTICES)
        .ok_or_else(too_large)?;
    Graph::try_new(vertices).map_err(|e| LoadError::Parse {
        line,
        reason: format!("cannot allocate {vertices} vertices: {e}"),
    })
}

fn parse_number(token: &str, line: usize, field: &str) -> Result<u64, LoadError> {
    token.parse::<u64>().map_err(|_| {
        let reason = if token.starts_with('-') && token[1..].parse::<u64>().is_ok() {
            format!("negative {field} {token}")
        } else {
            format!("invalid {field} {token:?}")
        };
        LoadError::Parse { line, reason }
    })
}

pub fn load_words(path: &Path) -> Result<Dictionary, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let words = read_words(file)?;
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Reads whitespace-separated tokens, lowercased, duplicates collapsed.
pub fn read_words<R: Read>(mut reader: R) -> Result<Dictionary, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text.split_whitespace().map(str::to_lowercase).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_header_and_edges() {
        let input = "# small graph\n3\n0 1 5\n0 2 2\n\n2 1 1\n";
        let graph = read_graph(Cursor::new(input)).unwrap();

        assert_eq!(graph.vertices, 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge_weight(2, 1), Some(1));
    }

    #[test]
    fn edges_may_span_lines() {
        let graph = read_graph(Cursor::new("2 0 1\n7 1\n0 3")).unwrap();
        assert_eq!(graph.edge_weight(0, 1), Some(7));
        assert_eq!(graph.edge_weight(1, 0), Some(3));
    }

    #[test]
    fn header_only_graph_has_no_edges() {
        let graph = read_graph(Cursor::new("4\n")).unwrap();
        assert_eq!(graph.vertices, 4);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn rejects_oversized_vertex_count() {
        for header in ["18446744073709551615\n", "# huge\n268435457 0 0 1\n"] {
            match read_graph(Cursor::new(header)).unwrap_err() {
                LoadError::Parse { reason, .. } => {
                    assert!(reason.contains("exceeds the limit"), "{reason}")
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn empty_input_is_missing_header() {
        assert!(matches!(
            read_graph(Cursor::new("# nothing\n")),
            Err(LoadError::MissingHeader)
        ));
    }

    #[test]
    fn rejects_out_of_range_vertex() {
        let err = read_graph(Cursor::new("2\n0 1 1\n1 2 4\n")).unwrap_err();
        assert!(matches!(
            err,
            LoadError::VertexOutOfRange {
                line: 3,
                vertex: 2,
                vertices: 2
            }
        ));
    }

    #[test]
    fn rejects_negative_weight() {
        let err = read_graph(Cursor::new("2\n0 1 -4\n")).unwrap_err();
        match err {
            LoadError::Parse { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("negative weight"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_incomplete_edge() {
        let err = read_graph(Cursor::new("2\n0 1\n")).unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 2, .. }));
    }

    #[test]
    fn rejects_garbage() {
        let err = read_graph(Cursor::new("three\n")).unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 1, .. }));
    }

    #[test]
    fn words_are_lowercased_and_deduplicated() {
        let dict = read_words(Cursor::new("Cat cat\nDOG  cot\n\tcog")).unwrap();
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["cat", "cog", "cot", "dog"]);
    }
}
