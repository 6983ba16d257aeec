pub mod dijkstra;
pub mod edit_distance;
pub mod error;
pub mod graph;
pub mod ladder;
pub mod loader;
pub mod utils;

pub use dijkstra::{ShortestPaths, dijkstra_shortest_path, extract_shortest_path, path_cost};
pub use edit_distance::{edit_distance, edit_distance_within, is_adjacent};
pub use error::{LoadError, SearchError};
pub use graph::{Edge, Graph, Weight};
pub use ladder::{
    Dictionary, LadderOptions, NeighborStrategy, TrivialLadder, generate_word_ladder,
    generate_word_ladder_with, verify_word_ladder,
};
pub use utils::{Distance, INFINITY};
