use clap::Parser;
use graph_search::{Distance, dijkstra_shortest_path, loader};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

/// Print the shortest path and its cost from a source to every vertex.
#[derive(Parser, Debug)]
#[command(name = "dijkstras", version)]
struct Args {
    /// Graph file: vertex count followed by `from to weight` triples
    graph: PathBuf,

    /// Source vertex
    #[arg(long, default_value_t = 0)]
    source: usize,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct PathReport {
    vertex: usize,
    cost: Option<Distance>,
    path: Vec<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let graph = match loader::load_graph(&args.graph) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error reading graph: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Graph loaded: {} vertices, {} edges",
        graph.vertices,
        graph.edge_count()
    );

    let result = dijkstra_shortest_path(&graph, args.source)?;

    let reports: Vec<PathReport> = (0..result.len())
        .map(|v| {
            Ok(PathReport {
                vertex: v,
                cost: result.distance(v),
                path: result.path_to(v)?,
            })
        })
        .collect::<Result<_, graph_search::SearchError>>()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        match report.cost {
            Some(cost) => {
                let path: Vec<String> = report.path.iter().map(usize::to_string).collect();
                println!("{}", path.join(" "));
                println!("Total cost is {}\n", cost);
            }
            None => println!("{}\nNo path found\n", report.vertex),
        }
    }

    Ok(())
}
