//! Example that walks through every graph operation and prints the results.
//!
//! Builds an undirected sample graph, queries neighbors, paths and degrees,
//! removes an edge and a vertex, then builds a small directed graph.
//!
//! Usage:
//!   cargo run --example walkthrough
//!   cargo run --example walkthrough -- --json --verbose
//!   cargo run --example walkthrough -- --path A,B,C,D --path A,D

#[cfg(all(feature = "serde", feature = "tracing"))]
mod inner {
    use clap::Parser;
    use matrix_graph::{prelude::*, tracing_support::init_tracing};

    /// Walk through the graph operations on a small sample graph.
    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// Print degree tables as JSON
        #[arg(long)]
        json: bool,

        /// Log every graph mutation
        #[arg(short, long)]
        verbose: bool,

        /// Comma-separated path to validate against the undirected sample
        /// (repeatable)
        #[arg(long = "path")]
        paths: Vec<String>,
    }

    pub fn run() {
        let args = Args::parse();
        init_tracing(args.verbose);

        let mut graph = Graph::new();
        for label in ["A", "B", "C", "D"] {
            graph.add_vertex(label);
        }
        println!("--- vertices A, B, C, D ---");
        print!("{}", MatrixTable(&graph));

        for (from, to) in [("A", "B"), ("B", "C"), ("A", "C"), ("C", "D")] {
            graph.add_edge(from, to, Undirected);
        }
        println!("\n--- undirected edges A-B, B-C, A-C, C-D ---");
        print!("{}", MatrixTable(&graph));

        println!("\n--- neighbors ---");
        for vertex in ["C", "D", "B", "Q"] {
            println!("{}", NeighborReport::new(&graph, vertex));
        }

        println!("\n--- paths ---");
        let default_paths = vec![
            vec!["A", "B", "C", "D"],
            vec!["A", "D"],
            vec!["D", "C", "A", "B"],
        ];
        let paths: Vec<Vec<&str>> = if args.paths.is_empty() {
            default_paths
        } else {
            args.paths
                .iter()
                .map(|path| path.split(',').map(str::trim).collect())
                .collect()
        };
        for path in &paths {
            println!("{path:?} valid: {}", graph.is_valid_path(path));
        }

        println!("\n--- degrees (undirected) ---");
        print_degrees(&graph.degrees(), args.json);

        graph.remove_edge("A", "C", Undirected);
        println!("\n--- removed edge A-C ---");
        print!("{}", MatrixTable(&graph));
        println!("{}", NeighborReport::new(&graph, "A"));

        graph.remove_vertex("B");
        println!("\n--- removed vertex B ---");
        print!("{}", MatrixTable(&graph));

        let mut directed = Graph::new();
        for (from, to) in [("X", "Y"), ("Y", "Z"), ("X", "Z")] {
            directed.add_edge(from, to, Directed);
        }
        println!("\n--- directed edges X->Y, Y->Z, X->Z ---");
        print!("{}", MatrixTable(&directed));
        println!("\n--- degrees (directed) ---");
        print_degrees(&directed.degrees(), args.json);
    }

    fn print_degrees(degrees: &Degrees, json: bool) {
        if json {
            match serde_json::to_string_pretty(degrees) {
                Ok(text) => println!("{text}"),
                Err(err) => eprintln!("Failed to serialize degrees: {err}"),
            }
            return;
        }
        for (label, degree) in degrees.iter() {
            match degree {
                Degree::Undirected(degree) => println!("{label}: {degree}"),
                Degree::Directed(degree) => println!(
                    "{label}: out {}, in {}, total {}",
                    degree.out_degree, degree.in_degree, degree.total
                ),
            }
        }
    }
}

#[cfg(all(feature = "serde", feature = "tracing"))]
fn main() {
    inner::run();
}

#[cfg(not(all(feature = "serde", feature = "tracing")))]
fn main() {
    println!("This example requires the 'serde' and 'tracing' features to be enabled.");
    println!("Run with: cargo run --example walkthrough --features serde,tracing");
}
