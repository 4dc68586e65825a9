//! Command-line front end for wordgraph.
//!
//! Loads a text file (or a built-in sample), builds the graph once, and runs
//! one query per invocation. `--seed` makes the randomized subcommands
//! reproducible; `--json` switches query output to structured form.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::process;
use wordgraph::{
    bridge_words, generate_text, page_rank, random_walk, shortest_path, to_dot, BridgeWords,
    PathOutcome, RankConfig, WalkOutcome, WordGraph, WordGraphError,
};

/// Built-in sample used when no input file is given.
const DEFAULT_TEXT: &str = "The scientist carefully analyzed the data, wrote a detailed \
     report, and shared the report with the team, but the team requested more data, so the \
     scientist analyzed it again.";

#[derive(Parser)]
#[command(name = "wordgraph", version, about = "Directed word-adjacency graph analysis")]
struct Cli {
    /// Input text file (falls back to a built-in sample)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// RNG seed for reproducible generation and walks
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Emit query results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the graph summary and adjacency listing
    Show,
    /// Emit a Graphviz DOT description of the graph
    Dot {
        /// Highlight this path (ordered list of words)
        #[arg(long, num_args = 1..)]
        highlight: Vec<String>,
    },
    /// Query bridge words between two words
    Bridge { word1: String, word2: String },
    /// Rewrite a text by inserting bridge words
    Generate { text: String },
    /// Compute a shortest path between two words
    Path { word1: String, word2: String },
    /// Compute the PageRank score of a word
    Pagerank {
        word: String,
        /// Damping factor
        #[arg(long, default_value_t = 0.85)]
        damping: f64,
        /// Maximum iterations
        #[arg(long, default_value_t = 100)]
        max_iterations: usize,
        /// L1 convergence tolerance
        #[arg(long, default_value_t = 1e-6)]
        tolerance: f64,
    },
    /// Perform a random walk from a random start node
    Walk,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let text = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => DEFAULT_TEXT.to_string(),
    };
    let graph = WordGraph::from_text(&text);

    let mut rng: StdRng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match &cli.command {
        Command::Show => show(&graph),
        Command::Dot { highlight } => {
            let highlight = (!highlight.is_empty()).then_some(highlight.as_slice());
            print!("{}", to_dot(&graph, highlight));
        }
        Command::Bridge { word1, word2 } => {
            let outcome = bridge_words(&graph, word1, word2);
            if cli.json {
                print_json(&outcome)?;
            } else {
                println!(
                    "{}",
                    describe_bridges(&word1.to_lowercase(), &word2.to_lowercase(), &outcome)
                );
            }
        }
        Command::Generate { text } => {
            println!("{}", generate_text(&graph, &mut rng, text));
        }
        Command::Path { word1, word2 } => {
            let outcome = shortest_path(&graph, word1, word2);
            if cli.json {
                print_json(&outcome)?;
            } else {
                println!(
                    "{}",
                    describe_path(&word1.to_lowercase(), &word2.to_lowercase(), &outcome)
                );
            }
        }
        Command::Pagerank {
            word,
            damping,
            max_iterations,
            tolerance,
        } => {
            let config = RankConfig::new()
                .with_damping(*damping)
                .with_max_iterations(*max_iterations)
                .with_tolerance(*tolerance);
            config.validate()?;

            let word = word.to_lowercase();
            match page_rank(&graph, &word, &config) {
                Some(score) if cli.json => print_json(&score)?,
                Some(score) => println!("PageRank of \"{word}\": {score:.6}"),
                None => println!("No \"{word}\" in the graph!"),
            }
        }
        Command::Walk => {
            let outcome = random_walk(&graph, &mut rng);
            if cli.json {
                print_json(&outcome)?;
            } else {
                match outcome {
                    WalkOutcome::EmptyGraph => println!("The graph is empty!"),
                    WalkOutcome::Path(path) => println!("{}", path.join(" ")),
                }
            }
        }
    }

    Ok(())
}

fn show(graph: &WordGraph) {
    println!("Nodes: {}", graph.node_count());
    println!("Edges: {}", graph.edge_count());
    println!();

    let mut words: Vec<&str> = graph.words().collect();
    words.sort_unstable();
    for word in words {
        let Some(id) = graph.node_id(word) else {
            continue;
        };
        let edges = graph.out_edges(id);
        if edges.is_empty() {
            continue;
        }
        let targets: Vec<String> = edges
            .iter()
            .filter_map(|e| graph.word(e.target).map(|t| format!("{t}({})", e.weight)))
            .collect();
        println!("{word} -> {}", targets.join(", "));
    }
}

fn describe_bridges(w1: &str, w2: &str, outcome: &BridgeWords) -> String {
    match outcome {
        BridgeWords::NeitherInGraph => format!("No \"{w1}\" and \"{w2}\" in the graph!"),
        BridgeWords::MissingWord(word) => format!("No \"{word}\" in the graph!"),
        BridgeWords::NoBridges => format!("No bridge words from \"{w1}\" to \"{w2}\"!"),
        BridgeWords::Found(words) => match words.as_slice() {
            [] => format!("No bridge words from \"{w1}\" to \"{w2}\"!"),
            [only] => format!("The bridge word from \"{w1}\" to \"{w2}\" is: \"{only}\""),
            [rest @ .., last] => {
                let quoted: Vec<String> = rest.iter().map(|w| format!("\"{w}\"")).collect();
                format!(
                    "The bridge words from \"{w1}\" to \"{w2}\" are: {} and \"{last}\".",
                    quoted.join(", ")
                )
            }
        },
    }
}

fn describe_path(w1: &str, w2: &str, outcome: &PathOutcome) -> String {
    match outcome {
        PathOutcome::NotFound(word) => format!("No \"{word}\" in the graph!"),
        PathOutcome::SameWord(word) => {
            format!("The path from \"{word}\" to \"{word}\" is: {word}")
        }
        PathOutcome::Found { path, length } => format!(
            "The shortest path from \"{w1}\" to \"{w2}\" is: {}\nPath length: {length}",
            path.join(" -> ")
        ),
        PathOutcome::NoPath => format!("No path from \"{w1}\" to \"{w2}\"!"),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).map_err(WordGraphError::from)?;
    println!("{rendered}");
    Ok(())
}
