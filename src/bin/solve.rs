use clap::{Parser, ValueEnum};
use pegsol_solver::heuristics::{self, Heuristic};
use pegsol_solver::search::{
    AStar, BreadthFirstSearch, DepthFirstSearch, DuplicateCheck, IterativeDeepeningAStar, Path,
};
use pegsol_solver::utils::board_from_str;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Method {
    Dfs,
    Bfs,
    Astar,
    Idastar,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HeuristicName {
    MaxMoves,
    MinMoves,
    MaxMovablePegs,
    ManhattanCost,
}

impl HeuristicName {
    fn resolve(self) -> Heuristic {
        match self {
            HeuristicName::MaxMoves => heuristics::max_moves,
            HeuristicName::MinMoves => heuristics::min_moves,
            HeuristicName::MaxMovablePegs => heuristics::max_movable_pegs,
            HeuristicName::ManhattanCost => heuristics::manhattan_cost,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the board file (directions line, blank line, grid rows)
    board_file: PathBuf,

    /// Search method to run
    #[clap(short, long, value_enum, default_value = "bfs")]
    method: Method,

    /// Graph search: skip successors equal to an already-visited board
    #[clap(long)]
    graph: bool,

    /// Also treat rotations of visited boards as visited (implies --graph)
    #[clap(long)]
    symmetry: bool,

    /// Heuristic for the informed methods (astar, idastar)
    #[clap(long, value_enum, default_value = "min-moves")]
    heuristic: HeuristicName,
}

fn main() {
    let args = Args::parse();

    let content = fs::read_to_string(&args.board_file)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", args.board_file.display(), e));
    let board = board_from_str(&content)
        .unwrap_or_else(|e| panic!("Invalid board file {}: {}", args.board_file.display(), e));

    let duplicates = if args.symmetry {
        DuplicateCheck::Symmetric
    } else if args.graph {
        DuplicateCheck::Exact
    } else {
        DuplicateCheck::Off
    };
    let heuristic = args.heuristic.resolve();

    println!("Initial board state:\n{}", board);

    let started = Instant::now();
    let (solution, nodes_visited, peak_space, visited_size): (Option<Path>, u64, usize, Option<usize>) =
        match args.method {
            Method::Dfs => {
                let mut engine = DepthFirstSearch::new(board);
                let solution = engine.next();
                (solution, engine.nodes_visited(), engine.peak_space(), None)
            }
            Method::Bfs => {
                let mut engine = BreadthFirstSearch::new(board, duplicates);
                let solution = engine.next();
                (
                    solution,
                    engine.nodes_visited(),
                    engine.peak_space(),
                    Some(engine.visited_size()),
                )
            }
            Method::Astar => {
                let mut engine = AStar::new(board, heuristic, duplicates);
                let solution = engine.next();
                (
                    solution,
                    engine.nodes_visited(),
                    engine.peak_space(),
                    Some(engine.visited_size()),
                )
            }
            Method::Idastar => {
                let mut engine = IterativeDeepeningAStar::new(board, heuristic);
                let solution = engine.search();
                (solution, engine.nodes_visited(), engine.peak_space(), None)
            }
        };
    let elapsed = started.elapsed();

    println!("------------------------------");
    println!(
        "Search: {:?} on {}",
        args.method,
        args.board_file.display()
    );
    match &solution {
        Some(path) if path.is_empty() => println!("Board is already solved."),
        Some(path) => {
            for mv in path {
                println!("{}", mv);
            }
        }
        None => println!("No solution found!"),
    }
    println!("Duration: {:.4} seconds", elapsed.as_secs_f64());
    println!("Nodes Visited: {}", nodes_visited);
    println!("Space: {} nodes", peak_space);
    if duplicates != DuplicateCheck::Off {
        if let Some(size) = visited_size {
            println!("Visited Size: {}", size);
        }
    }
    println!("------------------------------");
}
