use clap::Parser;
use pegsol_solver::board::Move;
use pegsol_solver::utils::board_from_str;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the board file (directions line, blank line, grid rows)
    board_file: PathBuf,
}

fn main() {
    let args = Args::parse();

    let content = fs::read_to_string(&args.board_file)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", args.board_file.display(), e));
    let mut board = board_from_str(&content)
        .unwrap_or_else(|e| panic!("Invalid board file {}: {}", args.board_file.display(), e));

    println!("Welcome to peg solitaire!");

    loop {
        println!("\n{}", board);

        if board.is_goal() {
            println!("Congratulations! You won!");
            break;
        }

        let moves: Vec<Move> = board.possible_moves().collect();
        if moves.is_empty() {
            println!("You lost! Sorry");
            break;
        }

        for (index, mv) in moves.iter().enumerate() {
            println!("{}:\t{}", index, mv);
        }

        print!("Please select a move (or 'q' to quit): ");
        io::stdout().flush().expect("failed to flush stdout");

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }
        let trimmed = input.trim();

        if trimmed == "q" {
            println!("Thanks for playing!");
            break;
        }

        match trimmed.parse::<usize>() {
            Ok(index) if index < moves.len() => {
                let mv = moves[index];
                board = board.make_move(mv.source, mv.destination);
            }
            _ => println!(
                "Invalid input: enter a move number between 0 and {}, or 'q'.",
                moves.len() - 1
            ),
        }
    }
}
