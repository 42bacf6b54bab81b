//! The textual interface: two players sharing one terminal.

use chess_engine::{Board, GameState, GameStatus, Move, MoveList, Player, Square};
use crossterm::style::{style, Color, Stylize};
use log::{debug, info};
use std::io::{self, BufRead, Write};

const LIGHT_SQUARE: Color = Color::Rgb { r: 235, g: 235, b: 208 };
const DARK_SQUARE: Color = Color::Rgb { r: 119, g: 148, b: 85 };

/// What a line of input asks for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Play(Square, Square),
    Undo,
    ListMoves,
    Exit,
}

/// Runs the main game loop for the text-based UI.
pub fn run() -> io::Result<()> {
    let mut state = GameState::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("--- Chess ---");
    println!("Enter moves as origin and destination squares (e.g. e2e4).");
    println!("Type 'undo' to take back a move, 'moves' to list legal moves, 'exit' to quit.");

    loop {
        let legal_moves = state.valid_moves();
        println!();
        print_board(state.board());

        match state.status() {
            GameStatus::Checkmate => println!("Checkmate! {} wins.", state.player_to_move().opponent()),
            GameStatus::Stalemate => println!("Stalemate! It's a draw."),
            GameStatus::Active if state.in_check() => println!("{} is in check.", state.player_to_move()),
            GameStatus::Active => {}
        }

        print!("{} to move: ", state.player_to_move());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_command(&line) {
            Some(Command::Exit) => break,
            Some(Command::Undo) => match state.undo_move() {
                Some(mv) => info!("undo {}", mv.notation()),
                None => println!("Nothing to undo."),
            },
            Some(Command::ListMoves) => println!("{}", describe_moves(&legal_moves)),
            Some(Command::Play(from_sq, to_sq)) => {
                if !play_if_legal(&mut state, &legal_moves, from_sq, to_sq) {
                    println!("Illegal move. Please try again.");
                }
            }
            None => println!("Unrecognised input. Please try again."),
        }
    }
    Ok(())
}

/// Parses `e2e4`, `undo`, `moves` or `exit`.
fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();
    match input {
        "exit" | "quit" => Some(Command::Exit),
        "undo" | "z" => Some(Command::Undo),
        "moves" => Some(Command::ListMoves),
        _ if input.len() == 4 && input.is_ascii() => {
            let from_sq = input[0..2].parse().ok()?;
            let to_sq = input[2..4].parse().ok()?;
            Some(Command::Play(from_sq, to_sq))
        }
        _ => None,
    }
}

/// Plays `from_sq` to `to_sq` when it is in `legal_moves`.
fn play_if_legal(state: &mut GameState, legal_moves: &MoveList, from_sq: Square, to_sq: Square) -> bool {
    let candidate = Move::new(from_sq, to_sq, state.board());
    if !legal_moves.contains(&candidate) {
        debug!("rejected {}", candidate.notation());
        return false;
    }
    info!("{}: {}", state.player_to_move(), candidate.notation());
    state.make_move(candidate);
    true
}

fn describe_moves(moves: &MoveList) -> String {
    moves
        .iter()
        .map(|mv| mv.notation())
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_board(board: &Board) {
    for (r, row) in board.rows().iter().enumerate() {
        print!("{} ", 8 - r);
        for (c, piece) in row.iter().enumerate() {
            let background = if (r + c) % 2 == 0 { LIGHT_SQUARE } else { DARK_SQUARE };
            let foreground = match piece.player() {
                Some(Player::White) => Color::White,
                _ => Color::Black,
            };
            let label = if piece.is_empty() {
                "   ".to_string()
            } else {
                format!(" {} ", piece.to_fen_char())
            };
            print!("{}", style(label).with(foreground).on(background).bold());
        }
        println!();
    }
    println!("   a  b  c  d  e  f  g  h");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command(" exit "), Some(Command::Exit));
        assert_eq!(parse_command("undo"), Some(Command::Undo));
        assert_eq!(parse_command("moves"), Some(Command::ListMoves));
        assert_eq!(
            parse_command("e2e4"),
            Some(Command::Play(Square::new(6, 4), Square::new(4, 4)))
        );
        assert_eq!(parse_command("e2e9"), None);
        assert_eq!(parse_command("e2"), None);
        assert_eq!(parse_command("é2e4"), None);
    }

    #[test]
    fn only_listed_moves_are_played() {
        let mut state = GameState::new();
        let legal = state.valid_moves();
        assert!(!play_if_legal(&mut state, &legal, Square::new(6, 4), Square::new(3, 4)));
        assert!(state.move_log().is_empty());

        assert!(play_if_legal(&mut state, &legal, Square::new(6, 4), Square::new(4, 4)));
        assert_eq!(state.move_log()[0].notation(), "e2e4");
        assert_eq!(state.player_to_move(), Player::Black);
    }

    #[test]
    fn lists_legal_moves_in_notation() {
        let mut state = GameState::new();
        let listed = describe_moves(&state.valid_moves());
        assert_eq!(listed.split(' ').count(), 20);
        assert!(listed.contains("e2e4"));
        assert!(listed.contains("g1f3"));
    }
}
