use std::env;
use std::process::ExitCode;

use chess_rules::board::{Board, Color};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut board = Board::new();
    let mut side = Color::White;
    for notation in &args {
        let mv = match board.parse_move(notation) {
            Ok(mv) if board.piece(mv.piece()).map(|p| p.color()) == Some(side) => mv,
            Ok(_) => {
                eprintln!("{notation}: not {side}'s move");
                return ExitCode::FAILURE;
            }
            Err(e) => {
                eprintln!("{notation}: {e}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = board.make_move(mv) {
            eprintln!("{notation}: {e}");
            return ExitCode::FAILURE;
        }
        side = side.opponent();
    }

    println!("{board}");
    println!("side_to_move: {side}");
    for color in Color::BOTH {
        let Some(status) = board.check_status(color) else {
            println!("{color}: no king");
            continue;
        };
        println!(
            "{color}: check={} checkmate={} stalemate={} legal_moves={}",
            status.is_check,
            status.is_checkmate,
            status.is_stalemate,
            board.legal_move_count(color)
        );
    }
    for mv in board.all_legal_moves(side) {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
