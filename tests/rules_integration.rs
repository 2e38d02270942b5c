use chess_rules::board::prelude::*;

fn play_line(board: &mut Board, line: &[&str]) {
    for notation in line {
        let mv = board
            .parse_move(notation)
            .unwrap_or_else(|e| panic!("{notation}: {e}"));
        board.make_move(mv).expect("legal move applies");
    }
}

fn square(name: &str) -> Square {
    name.parse().expect("valid square")
}

#[test]
fn scholars_mate_ends_in_checkmate() {
    let mut board = Board::new();
    play_line(
        &mut board,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );
    let status = board.status();
    assert_eq!(
        status.black,
        Some(CheckStatus {
            is_check: true,
            is_checkmate: true,
            is_stalemate: false,
        })
    );
    assert_eq!(status.white, Some(CheckStatus::default()));
    assert_eq!(board.captured().len(), 1);
    assert_eq!(board.captured()[0].kind(), PieceKind::Pawn);
    assert_eq!(board.material_balance(Color::White), 100);
}

#[test]
fn castling_both_sides_in_a_game() {
    let mut board = Board::new();
    play_line(
        &mut board,
        &[
            "e2e4", "d7d5", "g1f3", "d8d6", "f1e2", "c8d7", "e1g1", "b8c6",
        ],
    );
    assert_eq!(board.piece_at(square("g1")).unwrap().kind(), PieceKind::King);
    assert_eq!(board.piece_at(square("f1")).unwrap().kind(), PieceKind::Rook);

    let castle = board.parse_move("e8c8").expect("queenside castling legal");
    assert!(castle.is_castling());
    board.make_move(castle).unwrap();
    assert_eq!(board.piece_at(square("c8")).unwrap().kind(), PieceKind::King);
    assert_eq!(board.piece_at(square("d8")).unwrap().kind(), PieceKind::Rook);
    assert!(board.piece_at(square("a8")).is_none());
    assert_eq!(
        board.to_placement(),
        "2kr1bnr/pppbpppp/2nq4/3p4/4P3/5N2/PPPPBPPP/RNBQ1RK1"
    );
}

#[test]
fn promotion_reaches_the_last_rank() {
    let mut board = BoardBuilder::new()
        .piece(square("e1"), Color::White, PieceKind::King)
        .piece(square("e8"), Color::Black, PieceKind::King)
        .moved_piece(square("a7"), Color::White, PieceKind::Pawn)
        .build();
    let pawn = *board.piece_at(square("a7")).unwrap();
    let promotions: Vec<PieceKind> = board
        .legal_moves(&pawn)
        .iter()
        .filter_map(|m| m.promotion())
        .collect();
    assert_eq!(
        promotions,
        vec![
            PieceKind::Queen,
            PieceKind::Rook,
            PieceKind::Bishop,
            PieceKind::Knight
        ]
    );

    play_line(&mut board, &["a7a8"]);
    let queen = board.piece_at(square("a8")).unwrap();
    assert_eq!(queen.kind(), PieceKind::Queen);
    assert_eq!(queen.id(), pawn.id());
    assert!(board.is_in_check(Color::Black));

    board.undo_move();
    assert_eq!(board.piece_at(square("a7")).unwrap().kind(), PieceKind::Pawn);
}

#[test]
fn illegal_input_is_reported() {
    let mut board = Board::new();
    assert!(board.parse_move("e2e5").is_err());
    assert!(board.parse_move("e3e4").is_err());
    assert!(board.parse_move("z9e4").is_err());
    assert!(board.parse_move("e2").is_err());

    let king = *board.king(Color::White).unwrap();
    let err = board
        .make_move(Move::new(&king, square("e2")))
        .unwrap_err();
    assert!(matches!(err, MoveError::OwnPieceOnDestination { .. }));
    assert!(board.history().is_empty());
}

#[test]
fn undo_walks_a_game_back_to_the_start() {
    let mut board = Board::new();
    let start = board.pieces().to_vec();
    play_line(
        &mut board,
        &[
            "d2d4", "d7d5", "c2c4", "d5c4", "e2e3", "b7b5", "a2a4", "c7c6", "a4b5", "c6b5",
        ],
    );
    assert_eq!(board.captured().len(), 3);
    while board.undo_move().is_some() {}
    assert_eq!(board.pieces(), start.as_slice());
    assert!(board.captured().is_empty());
}

#[test]
fn copy_simulation_matches_board_status() {
    let mut board = Board::new();
    play_line(&mut board, &["f2f3", "e7e5", "g2g4"]);

    let mut sim = board.copy();
    play_line(&mut sim, &["d8h4"]);
    assert!(sim.check_status(Color::White).unwrap().is_checkmate);
    assert!(!board.check_status(Color::White).unwrap().is_check);
    assert_eq!(board.history().len(), 3);
}

#[test]
fn display_draws_the_grid() {
    let board = Board::new();
    let text = board.to_string();
    assert!(text.contains("8 | r | n | b | q | k | b | n | r |"));
    assert!(text.contains("1 | R | N | B | Q | K | B | N | R |"));
    assert!(text.ends_with("a   b   c   d   e   f   g   h"));
}
