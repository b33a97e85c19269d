use chess_rules::{attempt_move, legal_destinations, Board, MoveRequest, Square, TurnState};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn all_destinations(board: &Board, turn: TurnState) -> usize {
    board
        .iter_pieces()
        .map(|(square, _)| legal_destinations(board, turn, square).len())
        .sum()
}

fn opening_push(board: &Board, turn: TurnState) -> bool {
    let (source, destination) = (Square::new(52), Square::new(36));
    let request = source
        .zip(destination)
        .and_then(|(source, destination)| MoveRequest::from_board(board, source, destination));
    match request {
        Some(request) => attempt_move(board, turn, &request).0.is_applied(),
        None => false,
    }
}

fn utils_benchmark(c: &mut Criterion) {
    let middle_game =
        Board::from_placement("r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQK2R")
            .unwrap_or_default();
    c.bench_function("destinations initial", |b| {
        b.iter(|| all_destinations(black_box(&Board::default()), TurnState::default()))
    });
    c.bench_function("destinations middle game", |b| {
        b.iter(|| all_destinations(black_box(&middle_game), TurnState::default()))
    });
    c.bench_function("attempt opening push", |b| {
        b.iter(|| opening_push(black_box(&Board::default()), TurnState::default()))
    });
}

criterion_group!(benches, utils_benchmark);
criterion_main!(benches);
