//! count モジュールのテスト

use crate::board::Board;
use crate::search::{count_solutions, fill_with_n_queens};

#[test]
fn test_known_solution_counts() {
    // (一辺, 解の総数)
    for (size, expected) in [(1, 1), (2, 0), (3, 0), (4, 2), (5, 10), (6, 4), (7, 40)] {
        let mut board = Board::new(size).unwrap();
        assert_eq!(count_solutions(&mut board), expected, "size {size}");
    }
}

#[test]
fn test_eight_queens_has_92_solutions() {
    let mut board = Board::new(8).unwrap();
    assert_eq!(count_solutions(&mut board), 92);
}

#[test]
fn test_count_restores_board() {
    let mut board = Board::new(6).unwrap();
    let before = board.clone();
    count_solutions(&mut board);
    assert_eq!(board, before);
}

#[test]
fn test_count_after_fill_and_clear() {
    // ドライバと同じ流れ: 解を求めてから clear し、数え上げる
    let mut board = Board::new(5).unwrap();
    assert!(fill_with_n_queens(&mut board));
    board.clear();
    assert_eq!(count_solutions(&mut board), 10);
}

#[test]
fn test_count_from_seeded_row_is_dead_end() {
    // 行0に既にクイーンがあると行0に新たな候補が無く、数え上げは0になる
    // （数え上げは行0から新規に置いていく前提のため）
    let mut board = Board::new(4).unwrap();
    assert!(board.place_queen(0, 1).unwrap());
    let before = board.clone();
    assert_eq!(count_solutions(&mut board), 0);
    assert_eq!(board, before);
}
