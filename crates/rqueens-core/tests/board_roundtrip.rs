//! 盤面の往復・初期化に関する統合テスト

use rqueens_core::{Board, BoardError, SquareState, count_solutions, fill_with_n_queens};

/// 配置列を逆順にすべて除去すると、各時点の状態が正確に復元される
#[test]
fn test_place_remove_roundtrip_restores_each_state() {
    let mut board = Board::new(6).unwrap();
    let placements = [(0, 0), (1, 2), (2, 4), (4, 1)];

    let mut snapshots = vec![board.clone()];
    for (row, col) in placements {
        assert!(board.place_queen(row, col).unwrap(), "({row}, {col}) should be placeable");
        snapshots.push(board.clone());
    }

    // 逆順に巻き戻しながら各スナップショットと突き合わせる
    while snapshots.len() > 1 {
        snapshots.pop();
        board.remove_queen().unwrap();
        assert_eq!(&board, snapshots.last().unwrap());
    }
    assert_eq!(board.num_queens(), 0);
    assert_eq!(board.remove_queen(), Err(BoardError::NoQueenToRemove));
}

/// clear はどんな状態からでも全マス空き・クイーン0に戻し、冪等である
#[test]
fn test_clear_is_idempotent_after_any_state() {
    let mut board = Board::new(5).unwrap();
    assert!(fill_with_n_queens(&mut board));
    assert_eq!(board.num_queens(), 5);

    board.clear();
    assert_eq!(board.num_queens(), 0);
    for row in 0..5 {
        for col in 0..5 {
            assert_eq!(board.square_at(row, col), Some(SquareState::Empty));
        }
    }

    board.clear();
    assert_eq!(board, Board::new(5).unwrap());
}

/// ドライバの利用手順を通しで確認する
#[test]
fn test_driver_flow_solve_then_count() {
    let mut board = Board::new(4).unwrap();
    assert!(fill_with_n_queens(&mut board));
    let rendered = board.to_string();
    assert_eq!(rendered.lines().count(), 4);
    assert_eq!(rendered.matches('Q').count(), 4);

    board.clear();
    assert_eq!(count_solutions(&mut board), 2);
}
