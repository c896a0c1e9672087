//! 全解数の数え上げ

use log::debug;

use crate::board::Board;
use crate::types::{Coord, SquareState};

/// 現在の盤面を起点に、到達可能な解の総数を数える
///
/// 行0から順にクイーンを置いていく。解は必ず各行にちょうど1個のクイーンを
/// 持つため、候補の走査は現在の行だけでよく、再帰の深さはちょうど size で
/// 抑えられる。呼び出し後の盤面は呼び出し前の状態に戻っている。
pub fn count_solutions(board: &mut Board) -> u64 {
    let count = count_from_row(board, 0);
    debug!("count_solutions: size={} count={count}", board.size());
    count
}

fn count_from_row(board: &mut Board, row: usize) -> u64 {
    if board.num_queens() == board.size() {
        return 1;
    }

    // 現在の行の空きマスだけが候補
    let choices: Vec<Coord> = (0..board.size())
        .map(|col| Coord::new(row, col))
        .filter(|&coord| board.square_unchecked(coord) == SquareState::Empty)
        .collect();

    let mut count = 0;
    for next in choices {
        board.occupy(next);
        count += count_from_row(board, row + 1);
        board.undo_last();
    }
    count
}
