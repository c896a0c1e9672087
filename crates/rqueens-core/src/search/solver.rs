//! 最初の解を求めるバックトラック探索

use log::{debug, trace};

use crate::board::Board;
use crate::types::{Coord, SquareState};

/// 現在の盤面を起点に、クイーンが計 size 個になるまで配置を試みる
///
/// 成功時は `true` を返し、盤面には最初に見つかった解が残る。失敗時は
/// `false` を返し、この呼び出しで行った配置はすべて巻き戻されている。
///
/// 候補は盤面全体の空きマスを行優先で列挙した列。列挙順は決定的で、
/// どの解が「最初に」見つかるかにのみ影響し、正否には影響しない。
pub fn fill_with_n_queens(board: &mut Board) -> bool {
    let mut nodes = 0u64;
    let solved = fill_recursive(board, &mut nodes);
    debug!("fill_with_n_queens: size={} solved={solved} nodes={nodes}", board.size());
    solved
}

fn fill_recursive(board: &mut Board, nodes: &mut u64) -> bool {
    *nodes += 1;

    let choices = empty_squares(board);

    // 置けるマスが尽きたのに解に達していなければ、この枝は失敗
    if choices.is_empty() && board.num_queens() < board.size() {
        return false;
    }
    if board.num_queens() == board.size() {
        return true;
    }

    for next in choices {
        board.occupy(next);
        if fill_recursive(board, nodes) {
            return true;
        }
        trace!("backtrack at {next}");
        board.undo_last();
    }
    false
}

/// 盤面全体の空きマスを行優先で列挙する
fn empty_squares(board: &Board) -> Vec<Coord> {
    let mut choices = Vec::new();
    for row in 0..board.size() {
        for col in 0..board.size() {
            let coord = Coord::new(row, col);
            if board.square_unchecked(coord) == SquareState::Empty {
                choices.push(coord);
            }
        }
    }
    choices
}
