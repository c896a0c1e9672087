//! 盤面スナップショット
//!
//! 機械可読な出力（CLIのJSONモード等）向けに、盤面の要約を
//! シリアライズ可能な形で切り出す。

use serde::Serialize;

use crate::types::Coord;

use super::Board;

/// 盤面の要約（一辺と、配置順のクイーン座標）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub size: usize,
    pub queens: Vec<Coord>,
}

impl BoardSnapshot {
    /// 現在の盤面から要約を作る
    pub fn from_board(board: &Board) -> BoardSnapshot {
        BoardSnapshot {
            size: board.size(),
            queens: board.queens().collect(),
        }
    }
}
