//! 盤面モジュール
//!
//! Nクイーン問題の盤面を表現し、クイーンの配置・除去を差分更新で行う。
//!
//! - `Board`: 盤面本体（マス状態のフラット配列・配置履歴）
//! - `Placement`: 配置レコード（クイーンの座標と、その配置で新たに利きに
//!   なったマスの集合）
//! - `place_queen` / `remove_queen`: 配置と巻き戻し（履歴をスタックとして管理）
//!
//! 盤面配列と配置履歴は `Board` のメソッドを通じてのみ更新されることを
//! 前提とし、常に互いに整合しているように保つ。公開操作の後には次が成り立つ:
//!
//! - 履歴のレコード数 == 盤上のクイーン数
//! - 各レコードのクイーン座標のマスは `Queen`
//! - `Scoped` の各マスは、盤上のちょうど1つのレコードの `claimed` に属する

mod place;
mod render;
mod snapshot;

pub use snapshot::BoardSnapshot;

use crate::error::{BoardError, BoardResult};
use crate::types::{Coord, SquareState};

/// 1手分の配置レコード
///
/// `claimed` は、このクイーンの配置時点で空きだったために `Scoped` へ
/// 遷移させたマスの集合。既に利きが付いていたマスは含まれない（所有権は
/// 最初に利きを付けたクイーンにある）。クイーン自身のマスも含まれない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Placement {
    pub(crate) queen: Coord,
    pub(crate) claimed: Vec<Coord>,
}

/// Nクイーン問題の盤面
///
/// 常に size × size の正方形。構築後に size は変わらない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// 盤面の一辺（1以上）
    size: usize,
    /// 各マスの状態（行優先のフラット配列、長さ size * size）
    grid: Vec<SquareState>,
    /// 配置履歴（後入れ先出し。要素数 == 盤上のクイーン数）
    history: Vec<Placement>,
}

impl Board {
    /// 全マス空きの盤面を生成する
    ///
    /// `size == 0` は `BoardError::InvalidSize`。
    pub fn new(size: usize) -> BoardResult<Board> {
        if size == 0 {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Board {
            size,
            grid: vec![SquareState::Empty; size * size],
            history: Vec::new(),
        })
    }

    /// 盤面の一辺
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// 盤上のクイーン数
    #[inline]
    pub fn num_queens(&self) -> usize {
        self.history.len()
    }

    /// 指定座標のマス状態（盤外なら `None`）
    #[inline]
    pub fn square(&self, coord: Coord) -> Option<SquareState> {
        coord.is_ok(self.size).then(|| self.grid[self.flat_index(coord)])
    }

    /// 指定の行・列のマス状態（盤外なら `None`）
    #[inline]
    pub fn square_at(&self, row: usize, col: usize) -> Option<SquareState> {
        self.square(Coord::new(row, col))
    }

    /// 指定座標のマス状態（呼び出し側が盤内であることを保証する）
    #[inline]
    pub(crate) fn square_unchecked(&self, coord: Coord) -> SquareState {
        debug_assert!(coord.is_ok(self.size));
        self.grid[self.flat_index(coord)]
    }

    /// 配置順のクイーン座標
    pub fn queens(&self) -> impl Iterator<Item = Coord> + '_ {
        self.history.iter().map(|placement| placement.queen)
    }

    /// 全マスを空きに戻し、配置履歴を破棄する。size は変わらない。
    pub fn clear(&mut self) {
        self.grid.fill(SquareState::Empty);
        self.history.clear();
    }

    #[inline]
    fn flat_index(&self, coord: Coord) -> usize {
        coord.row() * self.size + coord.col()
    }

    #[inline]
    fn set(&mut self, coord: Coord, state: SquareState) {
        let index = self.flat_index(coord);
        self.grid[index] = state;
    }
}
