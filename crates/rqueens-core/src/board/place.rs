//! クイーンの配置と除去
//!
//! 配置時は行・列・斜め4方向を走査し、その時点で空きだったマスだけを
//! `Scoped` へ遷移させて配置レコードに記録する。除去時はレコードに記録した
//! マスだけを空きに戻すため、先に置かれたクイーンの利きを壊さない。

use crate::error::{BoardError, BoardResult};
use crate::types::{Coord, SquareState};

use super::{Board, Placement};

/// 斜め4方向のオフセット（行・列）
const DIAGONALS: [(isize, isize); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

impl Board {
    /// (row, col) へのクイーンの配置を試みる
    ///
    /// - 盤外の座標は `BoardError::OutOfRange`（呼び出し側の論理エラー）
    /// - 配置先が空きでない場合は何も変更せず `Ok(false)`（探索中の通常の棄却）
    /// - 成功時は利きの差分を記録して `Ok(true)`
    pub fn place_queen(&mut self, row: usize, col: usize) -> BoardResult<bool> {
        let queen = Coord::new(row, col);
        if !queen.is_ok(self.size) {
            return Err(BoardError::OutOfRange { row, col, size: self.size });
        }
        if self.square_unchecked(queen) != SquareState::Empty {
            return Ok(false);
        }
        self.occupy(queen);
        Ok(true)
    }

    /// 最後に配置したクイーンを除去する
    ///
    /// 履歴が空の場合は `BoardError::NoQueenToRemove`。
    pub fn remove_queen(&mut self) -> BoardResult<()> {
        if self.history.is_empty() {
            return Err(BoardError::NoQueenToRemove);
        }
        self.undo_last();
        Ok(())
    }

    /// 検証済みの空きマスにクイーンを置き、利きの差分を記録する
    ///
    /// 前提: `queen` は盤内かつ `Empty`。探索側は候補を空きマスから
    /// 選ぶため、公開APIの検証を繰り返さずにこちらを呼ぶ。
    pub(crate) fn occupy(&mut self, queen: Coord) {
        debug_assert!(queen.is_ok(self.size));
        debug_assert_eq!(self.square_unchecked(queen), SquareState::Empty);

        let mut claimed = Vec::new();

        // 行と列。クイーン自身のマスはこの走査の対象外（最後に Queen で
        // 上書きし、claimed には入れない）。
        for index in 0..self.size {
            let horizontal = Coord::new(queen.row(), index);
            if horizontal != queen && self.square_unchecked(horizontal) == SquareState::Empty {
                self.claim(horizontal, &mut claimed);
            }
            let vertical = Coord::new(index, queen.col());
            if vertical != queen && self.square_unchecked(vertical) == SquareState::Empty {
                self.claim(vertical, &mut claimed);
            }
        }

        // 斜め4方向（原点を除き、盤端まで）
        for (drow, dcol) in DIAGONALS {
            let mut current = queen;
            while let Some(next) = current.offset(drow, dcol, self.size) {
                if self.square_unchecked(next) == SquareState::Empty {
                    self.claim(next, &mut claimed);
                }
                current = next;
            }
        }

        self.set(queen, SquareState::Queen);
        self.history.push(Placement { queen, claimed });
    }

    /// 直前の配置を巻き戻す
    ///
    /// このクイーンが `Scoped` へ遷移させたマスと、クイーン自身のマスを
    /// 空きに戻す。クイーン自身のマスは `claimed` に含まれないため、
    /// ここで明示的に戻す。前提: 履歴が空でない。
    pub(crate) fn undo_last(&mut self) {
        let Some(last) = self.history.pop() else {
            debug_assert!(false, "undo_last on an empty history");
            return;
        };
        for coord in &last.claimed {
            self.set(*coord, SquareState::Empty);
        }
        self.set(last.queen, SquareState::Empty);
    }

    #[inline]
    fn claim(&mut self, coord: Coord, claimed: &mut Vec<Coord>) {
        self.set(coord, SquareState::Scoped);
        claimed.push(coord);
    }
}
