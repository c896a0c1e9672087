//! エラー型
//!
//! 盤外指定と巻き戻し過多は呼び出し側の論理エラーとして即座に返す。
//! 「置こうとしたマスが空きでない」は探索中の通常の結果であり、
//! エラーではなく `place_queen` の `Ok(false)` で表す。

/// 盤面操作のエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// 盤面サイズが不正（1以上が必要）
    #[error("board size must be a positive integer, got {0}")]
    InvalidSize(usize),

    /// 盤上に存在しない座標を指定した
    #[error("board position ({row}, {col}) does not exist on a {size}x{size} board")]
    OutOfRange { row: usize, col: usize, size: usize },

    /// 除去すべきクイーンが存在しない
    #[error("no queen to remove")]
    NoQueenToRemove,
}

/// 盤面操作のResult型
pub type BoardResult<T> = Result<T, BoardError>;
