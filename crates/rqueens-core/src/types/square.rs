//! マス状態（SquareState）

use serde::{Deserialize, Serialize};

/// マスの状態
///
/// 各マスは「空き」「クイーンが置かれている」「いずれかのクイーンの利きに
/// 入っている」の3状態のいずれかを取る。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SquareState {
    Empty = 0,
    Queen = 1,
    Scoped = 2,
}

impl SquareState {
    /// 状態の数
    pub const NUM: usize = 3;

    /// 表示用の1文字（空き=' '、クイーン='Q'、利き='X'）
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            SquareState::Empty => ' ',
            SquareState::Queen => 'Q',
            SquareState::Scoped => 'X',
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for SquareState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_state_glyph() {
        assert_eq!(SquareState::Empty.glyph(), ' ');
        assert_eq!(SquareState::Queen.glyph(), 'Q');
        assert_eq!(SquareState::Scoped.glyph(), 'X');
    }

    #[test]
    fn test_square_state_display() {
        assert_eq!(SquareState::Queen.to_string(), "Q");
    }

    #[test]
    fn test_square_state_index() {
        assert_eq!(SquareState::Empty.index(), 0);
        assert_eq!(SquareState::Queen.index(), 1);
        assert_eq!(SquareState::Scoped.index(), 2);
        assert!(SquareState::Scoped.index() < SquareState::NUM);
    }
}
