//! 座標（Coord）

use serde::{Deserialize, Serialize};

/// 盤面上の座標（行・列）
///
/// 値として比較・ハッシュ可能な不変のペア。`offset` は盤外に出る場合
/// `None` を返すため、斜めの利きの走査は盤端で自然に停止する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// 行と列からCoordを生成
    #[inline]
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// 行を取得
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// 列を取得
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    /// `size` x `size` の盤に収まるかどうか
    #[inline]
    pub const fn is_ok(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// 方向オフセットを足した座標を返す（盤外なら `None`）
    ///
    /// 負方向のアンダーフローも `size` 以上へのオーバーランも盤外扱い。
    #[inline]
    pub fn offset(self, drow: isize, dcol: isize, size: usize) -> Option<Coord> {
        let row = self.row.checked_add_signed(drow)?;
        let col = self.col.checked_add_signed(dcol)?;
        let next = Coord { row, col };
        next.is_ok(size).then_some(next)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
