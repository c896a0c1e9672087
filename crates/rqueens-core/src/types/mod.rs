//! 基本型モジュール
//!
//! - `SquareState`: マスの状態（空き/クイーン/利き）
//! - `Coord`: 盤面上の座標（行・列）

mod coord;
mod square;

pub use coord::Coord;
pub use square::SquareState;
