//! rqueens-core: Nクイーン問題の求解エンジン
//!
//! 盤面（`Board`）は各マスの状態（空き/クイーン/利き）をフラット配列で保持し、
//! クイーンの配置・除去を差分更新で行う。配置時に「この配置で新たに利きに
//! なったマス」の所有権を配置レコードに記録するため、除去時は利きを全体から
//! 再計算せず、そのレコードが主張したマスだけを空きに戻せる。
//!
//! - `types`: マス状態（`SquareState`）と座標（`Coord`）
//! - `board`: 盤面本体と配置・除去・描画・スナップショット
//! - `search`: 最初の解を求めるバックトラック探索と全解数の数え上げ
//! - `error`: エラー型（`BoardError`）

pub mod board;
pub mod error;
pub mod search;
pub mod types;

pub use board::{Board, BoardSnapshot};
pub use error::{BoardError, BoardResult};
pub use search::{count_solutions, fill_with_n_queens};
pub use types::{Coord, SquareState};
