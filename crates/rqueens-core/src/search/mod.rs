//! 探索モジュール
//!
//! 盤面に対する2つの再帰バックトラック探索を提供する。
//!
//! - `fill_with_n_queens`: 最初に見つかった解で盤面を埋める（深さ優先・巻き戻し付き）
//! - `count_solutions`: 行0から順に埋める方式で全解数を数え上げる
//!
//! どちらも配置と巻き戻しを必ず対にして呼ぶため、失敗時・数え上げ終了時の
//! 盤面は呼び出し前の状態に戻っている。

mod count;
mod solver;

#[cfg(test)]
mod tests;

pub use count::count_solutions;
pub use solver::fill_with_n_queens;
