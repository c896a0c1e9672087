//! 盤面の文字列表現

use std::fmt;

use crate::types::Coord;

use super::Board;

impl fmt::Display for Board {
    /// 1行を `[ ][Q][X]` の連結として、size 行を改行区切りで出力する
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size() {
            for col in 0..self.size() {
                let state = self.square_unchecked(Coord::new(row, col));
                write!(f, "[{}]", state.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
