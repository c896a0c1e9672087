//! search モジュールのテスト

mod count;
