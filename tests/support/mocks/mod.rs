// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod content_repos;
pub mod content_type_repo;
pub mod time;

// 時刻関連
pub use time::{DummyClock, fixed_now};

// コンテンツリポジトリ
pub use content_repos::InMemoryContentRepo;

// コンテンツタイプリポジトリ
pub use content_type_repo::InMemoryContentTypeRepo;
