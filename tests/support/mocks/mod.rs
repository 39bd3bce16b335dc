// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod time;

pub use security::{
    EXPIRED_TOKEN, FailingVerifyHasher, OTHER_TOKEN, StaticTokenManager, StrictPasswordHasher,
    TEST_TOKEN,
};
pub use time::{MutableClock, fixed_now};
