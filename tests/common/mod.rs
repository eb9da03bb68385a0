#![allow(dead_code)] // each integration test crate compiles its own copy

pub mod http;
pub mod store;
