#![forbid(unsafe_code)]

pub mod config;
pub mod datamodel;
pub mod http;
pub mod poller;
pub mod reader;
pub mod render;
pub mod storage;
