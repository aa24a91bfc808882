//! Integration tests for struct-rules.

mod common;
mod config;
mod order;
mod scenarios;
