//! Core library for the `leitner-stress` CLI.
//!
//! The binary drives four fixed request scenarios against the Leitner trainer
//! backend: word updates, word fetches, leaderboard bursts and dashboard
//! bursts. This crate holds the pieces it is built from: CLI and config
//! handling, the user/endpoint catalog, the bounded load driver, and the
//! output sink.
pub mod args;
pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod scenario;
pub mod shutdown;
pub mod sink;

#[cfg(test)]
pub(crate) mod test_support;
