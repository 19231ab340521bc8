//! Friendnet - a small social network graph store.
//!
//! Users are nodes, friendships are undirected edges held in a dense
//! adjacency matrix, and the usual graph questions (traversal, shortest
//! path, components, density, clustering) are answered directly on that
//! matrix. The crate provides both the library and a line-oriented CLI.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod config;
pub mod domain;
pub mod error;
pub mod graph;
pub mod store;

// Public CLI module (needed by binary)
pub mod app;
pub mod cli;
pub mod output;
