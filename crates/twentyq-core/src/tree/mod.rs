pub mod codec;
pub mod config;
pub mod error;
pub mod node;
pub mod question_tree;
pub mod snapshot;
pub mod stats;
pub mod ui;

#[cfg(test)]
mod tests;
