//! Dockerfile CLI - inspect parsed Dockerfile instructions.

pub mod commands;
pub mod output;
