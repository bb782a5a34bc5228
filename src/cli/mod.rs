//! CLI infrastructure for the reply-table generator
//!
//! This module provides the command-line interface for generating,
//! summarizing and inspecting the precomputed Circle replies.

pub mod commands;
pub mod config;
pub mod output;
