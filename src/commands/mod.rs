//! CLI commands

pub mod items;
pub mod review;
pub mod transfer;
