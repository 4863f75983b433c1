//! Terminal front end for the tendering assistant.

pub mod cli;
pub mod commands;
pub mod render;
