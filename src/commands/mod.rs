//! Command implementations for the MovieLeague CLI

pub mod admin;
pub mod common;
pub mod grosses;
pub mod history;
pub mod views;


pub use common::CommandContext;
