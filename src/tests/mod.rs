// Shared test utilities
pub mod common;

mod config;
mod contact;
mod motion;
mod theme;
