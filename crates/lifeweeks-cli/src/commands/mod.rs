pub mod common;
pub mod config;
pub mod decades;
pub mod events;
pub mod grid;
