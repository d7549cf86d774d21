pub mod catalog;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod filter;
pub mod generator;
pub mod models;
pub mod output;
pub mod state;
pub mod summary;
