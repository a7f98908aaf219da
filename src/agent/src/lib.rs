pub mod client;
pub mod config;
pub mod pattern_table;
pub mod predictor;
pub mod strategy;
