pub mod analyzers;
pub mod chart;
pub mod config;
pub mod output;
pub mod parser;
pub mod record;
pub mod session;
pub mod stats;
