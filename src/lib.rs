pub mod analyzers;
pub mod cli;
pub mod config;
pub mod logging;
pub mod opensea;
pub mod profiles;
