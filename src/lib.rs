pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod notify;
pub mod pipeline;
pub mod report;
pub mod scraping;
pub mod storage;
pub mod utilities;
