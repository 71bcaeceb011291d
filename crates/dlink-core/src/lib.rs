pub mod config;
pub mod logging;

pub mod browser;
pub mod extractor;
pub mod media_info;
pub mod prompt;
pub mod session;
