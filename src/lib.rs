pub mod config;
pub mod export;
pub mod logging;
pub mod pipeline;
pub mod youtube;
