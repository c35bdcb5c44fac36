pub mod config;
pub mod logging;

pub mod classifier;
pub mod extract;
pub mod fetch;
pub mod http;
pub mod player;
pub mod probe;
pub mod range;
pub mod retry;
pub mod scan;
