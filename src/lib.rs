pub mod config;
pub mod core;
pub mod logging;
pub mod notify;
pub mod pipeline;
pub mod sink;
pub mod source;

pub use crate::config::Config;
pub use crate::core::*;
pub use crate::pipeline::Pipeline;
