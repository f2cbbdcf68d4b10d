pub mod api;
pub mod cli;
pub mod core;
pub mod defaults;
pub mod logging;
