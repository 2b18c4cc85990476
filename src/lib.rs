pub mod cli;
pub mod core;
pub mod service;
pub mod session;
