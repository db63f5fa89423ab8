pub mod config;
pub mod log;
pub mod reconcile;
pub mod suggest;
