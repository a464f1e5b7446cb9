pub mod config;
pub mod gateway;
pub mod pipeline;
pub mod services;
pub mod sources;
