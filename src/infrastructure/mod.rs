//! Infrastructure layer - providers, loaders, and services

pub mod logging;
pub mod secrets;
pub mod services;
pub mod source;
