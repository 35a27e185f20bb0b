//! Infrastructure services

mod request_service;

pub use request_service::RequestService;
