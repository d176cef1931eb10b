pub mod configuration;
pub mod domain;
pub mod newsletter_service;
pub mod repository;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod templating;

pub use routes::{build_error_response, error_chain_fmt};
