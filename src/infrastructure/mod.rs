//! Infrastructure layer - Model loading, services and observability

pub mod logging;
pub mod model;
pub mod observability;
pub mod services;
