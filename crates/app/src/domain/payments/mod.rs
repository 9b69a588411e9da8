//! Payments

pub mod errors;
pub mod models;
pub mod money;
pub mod paystack;
pub mod secret;
pub mod service;
pub mod signature;

pub use errors::PaymentsServiceError;
pub use service::*;
