//! Payment Handlers

pub(crate) mod banks;
pub(crate) mod config;
pub(crate) mod initialize;
pub(crate) mod refund;
pub(crate) mod transactions;
pub(crate) mod verify;
pub(crate) mod webhook;
