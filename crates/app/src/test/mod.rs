//! Shared fixtures for service-level tests.

mod context;
mod db;

pub(crate) use context::TestContext;
pub(crate) use db::TestDb;
