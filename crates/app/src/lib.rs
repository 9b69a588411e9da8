//! Food ordering domain, persistence, and payment provider modules.

pub mod context;
pub mod database;
pub mod domain;
pub mod seed;
pub mod uuids;

#[cfg(test)]
mod test;
