//! Configuration, loaded from environment variables with development
//! fallbacks.
//!
//! - [`jwt`]: signing secrets and token lifetimes
//! - [`cors`]: allowed browser origins
//! - [`store`]: credential store backend selection
//! - [`database`]: PostgreSQL pool initialization

pub mod cors;
pub mod database;
pub mod jwt;
pub mod store;
