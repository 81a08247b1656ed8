//! Request middleware and extractors.
//!
//! - [`auth`]: the `AuthUser` extractor that authenticates a request
//! - [`role`]: authorization gates over the authenticated identity
//!
//! Flow: `Authorization: Bearer <token>` header → token verification →
//! identity existence check → [`auth::CurrentUser`] for the handler, which
//! then applies whichever [`role`] gate the route requires.

pub mod auth;
pub mod role;
