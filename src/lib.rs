//! # MindSpace API
//!
//! User-account and authentication backend for the MindSpace application:
//! registration, login, JWT access/refresh token issuance and rotation, and
//! role-gated profile access.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # Environment-backed configuration (JWT, CORS, store backend)
//! ├── middleware/       # AuthUser extractor and role/ownership gates
//! ├── modules/
//! │   ├── auth/        # register, login, refresh, external login
//! │   └── users/       # profile CRUD and role probes
//! ├── store/            # UserStore trait + Postgres and in-memory backends
//! └── utils/            # errors, JWT, password hashing, response envelope
//! ```
//!
//! Each feature module follows the same layout: `controller.rs` (HTTP
//! handlers), `service.rs` (business logic), `model.rs` (DTOs and entities),
//! `router.rs` (route wiring).
//!
//! ## Tokens
//!
//! Two token classes with independent signing secrets:
//!
//! - **Access token** (`JWT_ACCESS_EXPIRY`, default 7 days): authorizes
//!   requests via `Authorization: Bearer <token>`.
//! - **Refresh token** (`JWT_REFRESH_EXPIRY`, default 30 days): carries
//!   `type = "refresh"` and is only exchangeable for a new pair at
//!   `/api/users/refresh-token`, never usable as a bearer credential.
//!
//! There is no revocation list; a token stays valid until it expires.
//!
//! ## Roles
//!
//! `user`, `mentor`, `admin`. Gates: admin-only, mentor-or-admin, and
//! ownership-or-admin (a user may act on their own profile, an admin on any).

pub mod config;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod store;
pub mod utils;
pub mod validator;
