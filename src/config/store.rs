use std::env;

/// Which [`crate::store::UserStore`] implementation to run against.
///
/// Selected once at startup via `USER_STORE`; there is no runtime fallback
/// from one backend to the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub backend: StoreBackend,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        let backend = match env::var("USER_STORE").as_deref() {
            Ok("memory") => StoreBackend::Memory,
            _ => StoreBackend::Postgres,
        };

        Self { backend }
    }
}
