use std::env;

/// Signing configuration for the two token classes.
///
/// The access and refresh secrets must stay independent: a shared secret
/// would let a refresh token pass access verification. The fallback values
/// exist so the service starts in development; production deployments must
/// always override both.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    /// Access token lifetime in seconds. The 7-day default is carried over
    /// from the original deployment and is unusually long for an access
    /// token; shorten it via `JWT_ACCESS_EXPIRY` if that is not intended.
    pub access_token_expiry: i64,
    /// Refresh token lifetime in seconds.
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            access_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-super-secret-key".to_string()),
            refresh_secret: env::var("JWT_REFRESH_SECRET")
                .unwrap_or_else(|_| "your-super-secret-refresh-key".to_string()),
            access_token_expiry: expiry_seconds(env::var("JWT_ACCESS_EXPIRY").ok(), 604_800), // 7 days
            refresh_token_expiry: expiry_seconds(env::var("JWT_REFRESH_EXPIRY").ok(), 2_592_000), // 30 days
        }
    }
}

/// Parses a lifetime override in seconds. Unparsable or negative values fall
/// back to the default; a negative lifetime would otherwise wrap into a
/// far-future `exp` when the claims are built.
fn expiry_seconds(raw: Option<String>, default: i64) -> i64 {
    raw.and_then(|s| s.parse().ok())
        .filter(|&secs| secs >= 0)
        .unwrap_or(default)
}
