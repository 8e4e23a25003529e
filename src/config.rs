use std::env;

/// Trait for types that resolve their credential from environment variables.
pub trait KeyFromEnv {
    /// The environment variable name for this client's API key
    const KEY_NAME: &'static str;

    /// Find the API key by checking the environment, loading `.env` first.
    ///
    /// Returns `None` for absent or blank keys rather than prompting: a
    /// missing credential must fail fast to the fallback provider, never
    /// block the request path waiting for input.
    fn find_key() -> Option<String> {
        // First try to load .env file (silently fail if not found)
        let _ = dotenvy::dotenv();

        env::var(Self::KEY_NAME)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}
