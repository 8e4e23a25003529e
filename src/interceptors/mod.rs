use async_trait::async_trait;
use std::fmt::Debug;

/// Observer for AI exchanges: receives each prompt/response pair after a
/// successful provider call. Failures are logged and never interrupt the
/// quiz flow.
#[async_trait]
pub trait Interceptor: Send + Sync + Debug {
    async fn save(&self, prompt: &str, response: &str) -> Result<(), Box<dyn std::error::Error>>;
}

pub mod file;
pub use file::FileInterceptor;
