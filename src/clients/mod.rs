pub mod gemini;
pub mod mock;

pub use gemini::{GeminiClient, GeminiConfig};
pub use mock::{MockClient, MockHandle, MockResponse};

use crate::error::GenerationError;
use async_trait::async_trait;
use std::fmt::Debug;

/// Low-level text-generation client abstraction.
///
/// Implementors provide `ask_raw`, which executes a prompt and returns the
/// raw model text. Prompt construction and response validation live above
/// this seam, so a provider adapter stays a thin HTTP mapping.
#[async_trait]
pub trait GenerativeClient: Send + Sync + Debug {
    /// The only method that implementations must provide
    async fn ask_raw(&self, prompt: String) -> Result<String, GenerationError>;

    /// Clone this client into a boxed trait object
    fn clone_box(&self) -> Box<dyn GenerativeClient>;
}

impl Clone for Box<dyn GenerativeClient> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[async_trait]
impl GenerativeClient for Box<dyn GenerativeClient> {
    async fn ask_raw(&self, prompt: String) -> Result<String, GenerationError> {
        self.as_ref().ask_raw(prompt).await
    }

    fn clone_box(&self) -> Box<dyn GenerativeClient> {
        self.as_ref().clone_box()
    }
}
