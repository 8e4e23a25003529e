use super::Interceptor;
use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use std::path::PathBuf;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Appends each AI exchange as one JSON line to a log file.
#[derive(Debug)]
pub struct FileInterceptor {
    path: PathBuf,
}

#[derive(Serialize)]
struct ExchangeRecord<'a> {
    at: String,
    prompt: &'a str,
    response: &'a str,
}

impl FileInterceptor {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl Interceptor for FileInterceptor {
    async fn save(&self, prompt: &str, response: &str) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let record = ExchangeRecord {
            at: Utc::now().to_rfc3339(),
            prompt,
            response,
        };
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}
