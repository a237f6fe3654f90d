use anyhow::{anyhow, Context, Result};
use std::future::Future;
use std::sync::Arc;
use tracing::trace;

/// Loads an image without displaying it. Resolves once the image could be shown.
pub trait ImageLoader: Send + Sync + 'static {
    fn load(&self, url: &str) -> impl Future<Output = Result<()>> + Send;
}

impl<L: ImageLoader> ImageLoader for Arc<L> {
    fn load(&self, url: &str) -> impl Future<Output = Result<()>> + Send {
        (**self).load(url)
    }
}

/// Preloads over HTTP; anything that is not a 2xx `image/*` response is a failure.
#[derive(Clone)]
pub struct HttpImageLoader {
    client: reqwest::Client,
}

impl HttpImageLoader {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl ImageLoader for HttpImageLoader {
    fn load(&self, url: &str) -> impl Future<Output = Result<()>> + Send {
        let request = self.client.get(url);
        let url = url.to_string();
        async move {
            let response = request
                .send()
                .await
                .with_context(|| format!("requesting {url}"))?
                .error_for_status()?;

            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            if !content_type.starts_with("image/") {
                return Err(anyhow!("{url} is not an image ({content_type:?})"));
            }

            let bytes = response.bytes().await?;
            trace!("Preloaded {} ({} bytes)", url, bytes.len());
            Ok(())
        }
    }
}
