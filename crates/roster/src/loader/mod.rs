//! Directory loading.
//!
//! A [`DirectorySource`] produces the raw API payload; the
//! [`DirectoryLoader`] turns it into a [`Directory`]. The loader performs a
//! single fetch per call, with no retry and no partial results: a transport,
//! status or parse failure is returned to the caller as-is.

mod http;
mod raw;

pub use http::HttpSource;
pub(crate) use raw::check_birthday_format;
pub use raw::{
    RawDob, RawInfo, RawLocation, RawName, RawPerson, RawPicture, RawResponse, RawStreet, Scalar,
};

use tracing::{debug, info};

use crate::config::Config;
use crate::directory::Directory;
use crate::error::Result;

/// Something that can serve one batch of raw person records.
#[async_trait::async_trait]
pub trait DirectorySource: Send + Sync {
    /// The name of this source (for logging).
    fn name(&self) -> &'static str;

    /// Fetch one batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch cannot be retrieved or decoded.
    async fn fetch_batch(&self) -> Result<RawResponse>;
}

/// Loads a [`Directory`] from a [`DirectorySource`].
#[derive(Debug)]
pub struct DirectoryLoader<S> {
    source: S,
    birthday_format: String,
}

impl<S: DirectorySource> DirectoryLoader<S> {
    /// Create a loader over `source`, rendering birthdays with
    /// `birthday_format`.
    #[must_use]
    pub fn new(source: S, birthday_format: impl Into<String>) -> Self {
        Self {
            source,
            birthday_format: birthday_format.into(),
        }
    }

    /// Get the underlying source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch a batch and build a fresh directory from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails or any record cannot be mapped.
    pub async fn load(&self) -> Result<Directory> {
        debug!(source = self.source.name(), "Fetching directory batch");
        let response = self.source.fetch_batch().await?;
        if let Some(seed) = response.info.as_ref().and_then(|i| i.seed.as_deref()) {
            debug!(seed, "Batch seed");
        }

        let directory = Directory::from_response(response, &self.birthday_format)?;
        info!(
            source = self.source.name(),
            records = directory.len(),
            "Directory loaded"
        );
        Ok(directory)
    }
}

impl DirectoryLoader<HttpSource> {
    /// Create an HTTP loader from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = HttpSource::from_config(config)?;
        Ok(Self::new(source, config.display.birthday_format.clone()))
    }
}
