//! Model source implementations
//!
//! `PerCallModelSource` re-reads the artifact on every prediction.
//! `CachedModelSource` loads it lazily on first use and shares the immutable
//! handle afterwards; a failed load is not cached.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use super::FileModelLoader;
use crate::config::{LoadPolicy, ModelConfig};
use crate::domain::{DomainError, ModelSource, RegressionModel};
use crate::infrastructure::observability::record_model_load;

async fn load_recorded(loader: &FileModelLoader) -> Result<Arc<dyn RegressionModel>, DomainError> {
    match loader.load().await {
        Ok(artifact) => {
            record_model_load(true);
            Ok(Arc::new(artifact))
        }
        Err(e) => {
            record_model_load(false);
            warn!(path = %loader.path().display(), error = %e, "Model load failed");
            Err(e)
        }
    }
}

/// Reloads the artifact from disk for every call
#[derive(Debug)]
pub struct PerCallModelSource {
    loader: FileModelLoader,
}

impl PerCallModelSource {
    pub fn new(loader: FileModelLoader) -> Self {
        Self { loader }
    }
}

#[async_trait]
impl ModelSource for PerCallModelSource {
    async fn load(&self) -> Result<Arc<dyn RegressionModel>, DomainError> {
        load_recorded(&self.loader).await
    }

    fn location(&self) -> String {
        self.loader.path().display().to_string()
    }
}

/// Loads once, then hands out the same read-only model
#[derive(Debug)]
pub struct CachedModelSource {
    loader: FileModelLoader,
    model: OnceCell<Arc<dyn RegressionModel>>,
}

impl CachedModelSource {
    pub fn new(loader: FileModelLoader) -> Self {
        Self {
            loader,
            model: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.model.initialized()
    }
}

#[async_trait]
impl ModelSource for CachedModelSource {
    async fn load(&self) -> Result<Arc<dyn RegressionModel>, DomainError> {
        let model = self
            .model
            .get_or_try_init(|| async {
                let model = load_recorded(&self.loader).await?;
                info!(path = %self.loader.path().display(), "Model cached for reuse");
                Ok::<_, DomainError>(model)
            })
            .await?;

        Ok(Arc::clone(model))
    }

    fn location(&self) -> String {
        self.loader.path().display().to_string()
    }
}

/// Build the source selected by configuration
pub fn create_model_source(config: &ModelConfig) -> Arc<dyn ModelSource> {
    let loader = FileModelLoader::new(&config.path);

    match config.load_policy {
        LoadPolicy::Cached => Arc::new(CachedModelSource::new(loader)),
        LoadPolicy::PerCall => Arc::new(PerCallModelSource::new(loader)),
    }
}
