//! Reads model artifacts from disk

use std::path::{Path, PathBuf};

use tracing::debug;

use super::ModelArtifact;
use crate::domain::DomainError;

/// Loads a [`ModelArtifact`] from a fixed file path
#[derive(Debug, Clone)]
pub struct FileModelLoader {
    path: PathBuf,
}

impl FileModelLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read, parse and validate the artifact; every failure is a `ModelLoad` error
    pub async fn load(&self) -> Result<ModelArtifact, DomainError> {
        let location = self.path.display().to_string();

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| DomainError::model_load(&location, e.to_string()))?;

        let artifact: ModelArtifact = serde_json::from_slice(&bytes)
            .map_err(|e| DomainError::model_load(&location, format!("corrupt artifact: {}", e)))?;

        artifact
            .validate()
            .map_err(|msg| DomainError::model_load(&location, format!("invalid artifact: {}", msg)))?;

        debug!(
            path = %location,
            kind = artifact.kind(),
            n_features = artifact.n_features,
            "Model artifact loaded"
        );

        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_artifact(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("model.json");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_valid_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let mut artifact = ModelArtifact::linear(vec![0.1; 10], 12.0);
        artifact.name = Some("test".to_string());
        let path = write_artifact(&dir, &serde_json::to_string(&artifact).unwrap());

        let loaded = FileModelLoader::new(&path).load().await.unwrap();

        assert_eq!(loaded.name.as_deref(), Some("test"));
        assert_eq!(loaded.n_features, 10);
    }

    #[tokio::test]
    async fn test_missing_file_is_model_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = FileModelLoader::new(&path).load().await.unwrap_err();

        match err {
            DomainError::ModelLoad { path: p, .. } => assert!(p.ends_with("absent.json")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_corrupt_file_is_model_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(&dir, "\u{80}\u{3}pickle-bytes");

        let err = FileModelLoader::new(&path).load().await.unwrap_err();

        assert!(matches!(err, DomainError::ModelLoad { .. }));
        assert!(err.to_string().contains("corrupt artifact"));
    }

    #[tokio::test]
    async fn test_structurally_invalid_artifact_is_model_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(
            &dir,
            r#"{ "type": "linear", "n_features": 10, "coefficients": [1.0], "intercept": 0.0 }"#,
        );

        let err = FileModelLoader::new(&path).load().await.unwrap_err();

        assert!(err.to_string().contains("invalid artifact"));
    }

    #[tokio::test]
    async fn test_bundled_artifact_prices_reference_flat() {
        use crate::domain::{build_feature_vector, predict_price, EncodedCategories, ResaleFlatInput};

        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("models/resale_flat_prices.json");
        let artifact = FileModelLoader::new(path).load().await.unwrap();

        let input = ResaleFlatInput::new("ANG MO KIO", "4 ROOM", "Model A")
            .with_year(2020.0)
            .with_floor_area(90.0)
            .with_storey_range(5.0, 8.0)
            .with_remaining_lease(70.0, 3.0)
            .with_lease_commence_year(1995.0);
        let codes = EncodedCategories::encode("ANG MO KIO", "4 ROOM", "Model A").unwrap();
        let features = build_feature_vector(&input, &codes).unwrap();

        let price = predict_price(&artifact, &features).unwrap();

        assert!((100_000..2_000_000).contains(&price.amount()));
    }
}
