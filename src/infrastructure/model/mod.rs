//! Model infrastructure - Artifact format, file loading and load policies

mod artifact;
mod loader;
mod source;

pub use artifact::{
    Aggregation, Estimator, LinearRegressor, ModelArtifact, RegressionTree, TreeEnsemble, TreeNode,
};
pub use loader::FileModelLoader;
pub use source::{create_model_source, CachedModelSource, PerCallModelSource};
