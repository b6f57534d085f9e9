//! Serialized regression model artifact
//!
//! The artifact is a JSON document holding plain numerical parameters. Two
//! estimator families are supported:
//!
//! ```json
//! { "type": "linear", "n_features": 10, "coefficients": [...], "intercept": 11.2 }
//! ```
//!
//! ```json
//! {
//!   "type": "tree_ensemble", "n_features": 10, "aggregation": "mean", "base_score": 0.0,
//!   "trees": [ { "nodes": [
//!     { "kind": "split", "feature": 3, "threshold": 85.5, "left": 1, "right": 2 },
//!     { "kind": "leaf", "value": 12.9 },
//!     { "kind": "leaf", "value": 13.2 }
//!   ] } ]
//! }
//! ```
//!
//! Split nodes send a sample left when `x[feature] <= threshold`.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, RegressionModel};

/// A complete model artifact: metadata plus one estimator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Number of input features the estimator was trained on
    pub n_features: usize,

    #[serde(flatten)]
    pub estimator: Estimator,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Estimator {
    Linear(LinearRegressor),
    TreeEnsemble(TreeEnsemble),
}

/// `y = w . x + b`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegressor {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// How per-tree outputs are combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    /// Random-forest style average
    #[default]
    Mean,
    /// Boosting style sum
    Sum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEnsemble {
    #[serde(default)]
    pub aggregation: Aggregation,
    #[serde(default)]
    pub base_score: f64,
    pub trees: Vec<RegressionTree>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

impl ModelArtifact {
    pub fn linear(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            name: None,
            n_features: coefficients.len(),
            estimator: Estimator::Linear(LinearRegressor {
                coefficients,
                intercept,
            }),
        }
    }

    /// Structural checks run once after deserialization
    pub fn validate(&self) -> Result<(), String> {
        if self.n_features == 0 {
            return Err("n_features must be greater than 0".to_string());
        }

        match &self.estimator {
            Estimator::Linear(linear) => linear.validate(self.n_features),
            Estimator::TreeEnsemble(ensemble) => ensemble.validate(self.n_features),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self.estimator {
            Estimator::Linear(_) => "linear",
            Estimator::TreeEnsemble(_) => "tree_ensemble",
        }
    }
}

impl LinearRegressor {
    fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.coefficients.len() != n_features {
            return Err(format!(
                "linear model has {} coefficients but declares {} features",
                self.coefficients.len(),
                n_features
            ));
        }

        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("linear model parameters must be finite".to_string());
        }

        Ok(())
    }

    fn predict(&self, features: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}

impl TreeEnsemble {
    fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("tree ensemble has no trees".to_string());
        }

        if !self.base_score.is_finite() {
            return Err("base_score must be finite".to_string());
        }

        for (idx, tree) in self.trees.iter().enumerate() {
            tree.validate(n_features)
                .map_err(|msg| format!("tree {}: {}", idx, msg))?;
        }

        Ok(())
    }

    fn predict(&self, features: &[f64]) -> Result<f64, DomainError> {
        let mut total = 0.0;
        for (idx, tree) in self.trees.iter().enumerate() {
            total += tree
                .predict(features)
                .map_err(|msg| DomainError::inference(format!("tree {}: {}", idx, msg)))?;
        }

        let combined = match self.aggregation {
            Aggregation::Mean => total / self.trees.len() as f64,
            Aggregation::Sum => total,
        };

        Ok(self.base_score + combined)
    }
}

impl RegressionTree {
    /// Children must come after their parent, which rules out cycles
    fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }

        for (idx, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= n_features {
                        return Err(format!(
                            "node {} splits on feature {} (only {} features)",
                            idx, feature, n_features
                        ));
                    }
                    if threshold.is_nan() {
                        return Err(format!("node {} has a NaN threshold", idx));
                    }
                    for child in [left, right] {
                        if child <= idx || child >= self.nodes.len() {
                            return Err(format!(
                                "node {} has invalid child index {}",
                                idx, child
                            ));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(format!("leaf {} has a non-finite value", idx));
                    }
                }
            }
        }

        Ok(())
    }

    /// Walks from the root to a leaf. Every step must move to a later node, so
    /// a malformed tree ends in an error instead of a panic or an endless loop.
    fn predict(&self, features: &[f64]) -> Result<f64, String> {
        let mut idx = 0;

        loop {
            let node = self
                .nodes
                .get(idx)
                .ok_or_else(|| format!("node {} does not exist", idx))?;

            match *node {
                TreeNode::Leaf { value } => return Ok(value),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let x = features.get(feature).ok_or_else(|| {
                        format!("node {} splits on missing feature {}", idx, feature)
                    })?;
                    let next = if *x <= threshold { left } else { right };

                    if next <= idx {
                        return Err(format!("node {} points back to node {}", idx, next));
                    }
                    idx = next;
                }
            }
        }
    }
}

impl RegressionModel for ModelArtifact {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[f64]) -> Result<f64, DomainError> {
        if features.len() != self.n_features {
            return Err(DomainError::inference(format!(
                "expected {} features, got {}",
                self.n_features,
                features.len()
            )));
        }

        let output = match &self.estimator {
            Estimator::Linear(linear) => linear.predict(features),
            Estimator::TreeEnsemble(ensemble) => ensemble.predict(features)?,
        };

        if !output.is_finite() {
            return Err(DomainError::inference(format!(
                "model produced a non-finite output: {}",
                output
            )));
        }

        Ok(output)
    }
}
