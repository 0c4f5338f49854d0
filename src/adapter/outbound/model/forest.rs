//! Tree-ensemble regression artifact.
//!
//! Each tree is a flat node array with the root at index 0. A split sends
//! `x[feature] <= threshold` to `left`, everything else to `right`. Child
//! indices must point forward, so evaluation always terminates.

use serde::Deserialize;

use super::check_features;
use crate::domain::schema::FeatureVector;
use crate::error::{ModelError, Result};
use crate::port::outbound::model::Regressor;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Split {
    pub feature: usize,
    pub threshold: f64,
    pub left: usize,
    pub right: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    Split(Split),
    Leaf(f64),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    fn validate(&self, index: usize, width: usize) -> Result<()> {
        let invalid = |reason: String| ModelError::Invalid(format!("tree {index}: {reason}"));
        if self.nodes.is_empty() {
            return Err(invalid("no nodes".into()).into());
        }
        for (id, node) in self.nodes.iter().enumerate() {
            match *node {
                Node::Split(split) => {
                    if split.feature >= width {
                        return Err(invalid(format!(
                            "node {id} splits on feature {} of {width}",
                            split.feature
                        ))
                        .into());
                    }
                    for child in [split.left, split.right] {
                        if child <= id || child >= self.nodes.len() {
                            return Err(invalid(format!("node {id} has bad child {child}")).into());
                        }
                    }
                }
                Node::Leaf(value) if !value.is_finite() => {
                    return Err(invalid(format!("node {id} has non-finite leaf")).into());
                }
                Node::Leaf(_) => {}
            }
        }
        Ok(())
    }

    fn evaluate(&self, x: &[f64]) -> f64 {
        let mut id = 0;
        loop {
            match self.nodes[id] {
                Node::Leaf(value) => return value,
                Node::Split(split) => {
                    id = if x[split.feature] <= split.threshold {
                        split.left
                    } else {
                        split.right
                    };
                }
            }
        }
    }
}

/// Mean of an ensemble of regression trees.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForestModel {
    pub features: Vec<String>,
    pub trees: Vec<Tree>,
}

impl ForestModel {
    pub(super) fn validate(&self) -> Result<()> {
        if self.trees.is_empty() {
            return Err(ModelError::Invalid("forest has no trees".into()).into());
        }
        self.trees
            .iter()
            .enumerate()
            .try_for_each(|(index, tree)| tree.validate(index, self.features.len()))
    }
}

impl Regressor for ForestModel {
    fn name(&self) -> &'static str {
        "forest"
    }

    fn feature_names(&self) -> Option<&[String]> {
        Some(&self.features)
    }

    fn predict(&self, features: &FeatureVector<'_>) -> Result<f64> {
        check_features(&self.features, features)?;
        let x = features.values();
        let total: f64 = self.trees.iter().map(|tree| tree.evaluate(x)).sum();
        Ok(total / self.trees.len() as f64)
    }
}
