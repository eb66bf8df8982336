//! Background knowledge as it appears in `fang.toml`.
//!
//! ```toml
//! [knowledge]
//! forbidden = [["Y", "X"]]
//! required = [["A", "B"]]
//! tiers = [["A"], ["B", "C"]]
//! ```

use serde::{Deserialize, Serialize};

use crate::knowledge::Knowledge;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Forbidden directed edges as `[from, to]`.
    pub forbidden: Vec<[String; 2]>,
    /// Required directed edges as `[from, to]`.
    pub required: Vec<[String; 2]>,
    /// Temporal tiers, earliest first.
    pub tiers: Vec<Vec<String>>,
}

impl KnowledgeConfig {
    pub fn is_empty(&self) -> bool {
        self.forbidden.is_empty() && self.required.is_empty() && self.tiers.is_empty()
    }

    pub fn to_knowledge(&self) -> Knowledge {
        let mut knowledge = Knowledge::new();
        for [from, to] in &self.forbidden {
            knowledge.forbid(from.as_str(), to.as_str());
        }
        for [from, to] in &self.required {
            knowledge.require(from.as_str(), to.as_str());
        }
        for (tier, names) in self.tiers.iter().enumerate() {
            knowledge.set_tier(tier, names);
        }
        knowledge
    }
}
