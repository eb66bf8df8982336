//! Background knowledge: forbidden and required directed edges, plus temporal tiers.
//!
//! The relations are asymmetric and never checked for consistency: a pair may
//! be both forbidden and required, or neither. `orientation` is the single
//! query both the skeleton knowledge pass and the pairwise engine go through.

use rustc_hash::{FxHashMap, FxHashSet};

/// Which way knowledge forces the edge between an ordered pair `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnowledgeDirection {
    /// `x → y`
    Forward,
    /// `y → x`
    Backward,
}

#[derive(Debug, Clone, Default)]
pub struct Knowledge {
    forbidden: FxHashSet<(String, String)>,
    required: FxHashSet<(String, String)>,
    tier_of: FxHashMap<String, usize>,
}

impl Knowledge {
    /// Empty knowledge: nothing forbidden, nothing required.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forbid the directed edge `from → to`.
    pub fn forbid(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.forbidden.insert((from.into(), to.into()));
        self
    }

    /// Require the directed edge `from → to`.
    pub fn require(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.required.insert((from.into(), to.into()));
        self
    }

    /// Place variables in a temporal tier. Edges from a later tier into an
    /// earlier one are forbidden. A variable placed twice keeps the last tier.
    pub fn set_tier<S: AsRef<str>>(&mut self, tier: usize, names: &[S]) -> &mut Self {
        for name in names {
            self.tier_of.insert(name.as_ref().to_string(), tier);
        }
        self
    }

    pub fn tier(&self, name: &str) -> Option<usize> {
        self.tier_of.get(name).copied()
    }

    pub fn is_forbidden(&self, from: &str, to: &str) -> bool {
        if self.forbidden.contains(&(from.to_string(), to.to_string())) {
            return true;
        }
        match (self.tier(from), self.tier(to)) {
            (Some(tf), Some(tt)) => tf > tt,
            _ => false,
        }
    }

    pub fn is_required(&self, from: &str, to: &str) -> bool {
        self.required.contains(&(from.to_string(), to.to_string()))
    }

    /// Knowledge orients `left → right` when the reverse is forbidden or the
    /// edge itself is required.
    pub fn orients(&self, left: &str, right: &str) -> bool {
        self.is_forbidden(right, left) || self.is_required(left, right)
    }

    /// Forced direction for the ordered pair `(x, y)`.
    ///
    /// When knowledge orients the pair both ways, the edge runs from the name
    /// that sorts first, so the answer does not depend on argument order.
    pub fn orientation(&self, x: &str, y: &str) -> Option<KnowledgeDirection> {
        match (self.orients(x, y), self.orients(y, x)) {
            (true, true) if y < x => Some(KnowledgeDirection::Backward),
            (true, _) => Some(KnowledgeDirection::Forward),
            (false, true) => Some(KnowledgeDirection::Backward),
            (false, false) => None,
        }
    }

    /// Whether the adjacency search must keep `x --- y` regardless of independence.
    pub fn requires_adjacency(&self, x: &str, y: &str) -> bool {
        self.is_required(x, y) || self.is_required(y, x)
    }

    /// Whether `x --- y` is ruled out in both directions.
    pub fn forbids_adjacency(&self, x: &str, y: &str) -> bool {
        self.is_forbidden(x, y) && self.is_forbidden(y, x)
    }

    /// Every variable name mentioned by an explicit edge or a tier.
    pub fn mentioned_names(&self) -> impl Iterator<Item = &str> {
        self.forbidden
            .iter()
            .chain(&self.required)
            .flat_map(|(a, b)| [a.as_str(), b.as_str()])
            .chain(self.tier_of.keys().map(String::as_str))
    }

    pub fn is_empty(&self) -> bool {
        self.forbidden.is_empty() && self.required.is_empty() && self.tier_of.is_empty()
    }
}
