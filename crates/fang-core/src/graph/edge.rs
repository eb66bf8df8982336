use std::fmt;

/// Directionality of a single edge record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeKind {
    /// `node1 --- node2`
    Undirected,
    /// `node1 --> node2`
    Directed,
}

/// Cosmetic tag on the two directed records of a detected two-cycle.
/// Carries no algorithmic meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeedbackMarker {
    /// Both tail-asymmetry tests significant (drawn green).
    Significance,
    /// Tail correlation signs disagree with the full correlation (drawn red).
    SignFlip,
}

impl FeedbackMarker {
    pub fn color(&self) -> &'static str {
        match self {
            Self::Significance => "green",
            Self::SignFlip => "red",
        }
    }
}

/// Weight stored on each petgraph edge. For `Undirected`, the stored
/// direction is just the order the endpoints were given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeAttributes {
    pub kind: EdgeKind,
    pub marker: Option<FeedbackMarker>,
}

/// A name-keyed edge record as seen from outside the graph.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub node1: String,
    pub node2: String,
    pub kind: EdgeKind,
    pub marker: Option<FeedbackMarker>,
}

impl Edge {
    pub fn directed(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            node1: from.into(),
            node2: to.into(),
            kind: EdgeKind::Directed,
            marker: None,
        }
    }

    pub fn undirected(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            node1: a.into(),
            node2: b.into(),
            kind: EdgeKind::Undirected,
            marker: None,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.kind == EdgeKind::Directed
    }

    /// Order-independent form: undirected endpoints sorted by name,
    /// directed edges kept as `from → to`.
    pub fn canonical(&self) -> Edge {
        let mut edge = self.clone();
        if edge.kind == EdgeKind::Undirected && edge.node1 > edge.node2 {
            std::mem::swap(&mut edge.node1, &mut edge.node2);
        }
        edge
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self.kind {
            EdgeKind::Undirected => "---",
            EdgeKind::Directed => "-->",
        };
        write!(f, "{} {} {}", self.node1, arrow, self.node2)?;
        if let Some(marker) = self.marker {
            write!(f, " [{}]", marker.color())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Edge::directed("A", "B").to_string(), "A --> B");
        assert_eq!(Edge::undirected("A", "B").to_string(), "A --- B");
        let mut e = Edge::directed("A", "B");
        e.marker = Some(FeedbackMarker::SignFlip);
        assert_eq!(e.to_string(), "A --> B [red]");
    }

    #[test]
    fn test_canonical_sorts_undirected_only() {
        assert_eq!(Edge::undirected("b", "a").canonical(), Edge::undirected("a", "b"));
        assert_eq!(Edge::directed("b", "a").canonical(), Edge::directed("b", "a"));
    }
}
