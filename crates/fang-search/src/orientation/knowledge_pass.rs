use fang_core::{Graph, Knowledge, KnowledgeDirection};
use tracing::debug;

/// Direct every skeleton edge that knowledge orients. Returns how many
/// edges were rewritten.
pub fn orient_with_knowledge(graph: &mut Graph, knowledge: &Knowledge) -> usize {
    if knowledge.is_empty() {
        return 0;
    }
    let mut oriented = 0;
    for edge in graph.edges() {
        let (a, b) = (edge.node1.as_str(), edge.node2.as_str());
        let Some(direction) = knowledge.orientation(a, b) else {
            continue;
        };
        let (from, to) = match direction {
            KnowledgeDirection::Forward => (a, b),
            KnowledgeDirection::Backward => (b, a),
        };
        if graph.is_directed_from_to(from, to) && !graph.is_directed_from_to(to, from) {
            continue;
        }
        graph.remove_edges(a, b);
        graph.add_directed_edge(from, to);
        debug!(from = %from, to = %to, "knowledge: edge oriented");
        oriented += 1;
    }
    oriented
}
