use petgraph::graph::{Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Directed;
use serde::Serialize;
use std::collections::HashMap;
use svo_extract::{ObjectPhrase, VerbPhrase};
use tracing::debug;

/// An extracted object phrase, detached from the parse it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entity {
    /// Sentence index of the phrase's target token.
    pub index: usize,
    pub target: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Predicate {
    pub verb: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

/// Entities as nodes, one directed subject -> object edge per verb phrase.
pub struct SvoGraph {
    graph: Graph<Entity, Predicate, Directed>,
    index_map: HashMap<usize, NodeIndex>,
}

impl SvoGraph {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            index_map: HashMap::new(),
        }
    }

    pub fn build(objects: &[ObjectPhrase<'_>], verbs: &[VerbPhrase<'_>]) -> Self {
        let mut svo = Self::new();

        for object in objects {
            svo.add_entity(Entity {
                index: object.target.index(),
                target: object.target.text().to_string(),
                text: object.to_string(),
            });
        }

        for verb in verbs {
            let (Some(subject), Some(object)) = (verb.subject, verb.object) else {
                continue;
            };

            let predicate = Predicate {
                verb: verb.verb.text().to_string(),
                text: verb.to_string(),
            };

            if !svo.add_relation(subject.index(), object.index(), predicate) {
                debug!(
                    subject = subject.text(),
                    object = object.text(),
                    verb = verb.verb.text(),
                    "relation endpoint is not an extracted entity"
                );
            }
        }

        svo
    }

    pub fn add_entity(&mut self, entity: Entity) -> NodeIndex {
        if let Some(idx) = self.index_map.get(&entity.index) {
            return *idx;
        }
        let key = entity.index;
        let idx = self.graph.add_node(entity);
        self.index_map.insert(key, idx);
        idx
    }

    /// Links the entities whose targets sit at `from` and `to`. Returns false
    /// (and adds nothing) when either token is not a known entity.
    pub fn add_relation(&mut self, from: usize, to: usize, predicate: Predicate) -> bool {
        match (self.index_map.get(&from), self.index_map.get(&to)) {
            (Some(&from_idx), Some(&to_idx)) => {
                self.graph.add_edge(from_idx, to_idx, predicate);
                true
            }
            _ => false,
        }
    }

    pub fn entity_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.graph.node_weights()
    }

    /// `n x n` over entities in insertion order; 1 marks an edge row -> column.
    pub fn adjacency_matrix(&self) -> Vec<Vec<u8>> {
        let n = self.graph.node_count();
        let mut matrix = vec![vec![0u8; n]; n];

        for edge in self.graph.edge_references() {
            matrix[edge.source().index()][edge.target().index()] = 1;
        }

        matrix
    }

    pub fn triples(&self) -> Vec<Triple> {
        self.graph
            .edge_references()
            .map(|edge| Triple {
                subject: self.graph[edge.source()].text.clone(),
                predicate: edge.weight().text.clone(),
                object: self.graph[edge.target()].text.clone(),
            })
            .collect()
    }

    pub fn inner(&self) -> &Graph<Entity, Predicate, Directed> {
        &self.graph
    }
}

impl Default for SvoGraph {
    fn default() -> Self {
        Self::new()
    }
}
