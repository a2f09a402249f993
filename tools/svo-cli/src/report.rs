use serde::Serialize;
use svo_extract::{Extractor, Svo};
use svo_graph::{SvoGraph, Triple};
use svo_protocol::ParsedSentence;
use svo_tree::DepTree;
use tracing::warn;

#[derive(Debug, Serialize)]
pub struct ObjectReport {
    pub target: String,
    pub phrase: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Serialize)]
pub struct VerbReport {
    pub verb: String,
    pub subject: Option<String>,
    pub object: Option<String>,
    pub phrase: String,
}

/// Owned extraction result for one sentence, ready for JSON output.
#[derive(Debug, Serialize)]
pub struct SentenceReport {
    pub id: u32,
    pub text: String,
    pub objects: Vec<ObjectReport>,
    pub verbs: Vec<VerbReport>,
    pub triples: Vec<Triple>,
    pub adjacency: Vec<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SentenceReport {
    fn failed(id: u32, text: String, error: String) -> Self {
        Self {
            id,
            text,
            objects: Vec::new(),
            verbs: Vec::new(),
            triples: Vec::new(),
            adjacency: Vec::new(),
            error: Some(error),
        }
    }

    fn from_svo(id: u32, text: String, svo: &Svo<'_>) -> Self {
        let graph = SvoGraph::build(&svo.objects, &svo.verbs);

        Self {
            id,
            text,
            objects: svo
                .objects
                .iter()
                .map(|op| ObjectReport {
                    target: op.target.text().to_string(),
                    phrase: op.to_string(),
                    start: op.start(),
                    end: op.end(),
                })
                .collect(),
            verbs: svo
                .verbs
                .iter()
                .map(|vp| VerbReport {
                    verb: vp.verb.text().to_string(),
                    subject: vp.subject.map(|s| s.text().to_string()),
                    object: vp.object.map(|o| o.text().to_string()),
                    phrase: vp.to_string(),
                })
                .collect(),
            triples: graph.triples(),
            adjacency: graph.adjacency_matrix(),
            error: None,
        }
    }
}

/// Runs both extractors on one sentence. A bad parse only fails its own report.
pub fn analyze(sentence: ParsedSentence, extractor: &Extractor) -> SentenceReport {
    let id = sentence.id.0;
    let text = sentence.text.clone();

    let tree = match DepTree::from_sentence(sentence) {
        Ok(tree) => tree,
        Err(e) => {
            warn!(sentence = id, error = %e, "rejected malformed parse");
            return SentenceReport::failed(id, text, e.to_string());
        }
    };

    match extractor.extract(&tree) {
        Ok(svo) => SentenceReport::from_svo(id, text, &svo),
        Err(e) => {
            warn!(sentence = id, error = %e, "extraction failed");
            SentenceReport::failed(id, text, e.to_string())
        }
    }
}
