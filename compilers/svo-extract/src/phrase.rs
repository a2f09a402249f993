use std::fmt;

use svo_tree::Node;

/// A noun-phrase span standing for one entity of the sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectPhrase<'t> {
    /// Head token of the entity.
    pub target: Node<'t>,
    /// Contiguous tokens in sentence order.
    pub phrase: Vec<Node<'t>>,
}

/// A subject/verb/object triple with the predicate text that links them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbPhrase<'t> {
    pub verb: Node<'t>,
    pub subject: Option<Node<'t>>,
    pub object: Option<Node<'t>>,
    /// The verb through the object, or through the preposition chain that
    /// leads to it.
    pub phrase: Vec<Node<'t>>,
}

impl ObjectPhrase<'_> {
    pub fn start(&self) -> usize {
        self.phrase.first().map_or(self.target.index(), |n| n.index())
    }

    pub fn end(&self) -> usize {
        self.phrase.last().map_or(self.target.index(), |n| n.index())
    }

    pub fn indices(&self) -> Vec<usize> {
        self.phrase.iter().map(|n| n.index()).collect()
    }
}

impl VerbPhrase<'_> {
    pub fn is_complete(&self) -> bool {
        self.subject.is_some() && self.object.is_some()
    }

    pub fn indices(&self) -> Vec<usize> {
        self.phrase.iter().map(|n| n.index()).collect()
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, nodes: &[Node<'_>]) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        f.write_str(node.text())?;
    }
    Ok(())
}

impl fmt::Display for ObjectPhrase<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.phrase)
    }
}

impl fmt::Display for VerbPhrase<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.phrase)
    }
}
