//! Read-only dependency-tree view over one parsed sentence.
//!
//! The tree is built once from the parser's token records and validated
//! eagerly; afterwards every traversal works on borrowed [`Node`] handles
//! that cannot outlive the [`DepTree`] they point into.

pub mod builder;
pub mod error;

use std::fmt;
use std::ops::RangeInclusive;

use svo_protocol::{ParsedSentence, PartOfSpeech, RelFlags, TokenId, TokenRecord};

pub use builder::SentenceBuilder;
pub use error::TreeError;

#[derive(Debug, Clone)]
pub struct DepTree {
    tokens: Vec<TokenRecord>,
    rels: Vec<RelFlags>,
    children: Vec<Vec<usize>>,
    root: usize,
}

impl DepTree {
    /// Builds and validates a tree. Tokens must be in sentence order with
    /// ids `0..n`, exactly one token must head itself, and every head chain
    /// must end at that root.
    pub fn new(tokens: Vec<TokenRecord>) -> Result<Self, TreeError> {
        if tokens.is_empty() {
            return Err(TreeError::Empty);
        }

        let len = tokens.len();
        let mut root = None;
        let mut children = vec![Vec::new(); len];

        for (position, token) in tokens.iter().enumerate() {
            if token.id.index() != position {
                return Err(TreeError::Misnumbered { position, found: token.id.0 });
            }

            let head = token.head.index();
            if head >= len {
                return Err(TreeError::DanglingHead { token: position, head: token.head.0 });
            }

            if head == position {
                if let Some(first) = root {
                    return Err(TreeError::MultipleRoots { first, second: position });
                }
                root = Some(position);
            } else {
                // Pushed in position order, so every child list is sorted
                children[head].push(position);
            }
        }

        let root = root.ok_or(TreeError::NoRoot)?;

        for start in 0..len {
            let mut current = start;
            let mut steps = 0;
            while current != root {
                current = tokens[current].head.index();
                steps += 1;
                if steps > len {
                    return Err(TreeError::Cycle { token: start });
                }
            }
        }

        let rels = tokens.iter().map(TokenRecord::rel).collect();

        Ok(Self { tokens, rels, children, root })
    }

    pub fn from_sentence(sentence: ParsedSentence) -> Result<Self, TreeError> {
        Self::new(sentence.tokens)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false for a validated tree; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[TokenRecord] {
        &self.tokens
    }

    pub fn root(&self) -> Node<'_> {
        Node { tree: self, index: self.root }
    }

    pub fn node(&self, index: usize) -> Option<Node<'_>> {
        (index < self.tokens.len()).then_some(Node { tree: self, index })
    }

    /// All nodes in sentence order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = Node<'_>> + '_ {
        (0..self.tokens.len()).map(move |index| Node { tree: self, index })
    }

    /// The contiguous run of nodes covering `range`, clamped to the sentence.
    pub fn span(&self, range: RangeInclusive<usize>) -> impl Iterator<Item = Node<'_>> + '_ {
        let end = (*range.end()).min(self.tokens.len().saturating_sub(1));
        (*range.start()..=end).map(move |index| Node { tree: self, index })
    }
}

/// Borrowed handle to one token of a [`DepTree`].
#[derive(Clone, Copy)]
pub struct Node<'t> {
    tree: &'t DepTree,
    index: usize,
}

impl<'t> Node<'t> {
    fn record(&self) -> &'t TokenRecord {
        &self.tree.tokens[self.index]
    }

    pub fn tree(&self) -> &'t DepTree {
        self.tree
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> TokenId {
        self.record().id
    }

    pub fn text(&self) -> &'t str {
        &self.record().text
    }

    pub fn pos(&self) -> PartOfSpeech {
        self.record().pos
    }

    pub fn dep(&self) -> &'t str {
        &self.record().dep
    }

    pub fn rel(&self) -> RelFlags {
        self.tree.rels[self.index]
    }

    /// The governing token. The root is its own head.
    pub fn head(&self) -> Node<'t> {
        Node { tree: self.tree, index: self.record().head.index() }
    }

    pub fn is_root(&self) -> bool {
        self.index == self.tree.root
    }

    /// Direct dependents in sentence order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = Node<'t>> + 't {
        let tree = self.tree;
        tree.children[self.index].iter().map(move |&index| Node { tree, index })
    }

    pub fn first_child(&self) -> Option<Node<'t>> {
        self.tree.children[self.index]
            .first()
            .map(|&index| Node { tree: self.tree, index })
    }

    /// This node and all of its descendants, in sentence order.
    pub fn subtree(&self) -> Subtree<'t> {
        let mut indices = Vec::new();
        let mut stack = vec![self.index];

        while let Some(current) = stack.pop() {
            indices.push(current);
            stack.extend(self.tree.children[current].iter().copied());
        }

        indices.sort_unstable();

        Subtree { tree: self.tree, indices: indices.into_iter() }
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({} {:?} {}/{})", self.index, self.text(), self.pos(), self.dep())
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Iterator returned by [`Node::subtree`]. Clone it to walk the subtree again.
#[derive(Clone)]
pub struct Subtree<'t> {
    tree: &'t DepTree,
    indices: std::vec::IntoIter<usize>,
}

impl<'t> Iterator for Subtree<'t> {
    type Item = Node<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        self.indices.next().map(|index| Node { tree: self.tree, index })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl ExactSizeIterator for Subtree<'_> {}

impl DoubleEndedIterator for Subtree<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.indices.next_back().map(|index| Node { tree: self.tree, index })
    }
}
