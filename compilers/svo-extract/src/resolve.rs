//! Subject and prepositional-object resolution.
//!
//! Both walks are recursive: subjects are inherited up through coordinated
//! and subordinate clauses, prepositional objects are followed down through
//! nested prepositions and multi-word adpositions. Every hop is counted
//! against a depth limit.

use svo_protocol::{PartOfSpeech, RelFlags};
use svo_tree::Node;

use crate::error::ExtractError;

/// A multi-word adposition artifact such as "in front of": `token` hangs off
/// an adposition (`head`) and its first child is another adposition (`child`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdpositionPhrase<'t> {
    pub head: Node<'t>,
    pub token: Node<'t>,
    pub child: Node<'t>,
}

pub fn adposition_phrase(token: Node<'_>) -> Option<AdpositionPhrase<'_>> {
    let head = token.head();
    if head.pos() != PartOfSpeech::Adp {
        return None;
    }

    let child = token.first_child()?;
    (child.pos() == PartOfSpeech::Adp).then_some(AdpositionPhrase { head, token, child })
}

/// Where a preposition chain ends: `stop` closes the predicate text and
/// `object` is the entity it points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrepTarget<'t> {
    pub stop: Node<'t>,
    pub object: Node<'t>,
}

fn check_depth(token: Node<'_>, depth: usize, limit: usize) -> Result<(), ExtractError> {
    if depth > limit {
        return Err(ExtractError::DepthExceeded { token: token.index(), limit });
    }
    Ok(())
}

/// Finds the grammatical subject of `verb`.
///
/// Participial clauses (`acl`) take the noun they modify. Adverbial clauses,
/// conjuncts and open complements inherit the subject of their governing
/// clause. Otherwise the first `nsubj`/`nsubjpass` child is used; a pronoun
/// there is swapped for the antecedent of a relative clause, or yields
/// `None` when the clause is not relative.
pub fn resolve_subject(verb: Node<'_>, max_depth: usize) -> Result<Option<Node<'_>>, ExtractError> {
    subject_at(verb, 0, max_depth)
}

fn subject_at(token: Node<'_>, depth: usize, limit: usize) -> Result<Option<Node<'_>>, ExtractError> {
    check_depth(token, depth, limit)?;

    let rel = token.rel();

    // The root heads itself, so it never hops
    if !token.is_root() {
        if rel.contains(RelFlags::ADJ_CLAUSE) {
            return Ok(Some(token.head()));
        }
        if rel.intersects(RelFlags::INHERITS_SUBJECT) {
            return subject_at(token.head(), depth + 1, limit);
        }
    }

    let Some(subject) = token.children().find(|c| c.rel().contains(RelFlags::SUBJECT)) else {
        return Ok(None);
    };

    if subject.pos() == PartOfSpeech::Pron {
        let antecedent = rel.contains(RelFlags::RELATIVE_CLAUSE) && !token.is_root();
        return Ok(antecedent.then(|| token.head()));
    }

    Ok(Some(subject))
}

/// Follows a `prep` token to its object.
///
/// A `pobj` child ends the chain at the preposition itself, unless that child
/// is the middle of a multi-word adposition, in which case the chain goes on
/// from the inner adposition and the predicate text stops there. A nested
/// `prep` child is followed instead. `None` when neither is present.
pub fn resolve_prep_object(prep: Node<'_>, max_depth: usize) -> Result<Option<PrepTarget<'_>>, ExtractError> {
    prep_object_at(prep, 0, max_depth)
}

fn prep_object_at(prep: Node<'_>, depth: usize, limit: usize) -> Result<Option<PrepTarget<'_>>, ExtractError> {
    check_depth(prep, depth, limit)?;

    for child in prep.children() {
        let rel = child.rel();

        if rel.contains(RelFlags::PREP_OBJECT) {
            if let Some(adp) = adposition_phrase(child) {
                let inner = prep_object_at(adp.child, depth + 1, limit)?;
                return Ok(inner.map(|found| PrepTarget { stop: adp.child, object: found.object }));
            }

            return Ok(Some(PrepTarget { stop: prep, object: child }));
        }

        if rel.contains(RelFlags::PREPOSITION) {
            return prep_object_at(child, depth + 1, limit);
        }
    }

    Ok(None)
}
