use svo_protocol::{PartOfSpeech, RelFlags};
use svo_tree::{DepTree, Node};
use tracing::{debug, trace};

use crate::phrase::ObjectPhrase;
use crate::resolve::adposition_phrase;

/// Whether `token` heads an entity: a nominal root, a coordinated noun or
/// numeral, or any subject/object/attribute argument.
pub(crate) fn is_entity_candidate(token: Node<'_>) -> bool {
    let rel = token.rel();
    let pos = token.pos();

    if rel.contains(RelFlags::ROOT) && pos == PartOfSpeech::Noun {
        return true;
    }

    if rel.contains(RelFlags::CONJUNCT) && matches!(pos, PartOfSpeech::Noun | PartOfSpeech::Num) {
        // A numeral with a noun underneath it is counting that noun
        return !(pos == PartOfSpeech::Num && token.children().any(|c| c.pos() == PartOfSpeech::Noun));
    }

    rel.intersects(RelFlags::ENTITY)
}

/// The span an entity headed by `token` covers, before deduplication.
pub(crate) struct EntitySpan<'t> {
    pub phrase: ObjectPhrase<'t>,
    /// First token of the clause-bounded subtree; determiners are not skipped here.
    pub first: usize,
}

/// Computes the object phrase headed by `token`.
///
/// The subtree is cut at the first later token that opens a clause or is a
/// pronoun or adposition. A pronoun heading into a clause is replaced by
/// the clause's antecedent as the phrase target.
pub fn object_phrase_for(token: Node<'_>, skip_determiner: bool) -> ObjectPhrase<'_> {
    entity_span(token, skip_determiner).phrase
}

pub(crate) fn entity_span(token: Node<'_>, skip_determiner: bool) -> EntitySpan<'_> {
    let mut subtree: Vec<Node<'_>> = token.subtree().collect();

    let mut target = token;
    if token.pos() == PartOfSpeech::Pron && token.head().rel().contains(RelFlags::CLAUSE) {
        target = token.head().head();
    }

    // Only tokens after both the target and the token itself can end the span
    let boundary = target.index().max(token.index());
    let cut = subtree.iter().position(|c| {
        c.index() > boundary
            && (c.rel().contains(RelFlags::CLAUSE) || matches!(c.pos(), PartOfSpeech::Pron | PartOfSpeech::Adp))
    });
    if let Some(cut) = cut {
        subtree.truncate(cut);
    }

    let first = subtree[0].index();
    let last = subtree[subtree.len() - 1].index();

    let mut start = first;
    if skip_determiner {
        if let Some(det) = subtree.iter().rposition(|c| c.pos() == PartOfSpeech::Det) {
            let after = subtree.get(det + 1).map_or(last, |n| n.index());
            start = after.min(token.index()).max(first);
        }
    }

    let phrase = token.tree().span(start..=last).collect();

    EntitySpan {
        phrase: ObjectPhrase { target, phrase },
        first,
    }
}

/// Scans the sentence left to right and emits non-overlapping entity spans.
///
/// A candidate is kept only when its span starts after the end of the last
/// kept span, so a later entity nested inside an earlier span is dropped.
pub fn object_phrases(tree: &DepTree, skip_determiner: bool) -> Vec<ObjectPhrase<'_>> {
    let mut phrases = Vec::new();
    let mut last: Option<usize> = None;

    for token in tree.nodes() {
        if token.pos() == PartOfSpeech::Pron {
            continue;
        }

        if adposition_phrase(token).is_some() {
            trace!(token = token.index(), text = token.text(), "skipping adposition artifact");
            continue;
        }

        if !is_entity_candidate(token) {
            continue;
        }

        let span = entity_span(token, skip_determiner);

        if last.map_or(true, |end| span.first > end) {
            let phrase = span.phrase;
            debug!(target_token = phrase.target.index(), phrase = %phrase, "object phrase");
            last = Some(phrase.end());
            phrases.push(phrase);
        } else {
            trace!(token = token.index(), text = token.text(), "span overlaps an earlier phrase");
        }
    }

    phrases
}
