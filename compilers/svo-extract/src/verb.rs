use svo_protocol::{PartOfSpeech, RelFlags};
use svo_tree::{DepTree, Node};
use tracing::{debug, trace};

use crate::error::ExtractError;
use crate::phrase::VerbPhrase;
use crate::resolve::{resolve_prep_object, resolve_subject};

/// Object and predicate text found so far for the verb being scanned.
/// Cleared after every emitted triple; the subject is kept per verb.
#[derive(Default)]
struct PendingObject<'t> {
    object: Option<Node<'t>>,
    phrase: Vec<Node<'t>>,
}

/// Tokens of `verb`'s subtree from the verb itself through `stop`.
///
/// A preposition placed before its verb has nothing between the two to
/// label the predicate with, so the verb stands alone.
fn predicate_span<'t>(verb: Node<'t>, stop: Node<'t>) -> Vec<Node<'t>> {
    let mut phrase = Vec::new();
    for node in verb.subtree() {
        if node == verb || !phrase.is_empty() {
            phrase.push(node);
        }
        if node == stop {
            break;
        }
    }
    if phrase.is_empty() {
        phrase.push(verb);
    }
    phrase
}

/// Emits one triple per (verb, object) pair.
///
/// Direct and indirect objects give a predicate of just the verb; objects
/// reached through a preposition give the verb through the end of the
/// preposition chain. A pronoun object is taken to mean the subject.
pub fn verb_phrases(tree: &DepTree, max_depth: usize) -> Result<Vec<VerbPhrase<'_>>, ExtractError> {
    let mut phrases = Vec::new();

    for verb in tree.nodes().filter(|t| t.pos() == PartOfSpeech::Verb) {
        let subject = resolve_subject(verb, max_depth)?;
        if subject.is_none() {
            trace!(verb = verb.index(), text = verb.text(), "no resolvable subject");
        }

        let mut pending = PendingObject::default();

        for child in verb.children() {
            let rel = child.rel();

            if rel.contains(RelFlags::OBJECT) {
                pending = PendingObject { object: Some(child), phrase: vec![verb] };
            } else if rel.contains(RelFlags::PREPOSITION) {
                pending = match resolve_prep_object(child, max_depth)? {
                    Some(found) => {
                        let object = if found.object.pos() == PartOfSpeech::Pron {
                            subject
                        } else {
                            Some(found.object)
                        };
                        PendingObject { object, phrase: predicate_span(verb, found.stop) }
                    }
                    None => {
                        trace!(prep = child.index(), text = child.text(), "preposition without object");
                        PendingObject::default()
                    }
                };
            }

            if let (Some(subject), Some(object)) = (subject, pending.object) {
                let emitted = VerbPhrase {
                    verb,
                    subject: Some(subject),
                    object: Some(object),
                    phrase: std::mem::take(&mut pending).phrase,
                };
                debug!(
                    subject = subject.text(),
                    predicate = %emitted,
                    object = object.text(),
                    "verb phrase"
                );
                phrases.push(emitted);
            }
        }
    }

    Ok(phrases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_DEPTH;
    use crate::fixtures;

    type Triple<'a> = (&'a str, &'a str, &'a str, String);

    fn triples(tree: &DepTree) -> Vec<Triple<'_>> {
        verb_phrases(tree, DEFAULT_MAX_DEPTH)
            .unwrap()
            .into_iter()
            .map(|vp| {
                let predicate = vp.to_string();
                (
                    vp.subject.map_or("", |s| s.text()),
                    vp.verb.text(),
                    vp.object.map_or("", |o| o.text()),
                    predicate,
                )
            })
            .collect()
    }

    #[test]
    fn test_direct_and_prepositional_objects() {
        let tree = fixtures::boy_throws_ball_to_dog();
        assert_eq!(
            triples(&tree),
            vec![
                ("boy", "throws", "ball", "throws".to_string()),
                ("boy", "throws", "dog", "throws a ball to".to_string()),
            ]
        );
    }

    #[test]
    fn test_subject_inherited_by_adverbial_clause() {
        let tree = fixtures::manager_talking_while_she_eats();
        assert_eq!(
            triples(&tree),
            vec![
                ("manager", "talking", "phone", "talking on".to_string()),
                ("manager", "eats", "apple", "eats".to_string()),
            ]
        );
    }

    #[test]
    fn test_relative_and_participial_clauses() {
        let tree = fixtures::boy_who_throws_balls();
        assert_eq!(
            triples(&tree),
            vec![
                ("boy", "throws", "balls", "throws".to_string()),
                ("boy", "throws", "dog", "throws some balls to".to_string()),
                ("dog", "running", "field", "running on".to_string()),
            ]
        );
    }

    #[test]
    fn test_coordinated_verbs() {
        let tree = fixtures::swedish_men_walk();
        assert_eq!(
            triples(&tree),
            vec![
                ("men", "walks", "street", "walks down".to_string()),
                ("men", "snacking", "bread", "snacking on".to_string()),
                ("men", "throwing", "ball", "throwing".to_string()),
                ("men", "throwing", "dog", "throwing a ball to".to_string()),
            ]
        );
    }

    #[test]
    fn test_multi_word_adposition() {
        let tree = fixtures::motorcycle_in_front_of_garage();
        assert_eq!(
            triples(&tree),
            vec![("motorcycle", "parked", "garage", "parked in front of".to_string())]
        );
    }

    #[test]
    fn test_pronoun_object_becomes_subject() {
        let tree = fixtures::woman_looks_at_herself();
        assert_eq!(
            triples(&tree),
            vec![("woman", "looks", "woman", "looks at".to_string())]
        );
    }

    #[test]
    fn test_fronted_preposition_does_not_borrow_later_tokens() {
        let tree = fixtures::in_the_park_boy_throws_ball();
        assert_eq!(
            triples(&tree),
            vec![
                ("boy", "throws", "park", "throws".to_string()),
                ("boy", "throws", "ball", "throws".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_subject_no_triples() {
        let tree = fixtures::she_eats_an_apple();
        assert!(triples(&tree).is_empty());
    }

    #[test]
    fn test_depth_error_propagates() {
        let tree = fixtures::conj_chain(70);
        let err = verb_phrases(&tree, DEFAULT_MAX_DEPTH).unwrap_err();
        assert!(matches!(err, ExtractError::DepthExceeded { .. }));
    }
}
