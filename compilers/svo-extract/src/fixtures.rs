//! Hand-annotated parses of caption sentences, in the shape a spaCy-style
//! English model produces them.

use svo_protocol::PartOfSpeech::*;
use svo_tree::{DepTree, SentenceBuilder};

fn build(builder: SentenceBuilder) -> DepTree {
    builder.build().expect("fixture parse is a valid tree")
}

pub fn man_overlooking_crowd() -> DepTree {
    build(
        SentenceBuilder::new()
            .push("a", Det, "det", 1)
            .push("man", Noun, "ROOT", 1)
            .push("overlooking", Verb, "acl", 1)
            .push("a", Det, "det", 4)
            .push("crowd", Noun, "dobj", 2)
            .push("of", Adp, "case", 7)
            .push("inflatable", Adj, "amod", 7)
            .push("boats", Noun, "nmod", 4),
    )
}

/// "crowd of boats" with "of" as a preposition of "crowd".
pub fn man_overlooking_crowd_of_prep() -> DepTree {
    build(
        SentenceBuilder::new()
            .push("a", Det, "det", 1)
            .push("man", Noun, "ROOT", 1)
            .push("overlooking", Verb, "acl", 1)
            .push("a", Det, "det", 4)
            .push("crowd", Noun, "dobj", 2)
            .push("of", Adp, "prep", 4)
            .push("inflatable", Adj, "amod", 7)
            .push("boats", Noun, "pobj", 5),
    )
}

pub fn in_the_park_boy_throws_ball() -> DepTree {
    build(
        SentenceBuilder::new()
            .push("in", Adp, "prep", 5)
            .push("the", Det, "det", 2)
            .push("park", Noun, "pobj", 0)
            .push("a", Det, "det", 4)
            .push("boy", Noun, "nsubj", 5)
            .push("throws", Verb, "ROOT", 5)
            .push("a", Det, "det", 7)
            .push("ball", Noun, "dobj", 5),
    )
}

pub fn boy_throws_ball_to_dog() -> DepTree {
    build(
        SentenceBuilder::new()
            .push("a", Det, "det", 1)
            .push("boy", Noun, "nsubj", 2)
            .push("throws", Verb, "ROOT", 2)
            .push("a", Det, "det", 4)
            .push("ball", Noun, "dobj", 2)
            .push("to", Adp, "prep", 2)
            .push("a", Det, "det", 7)
            .push("dog", Noun, "pobj", 5),
    )
}

pub fn manager_talking_while_she_eats() -> DepTree {
    build(
        SentenceBuilder::new()
            .push("the", Det, "det", 1)
            .push("manager", Noun, "nsubj", 3)
            .push("is", Aux, "aux", 3)
            .push("talking", Verb, "ROOT", 3)
            .push("on", Adp, "prep", 3)
            .push("the", Det, "det", 6)
            .push("phone", Noun, "pobj", 4)
            .push("while", Sconj, "mark", 9)
            .push("she", Pron, "nsubj", 9)
            .push("eats", Verb, "advcl", 3)
            .push("an", Det, "det", 11)
            .push("apple", Noun, "dobj", 9),
    )
}

pub fn tall_and_blonde_boy() -> DepTree {
    build(
        SentenceBuilder::new()
            .push("a", Det, "det", 4)
            .push("tall", Adj, "amod", 4)
            .push("and", Cconj, "cc", 1)
            .push("blonde", Adj, "conj", 1)
            .push("boy", Noun, "nsubj", 5)
            .push("throws", Verb, "ROOT", 5)
            .push("a", Det, "det", 7)
            .push("ball", Noun, "dobj", 5)
            .push("to", Adp, "prep", 5)
            .push("a", Det, "det", 11)
            .push("cute", Adj, "amod", 11)
            .push("dog", Noun, "pobj", 8),
    )
}

pub fn chef_fries_egg() -> DepTree {
    build(
        SentenceBuilder::new()
            .push("a", Det, "det", 2)
            .push("chubby", Adj, "amod", 2)
            .push("chef", Noun, "nsubj", 3)
            .push("fries", Verb, "ROOT", 3)
            .push("an", Det, "det", 5)
            .push("egg", Noun, "dobj", 3)
            .push("while", Sconj, "mark", 7)
            .push("talking", Verb, "advcl", 3)
            .push("to", Adp, "prep", 7)
            .push("a", Det, "det", 10)
            .push("coworker", Noun, "pobj", 8),
    )
}

pub fn boy_who_throws_balls() -> DepTree {
    build(
        SentenceBuilder::new()
            .push("there", Pron, "expl", 1)
            .push("is", Verb, "ROOT", 1)
            .push("a", Det, "det", 3)
            .push("boy", Noun, "attr", 1)
            .push("who", Pron, "nsubj", 5)
            .push("throws", Verb, "relcl", 3)
            .push("some", Det, "det", 7)
            .push("balls", Noun, "dobj", 5)
            .push("to", Adp, "prep", 5)
            .push("a", Det, "det", 11)
            .push("golden", Adj, "amod", 11)
            .push("dog", Noun, "pobj", 8)
            .push("running", Verb, "acl", 11)
            .push("on", Adp, "prep", 12)
            .push("a", Det, "det", 16)
            .push("grassy", Adj, "amod", 16)
            .push("field", Noun, "pobj", 13),
    )
}

pub fn woman_running_across_field() -> DepTree {
    build(
        SentenceBuilder::new()
            .push("a", Det, "det", 1)
            .push("woman", Noun, "nsubj", 3)
            .push("is", Aux, "aux", 3)
            .push("running", Verb, "ROOT", 3)
            .push("across", Adp, "prep", 3)
            .push("the", Det, "det", 6)
            .push("field", Noun, "pobj", 4)
            .push("towards", Adp, "prep", 3)
            .push("the", Det, "det", 10)
            .push("peach", Noun, "compound", 10)
            .push("tree", Noun, "pobj", 7)
            .push("behind", Adp, "prep", 10)
            .push("the", Det, "det", 13)
            .push("mountain", Noun, "pobj", 11),
    )
}

pub fn swedish_men_walk() -> DepTree {
    build(
        SentenceBuilder::new()
            .push("two", Num, "nummod", 2)
            .push("swedish", Adj, "amod", 2)
            .push("men", Noun, "nsubj", 3)
            .push("walks", Verb, "ROOT", 3)
            .push("down", Adp, "prep", 3)
            .push("the", Det, "det", 6)
            .push("street", Noun, "pobj", 4)
            .push("while", Sconj, "mark", 8)
            .push("snacking", Verb, "advcl", 3)
            .push("on", Adp, "prep", 8)
            .push("ginger", Noun, "compound", 11)
            .push("bread", Noun, "pobj", 9)
            .push("and", Cconj, "cc", 8)
            .push("throwing", Verb, "conj", 8)
            .push("a", Det, "det", 15)
            .push("ball", Noun, "dobj", 13)
            .push("to", Adp, "prep", 13)
            .push("their", Pron, "poss", 18)
            .push("dog", Noun, "pobj", 16),
    )
}

pub fn motorcycle_in_front_of_garage() -> DepTree {
    build(
        SentenceBuilder::new()
            .push("a", Det, "det", 3)
            .push("black", Adj, "amod", 3)
            .push("honda", Propn, "compound", 3)
            .push("motorcycle", Noun, "ROOT", 3)
            .push("parked", Verb, "acl", 3)
            .push("in", Adp, "prep", 4)
            .push("front", Noun, "pobj", 5)
            .push("of", Adp, "prep", 6)
            .push("a", Det, "det", 9)
            .push("garage", Noun, "pobj", 7),
    )
}

pub fn woman_looks_at_herself() -> DepTree {
    build(
        SentenceBuilder::new()
            .push("a", Det, "det", 1)
            .push("woman", Noun, "nsubj", 2)
            .push("looks", Verb, "ROOT", 2)
            .push("at", Adp, "prep", 2)
            .push("herself", Pron, "pobj", 3),
    )
}

pub fn she_eats_an_apple() -> DepTree {
    build(
        SentenceBuilder::new()
            .push("she", Pron, "nsubj", 1)
            .push("eats", Verb, "ROOT", 1)
            .push("an", Det, "det", 3)
            .push("apple", Noun, "dobj", 1),
    )
}

pub fn boy_and_girl_play() -> DepTree {
    build(
        SentenceBuilder::new()
            .push("a", Det, "det", 1)
            .push("boy", Noun, "nsubj", 5)
            .push("and", Cconj, "cc", 1)
            .push("a", Det, "det", 4)
            .push("girl", Noun, "conj", 1)
            .push("play", Verb, "ROOT", 5),
    )
}

/// "a dog runs and jumps and ..." with `links` verbs chained by `conj`.
pub fn conj_chain(links: usize) -> DepTree {
    let mut builder = SentenceBuilder::new()
        .push("a", Det, "det", 1)
        .push("dog", Noun, "nsubj", 2)
        .push("runs", Verb, "ROOT", 2);

    for link in 0..links {
        // each conjunct hangs off the verb pushed just before it
        let head = 2 + link;
        builder = builder.push("jumps", Verb, "conj", head);
    }

    build(builder)
}
