use nom::{
    bytes::complete::take_till1,
    character::complete::{char, u32 as decimal},
    combinator::{all_consuming, map},
    sequence::{terminated, tuple},
    IResult,
};
use svo_protocol::{ParsedSentence, PartOfSpeech, SentenceId, TokenId, TokenRecord};
use tracing::{debug, trace};

use crate::error::ConllError;

/// The columns of a token line that the extractors need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow<'a> {
    pub id: &'a str,
    pub form: &'a str,
    pub upos: &'a str,
    pub head: &'a str,
    pub deprel: &'a str,
}

fn field(input: &str) -> IResult<&str, &str> {
    take_till1(|c| c == '\t')(input)
}

fn column(input: &str) -> IResult<&str, &str> {
    terminated(field, char('\t'))(input)
}

/// ID FORM LEMMA UPOS XPOS FEATS HEAD DEPREL [DEPS MISC]
pub fn parse_row(line: &str) -> IResult<&str, RawRow<'_>> {
    map(
        tuple((column, column, column, column, column, column, column, field)),
        |(id, form, _lemma, upos, _xpos, _feats, head, deprel)| RawRow {
            id,
            form,
            upos,
            head,
            deprel,
        },
    )(line)
}

fn number(input: &str) -> Option<u32> {
    all_consuming(decimal::<&str, nom::error::Error<&str>>)(input)
        .ok()
        .map(|(_, n)| n)
}

#[derive(Default)]
struct PendingSentence {
    text: Option<String>,
    tokens: Vec<TokenRecord>,
}

impl PendingSentence {
    fn finish(&mut self, sentences: &mut Vec<ParsedSentence>) {
        let pending = std::mem::take(self);
        if pending.tokens.is_empty() {
            return;
        }

        let text = pending.text.unwrap_or_else(|| {
            pending
                .tokens
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        });

        debug!(tokens = pending.tokens.len(), %text, "read sentence");

        sentences.push(ParsedSentence {
            id: SentenceId(sentences.len() as u32),
            text,
            tokens: pending.tokens,
        });
    }
}

/// Reads every sentence of a CoNLL-U document.
///
/// Multi-word ranges (`3-4`) and empty nodes (`5.1`) are skipped. Head `0`
/// becomes a self-reference, which is how the tree marks its root.
pub fn parse_conllu(input: &str) -> Result<Vec<ParsedSentence>, ConllError> {
    let mut sentences = Vec::new();
    let mut pending = PendingSentence::default();

    for (offset, raw_line) in input.lines().enumerate() {
        let line = offset + 1;
        let raw_line = raw_line.trim_end_matches('\r');

        if raw_line.trim().is_empty() {
            pending.finish(&mut sentences);
            continue;
        }

        if let Some(comment) = raw_line.strip_prefix('#') {
            if let Some(text) = sentence_text(comment) {
                pending.text = Some(text.to_string());
            }
            continue;
        }

        let (_, row) = parse_row(raw_line).map_err(|_| ConllError::Malformed {
            line,
            reason: "expected at least 8 tab-separated columns".to_string(),
        })?;

        if row.id.contains('-') || row.id.contains('.') {
            trace!(line, id = row.id, "skipping multi-word range or empty node");
            continue;
        }

        let id = number(row.id).ok_or_else(|| ConllError::Malformed {
            line,
            reason: format!("token id '{}' is not a number", row.id),
        })?;

        let expected = pending.tokens.len() as u32 + 1;
        if id != expected {
            return Err(ConllError::OutOfOrder { line, expected, found: id });
        }

        let head = number(row.head).ok_or_else(|| ConllError::Malformed {
            line,
            reason: format!("head '{}' is not a number", row.head),
        })?;

        // CoNLL-U ids are 1-based and 0 marks the root
        let own = TokenId(id - 1);
        let head = if head == 0 { own } else { TokenId(head - 1) };

        pending.tokens.push(TokenRecord {
            id: own,
            text: row.form.to_string(),
            pos: PartOfSpeech::from_tag(row.upos),
            dep: row.deprel.to_string(),
            head,
        });
    }

    pending.finish(&mut sentences);

    Ok(sentences)
}

fn sentence_text(comment: &str) -> Option<&str> {
    let rest = comment.trim_start().strip_prefix("text")?;
    let rest = rest.trim_start().strip_prefix('=')?;
    Some(rest.trim())
}
