//! Annotation stages
//!
//! Sentence-break decisions are made by an ordered list of [`Annotation`]
//! stages. The two built-in passes always run first:
//!
//! 1. [`TypeBasedAnnotation`] looks at each token in isolation and marks
//!    sentence-end punctuation, ellipses and known abbreviations.
//! 2. [`TokenBasedAnnotation`] revisits every period-final token together
//!    with the token after it and applies the collocation, orthographic and
//!    sentence-starter heuristics.
//!
//! Language layers append further stages; a later stage may overturn any
//! earlier decision.

use crate::language::PunctuationRules;
use crate::ortho::OrthoFlag;
use crate::storage::Storage;
use crate::token::{Token, NUMBER_TYPE};
use std::fmt;

/// Read-only model data shared by every stage of one pipeline run
#[derive(Clone, Copy)]
pub struct AnnotationContext<'a> {
    /// Trained parameters
    pub storage: &'a Storage,
    /// Punctuation rules of the active language
    pub rules: &'a dyn PunctuationRules,
}

impl fmt::Debug for AnnotationContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotationContext")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

/// One stage of the annotation pipeline
///
/// A stage receives the whole token sequence and may flip any token's flags.
pub trait Annotation: Send + Sync + fmt::Debug {
    /// Annotate `tokens` in place
    fn annotate(&self, ctx: &AnnotationContext<'_>, tokens: &mut [Token]);
}

/// Outcome of the orthographic heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrthoVerdict {
    /// The token starts a sentence
    SentenceStart,
    /// The token does not start a sentence
    NotSentenceStart,
    /// The evidence is inconclusive
    Unknown,
}

/// Decide from orthographic evidence whether `token` starts a sentence
pub fn ortho_heuristic(ctx: &AnnotationContext<'_>, token: &Token) -> OrthoVerdict {
    if ctx.rules.is_bare_punctuation(token.text()) {
        return OrthoVerdict::NotSentenceStart;
    }

    let ortho = ctx.storage.ortho_context(token.type_no_sent_period());

    // Seen lower-case somewhere but never capitalized mid-sentence.
    if token.first_upper() && ortho.has_lower() && !ortho.contains(OrthoFlag::MidUc) {
        return OrthoVerdict::SentenceStart;
    }

    if token.first_lower() && (ortho.has_upper() || !ortho.contains(OrthoFlag::BegLc)) {
        return OrthoVerdict::NotSentenceStart;
    }

    OrthoVerdict::Unknown
}

/// Call `f` with every `(token, next)` pair, the first mutably
pub fn for_each_pair<F>(tokens: &mut [Token], mut f: F)
where
    F: FnMut(&mut Token, &Token),
{
    for i in 1..tokens.len() {
        let (head, tail) = tokens.split_at_mut(i);
        f(&mut head[i - 1], &tail[0]);
    }
}

/// First pass: classify each token by its type alone
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeBasedAnnotation;

impl TypeBasedAnnotation {
    fn annotate_token(ctx: &AnnotationContext<'_>, token: &mut Token) {
        if ctx.rules.is_sentence_end(token.text()) {
            token.sent_break = true;
        } else if token.is_ellipsis() {
            token.ellipsis = true;
        } else if token.period_final() && !token.text().ends_with("..") {
            let text = token.text();
            let stem = text[..text.len() - 1].to_lowercase();
            let last_segment = stem.rsplit('-').next().unwrap_or(&stem);

            if ctx.storage.is_abbreviation(&stem) || ctx.storage.is_abbreviation(last_segment) {
                token.abbr = true;
                token.sent_break = false;
            } else {
                token.sent_break = true;
            }
        }
    }
}

impl Annotation for TypeBasedAnnotation {
    fn annotate(&self, ctx: &AnnotationContext<'_>, tokens: &mut [Token]) {
        for token in tokens.iter_mut() {
            Self::annotate_token(ctx, token);
        }
    }
}

/// Second pass: reconsider period-final tokens in light of the next token
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenBasedAnnotation;

impl TokenBasedAnnotation {
    fn annotate_pair(ctx: &AnnotationContext<'_>, token: &mut Token, next: &Token) {
        if !token.period_final() {
            return;
        }

        let typ = token.type_no_period().to_string();
        let next_typ = next.type_no_sent_period();
        let is_initial = token.is_initial();

        if ctx.storage.is_collocation(&typ, next_typ) {
            token.sent_break = false;
            token.abbr = true;
            return;
        }

        if (token.abbr || token.ellipsis) && !is_initial {
            if ortho_heuristic(ctx, next) == OrthoVerdict::SentenceStart {
                token.sent_break = true;
                return;
            }
            if next.first_upper() && ctx.storage.is_sentence_starter(next_typ) {
                token.sent_break = true;
                return;
            }
        }

        if is_initial || typ == NUMBER_TYPE {
            let verdict = ortho_heuristic(ctx, next);
            if verdict == OrthoVerdict::NotSentenceStart {
                token.sent_break = false;
                token.abbr = true;
                return;
            }

            if verdict == OrthoVerdict::Unknown
                && is_initial
                && next.first_upper()
                && !ctx.storage.ortho_context(next_typ).has_lower()
            {
                token.sent_break = false;
                token.abbr = true;
            }
        }
    }
}

impl Annotation for TokenBasedAnnotation {
    fn annotate(&self, ctx: &AnnotationContext<'_>, tokens: &mut [Token]) {
        for_each_pair(tokens, |token, next| Self::annotate_pair(ctx, token, next));
    }
}
