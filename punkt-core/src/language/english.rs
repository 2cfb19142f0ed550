//! English customization layer
//!
//! Adds the embedded English punctuation rules and supervisory
//! abbreviations, plus three annotation stages that run after the built-in
//! passes:
//!
//! - [`MultiPunctAbbreviation`] treats letter-dot runs like `F.B.I.` or
//!   `e.g.` as abbreviations unless the next word clearly starts a sentence.
//! - [`ClosingQuoteContinuation`] keeps `"Great." she said.` together.
//! - [`ListMarker`] keeps enumeration markers like `1.` with their item.

use super::loader::get_language_config;
use super::rules::{PunctuationRules, PunctuationSet};
use crate::annotate::{for_each_pair, ortho_heuristic, Annotation, AnnotationContext, OrthoVerdict};
use crate::error::Result;
use crate::sentence_tokenizer::SentenceTokenizer;
use crate::storage::Storage;
use crate::token::Token;
use crate::trainer::Trainer;
use regex::Regex;
use std::sync::{Arc, LazyLock};

/// Code of the embedded English configuration
pub const LANGUAGE_CODE: &str = "en";

static LETTER_DOT_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[^\W\d_]\.)+[^\W\d_]*\.").expect("letter-dot pattern is valid")
});

/// Re-mark letter-dot abbreviations such as `U.S.` or `Ph.D.`
#[derive(Debug, Default, Clone, Copy)]
pub struct MultiPunctAbbreviation;

impl MultiPunctAbbreviation {
    fn annotate_pair(ctx: &AnnotationContext<'_>, token: &mut Token, next: &Token) {
        if !token.period_final() || token.is_initial() || !LETTER_DOT_RUN.is_match(token.text()) {
            return;
        }

        token.abbr = true;
        token.sent_break = ortho_heuristic(ctx, next) == OrthoVerdict::SentenceStart
            || (next.first_upper() && ctx.storage.is_sentence_starter(next.type_no_sent_period()));
    }
}

impl Annotation for MultiPunctAbbreviation {
    fn annotate(&self, ctx: &AnnotationContext<'_>, tokens: &mut [Token]) {
        for_each_pair(tokens, |token, next| Self::annotate_pair(ctx, token, next));
    }
}

/// Un-break a quoted sentence end followed by a lower-case continuation
#[derive(Debug, Default, Clone, Copy)]
pub struct ClosingQuoteContinuation;

impl Annotation for ClosingQuoteContinuation {
    fn annotate(&self, ctx: &AnnotationContext<'_>, tokens: &mut [Token]) {
        let closing = ctx.rules.closing_punctuation();
        for_each_pair(tokens, |token, next| {
            if token.sent_break
                && token.text().ends_with(|c| closing.contains(&c))
                && ctx.rules.is_sentence_end(token.text())
                && ortho_heuristic(ctx, next) == OrthoVerdict::NotSentenceStart
            {
                token.sent_break = false;
            }
        });
    }
}

/// Keep numbered list markers (`1.`, `2.`) attached to their item
#[derive(Debug, Default, Clone, Copy)]
pub struct ListMarker;

impl Annotation for ListMarker {
    fn annotate(&self, ctx: &AnnotationContext<'_>, tokens: &mut [Token]) {
        // Back to front, so each marker sees its predecessor's earlier decision.
        for i in (0..tokens.len()).rev() {
            let token = &tokens[i];
            if !token.sent_break {
                continue;
            }

            // `1.` is a single token, `1.)` splits into `1` and `.)`.
            let marker_start = if token.period_final() && token.is_number() {
                i
            } else if i > 0
                && tokens[i - 1].is_number()
                && tokens[i - 1].end() == token.start()
                && ctx.rules.is_sentence_end(token.text())
            {
                i - 1
            } else {
                continue;
            };

            if marker_start == 0 || tokens[marker_start - 1].sent_break {
                tokens[i].sent_break = false;
            }
        }
    }
}

/// English punctuation rules compiled from the embedded configuration
pub fn rules() -> Result<Arc<dyn PunctuationRules>> {
    let config = get_language_config(LANGUAGE_CODE)?;
    Ok(Arc::new(PunctuationSet::from_config(&config.punctuation)?))
}

/// Supervisory English abbreviations as a model
pub fn abbreviations() -> Result<Storage> {
    let config = get_language_config(LANGUAGE_CODE)?;
    Ok(Storage::with_abbreviations(config.abbreviations.all()))
}

/// English sentence tokenizer over `storage`
///
/// The supervisory abbreviations are merged into the model first.
pub fn sentence_tokenizer(mut storage: Storage) -> Result<SentenceTokenizer> {
    storage.merge(&abbreviations()?);
    Ok(SentenceTokenizer::builder(storage)
        .rules(rules()?)
        .annotation(MultiPunctAbbreviation)
        .annotation(ClosingQuoteContinuation)
        .annotation(ListMarker)
        .build())
}

/// Trainer with English rules, seeded with the supervisory abbreviations
pub fn trainer() -> Result<Trainer> {
    Ok(Trainer::new()
        .with_rules(rules()?)
        .with_storage(abbreviations()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ortho::OrthoFlag;
    use crate::word_tokenizer::WordTokenizer;

    fn texts<'a>(tokenizer: &SentenceTokenizer, text: &'a str) -> Vec<&'a str> {
        tokenizer.tokenize(text).into_iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_supervisory_abbreviations_are_merged() {
        let tokenizer = sentence_tokenizer(Storage::new()).unwrap();
        assert!(tokenizer.storage().is_abbreviation("dr"));
        assert!(tokenizer.storage().is_abbreviation("inc"));
        assert_eq!(
            texts(&tokenizer, "Dr. Watson arrived. He sat."),
            vec!["Dr. Watson arrived.", " He sat."]
        );
    }

    #[test]
    fn test_letter_dot_run_without_evidence_does_not_break() {
        let tokenizer = sentence_tokenizer(Storage::new()).unwrap();
        let text = "He has a Ph.D. in physics. Impressive.";
        assert_eq!(
            texts(&tokenizer, text),
            vec!["He has a Ph.D. in physics.", " Impressive."]
        );
    }

    #[test]
    fn test_letter_dot_run_breaks_before_sentence_start() {
        let mut storage = Storage::new();
        storage.add_ortho_context("the", OrthoFlag::BegUc);
        storage.add_ortho_context("the", OrthoFlag::MidLc);
        let tokenizer = sentence_tokenizer(storage).unwrap();

        assert_eq!(
            texts(&tokenizer, "I work in the U.S. The weather is fine."),
            vec!["I work in the U.S.", " The weather is fine."]
        );
    }

    #[test]
    fn test_letter_dot_run_breaks_before_known_starter() {
        let mut storage = Storage::new();
        storage.add_sentence_starter("however");
        let tokenizer = sentence_tokenizer(storage).unwrap();

        assert_eq!(
            texts(&tokenizer, "I work in the U.S. However, not for long."),
            vec!["I work in the U.S.", " However, not for long."]
        );
    }

    #[test]
    fn test_closing_quote_continuation() {
        let tokenizer = sentence_tokenizer(Storage::new()).unwrap();
        assert_eq!(
            texts(&tokenizer, "\"This is great.\" she said."),
            vec!["\"This is great.\" she said."]
        );
        assert_eq!(
            texts(&tokenizer, "He said \"Stop.\" Then he left."),
            vec!["He said \"Stop.\"", " Then he left."]
        );
    }

    #[test]
    fn test_list_markers_stay_with_item() {
        let tokenizer = sentence_tokenizer(Storage::new()).unwrap();
        assert_eq!(
            texts(&tokenizer, "1. The first item. 2. The second item."),
            vec!["1. The first item.", " 2. The second item."]
        );
    }

    #[test]
    fn test_list_markers_with_closing_bracket() {
        let tokenizer = sentence_tokenizer(Storage::new()).unwrap();
        assert_eq!(
            texts(&tokenizer, "1.) The first item. 2.) The second item."),
            vec!["1.) The first item.", " 2.) The second item."]
        );
        assert_eq!(
            texts(&tokenizer, "1) The first item. 2) The second item."),
            vec!["1) The first item.", " 2) The second item."]
        );
    }

    #[test]
    fn test_guillemets_are_non_word_characters() {
        let rules = rules().unwrap();
        assert!(rules.non_word_chars().is_match("»"));
        assert!(rules.non_word_chars().is_match("«"));

        let tokens = WordTokenizer::new(rules).tokenize("Prices rose «sharply.»", false);
        let texts: Vec<_> = tokens.iter().map(Token::text).collect();
        assert_eq!(texts, vec!["Prices", "rose", "«sharply", ".»"]);
    }

    #[test]
    fn test_trainer_uses_english_rules() {
        let mut trainer = trainer().unwrap();
        assert!(trainer.storage().is_abbreviation("mr"));
        trainer.train("Prices rose «sharply.» Then fell.", true);
        assert!(trainer.storage().ortho_context("then").contains(OrthoFlag::BegUc));
    }
}
