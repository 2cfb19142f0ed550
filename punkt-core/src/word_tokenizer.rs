//! Word tokenization
//!
//! Cuts raw text into [`Token`]s with byte offsets into the source, so
//! `&text[token.start()..token.end()]` is always the token text. Trailing
//! punctuation clusters are split from word stems according to the active
//! [`PunctuationRules`].

use crate::language::{PunctuationRules, PunctuationSet};
use crate::token::Token;
use smallvec::{smallvec, SmallVec};
use std::sync::Arc;

/// Whitespace-driven word tokenizer
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    rules: Arc<dyn PunctuationRules>,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new(Arc::new(PunctuationSet::default()))
    }
}

impl WordTokenizer {
    /// Create a tokenizer for the given punctuation rules
    pub fn new(rules: Arc<dyn PunctuationRules>) -> Self {
        Self { rules }
    }

    /// The punctuation rules in use
    pub fn rules(&self) -> &dyn PunctuationRules {
        self.rules.as_ref()
    }

    /// Tokenize `text`
    ///
    /// With `period_context` unset every word of two or more characters is
    /// returned, which is what training needs. With it set, only the first
    /// word, words containing sentence-end punctuation and the word right
    /// after each of them are returned, single characters included.
    pub fn tokenize(&self, text: &str, period_context: bool) -> Vec<Token> {
        let rules = self.rules();
        let mut tokens = Vec::new();
        let mut prev_end = 0;
        let mut first = true;
        let mut emit_next = true;

        for word in rules.word_pattern().find_iter(text) {
            let newlines = text[prev_end..word.start()]
                .chars()
                .filter(|&c| c == '\n')
                .count();
            prev_end = word.end();

            let line_start = first || newlines > 0;
            let para_start = newlines > 1;
            first = false;

            if period_context {
                let candidate = rules.has_sentence_punct(word.as_str());
                let emit = candidate || emit_next;
                emit_next = candidate;
                if !emit {
                    continue;
                }
            } else if word.as_str().chars().nth(1).is_none() {
                continue;
            }

            let mut pieces = self.split_word(word.as_str(), word.start());
            if let Some(head) = pieces.first_mut() {
                head.line_start = line_start;
                head.para_start = para_start;
            }
            tokens.extend(pieces);
        }

        log::trace!(
            "tokenized {} bytes into {} tokens (period context: {})",
            text.len(),
            tokens.len(),
            period_context
        );
        tokens
    }

    fn split_word(&self, word: &str, start: usize) -> SmallVec<[Token; 2]> {
        match self.split_point(word) {
            Some(i) => smallvec![
                Token::new(&word[..i], start),
                Token::new(&word[i..], start + i)
            ],
            None => smallvec![Token::new(word, start)],
        }
    }

    /// Byte index where trailing punctuation should be cut off, if anywhere
    fn split_point(&self, word: &str) -> Option<usize> {
        let rules = self.rules();
        let closing = rules.closing_punctuation();
        let ends = rules.sentence_end_chars();
        let internal = rules.internal_punctuation();

        let body = word.trim_end_matches(|c| closing.contains(&c));
        let core = body.trim_end_matches(|c| ends.contains(&c));
        let end_run = &body[core.len()..];

        let mut split = None;
        if !end_run.is_empty() && (body.len() < word.len() || end_run.chars().any(|c| c != '.'))
        {
            split = Some(core.len());
        } else if word.ends_with(|c| internal.contains(&c)) {
            split = word.char_indices().last().map(|(i, _)| i);
        }

        // Hyphen and period runs override the cluster rule.
        if let Some(run) = rules.multi_char_punct().find(word) {
            split = if word.ends_with('.') && (run.end() != word.len() || run.start() == 0) {
                Some(word.len() - 1)
            } else if run.end() == word.len() {
                Some(run.start())
            } else {
                Some(run.end())
            };
        }

        let i = split?;
        let (stem, tail) = word.split_at(i);
        let tail_is_punct = rules.non_word_chars().is_match(tail)
            || rules.multi_char_punct().is_match(tail)
            || rules.is_sentence_end(tail)
            || tail.ends_with(',');

        (!tail.is_empty() && tail_is_punct && stem.chars().any(char::is_alphanumeric)).then_some(i)
    }
}
