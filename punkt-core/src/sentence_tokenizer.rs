//! Sentence tokenization
//!
//! The [`SentenceTokenizer`] runs the annotation pipeline over the
//! period-context tokens of a text and cuts the text after every token that
//! ends up marked as a sentence break. Sentences are exact slices of the
//! input: concatenating them reproduces the text byte for byte.

use crate::annotate::{Annotation, AnnotationContext, TokenBasedAnnotation, TypeBasedAnnotation};
use crate::language::PunctuationRules;
use crate::storage::Storage;
use crate::token::Token;
use crate::word_tokenizer::WordTokenizer;
use std::sync::Arc;

/// One sentence as a span of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset just past the last character
    pub end: usize,
    /// The literal source text, whitespace preserved
    pub text: &'a str,
}

/// Splits text into sentences with a trained model
///
/// The tokenizer is `Send + Sync`; one instance can serve many threads.
#[derive(Debug)]
pub struct SentenceTokenizer {
    storage: Arc<Storage>,
    word_tokenizer: WordTokenizer,
    annotations: Vec<Box<dyn Annotation>>,
}

impl SentenceTokenizer {
    /// Tokenizer with the default punctuation rules and the built-in passes
    pub fn new(storage: impl Into<Arc<Storage>>) -> Self {
        Self::builder(storage).build()
    }

    /// Start configuring a tokenizer
    pub fn builder(storage: impl Into<Arc<Storage>>) -> SentenceTokenizerBuilder {
        SentenceTokenizerBuilder {
            storage: storage.into(),
            rules: None,
            annotations: Vec::new(),
        }
    }

    /// The model in use
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// The punctuation rules in use
    pub fn rules(&self) -> &dyn PunctuationRules {
        self.word_tokenizer.rules()
    }

    /// Period-context tokens of `text` with every annotation stage applied
    pub fn annotated_tokens(&self, text: &str) -> Vec<Token> {
        let mut tokens = self.word_tokenizer.tokenize(text, true);
        let ctx = AnnotationContext {
            storage: &self.storage,
            rules: self.word_tokenizer.rules(),
        };
        for stage in &self.annotations {
            stage.annotate(&ctx, &mut tokens);
        }
        tokens
    }

    /// Split `text` into sentences
    ///
    /// An empty text has no sentences. Text after the last break, whitespace
    /// included, becomes a final sentence so no byte of the input is lost.
    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<Sentence<'t>> {
        let tokens = self.annotated_tokens(text);

        let mut sentences = Vec::new();
        let mut last_break = 0;
        for token in tokens.iter().filter(|token| token.sent_break) {
            let end = token.end();
            sentences.push(Sentence {
                start: last_break,
                end,
                text: &text[last_break..end],
            });
            last_break = end;
        }

        if last_break < text.len() {
            sentences.push(Sentence {
                start: last_break,
                end: text.len(),
                text: &text[last_break..],
            });
        }

        sentences
    }
}

/// Builder for [`SentenceTokenizer`]
#[derive(Debug)]
pub struct SentenceTokenizerBuilder {
    storage: Arc<Storage>,
    rules: Option<Arc<dyn PunctuationRules>>,
    annotations: Vec<Box<dyn Annotation>>,
}

impl SentenceTokenizerBuilder {
    /// Use custom punctuation rules
    pub fn rules(mut self, rules: Arc<dyn PunctuationRules>) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Append a stage that runs after the built-in passes and any stage
    /// appended before it
    pub fn annotation(mut self, stage: impl Annotation + 'static) -> Self {
        self.annotations.push(Box::new(stage));
        self
    }

    /// Finish the tokenizer
    pub fn build(self) -> SentenceTokenizer {
        let word_tokenizer = match self.rules {
            Some(rules) => WordTokenizer::new(rules),
            None => WordTokenizer::default(),
        };

        let mut annotations: Vec<Box<dyn Annotation>> =
            vec![Box::new(TypeBasedAnnotation), Box::new(TokenBasedAnnotation)];
        annotations.extend(self.annotations);

        SentenceTokenizer {
            storage: self.storage,
            word_tokenizer,
            annotations,
        }
    }
}
