//! Unsupervised sentence boundary detection with the Punkt algorithm
//!
//! Punkt learns from raw text which periods belong to abbreviations, which
//! word pairs span a non-final period and which words tend to start
//! sentences. No hand-written grammar is needed; a [`Trainer`] infers the
//! model, a [`SentenceTokenizer`] applies it.
//!
//! # Architecture
//!
//! - **Model**: [`Token`], [`FrequencyDistribution`], [`Storage`] and the
//!   orthographic bit fields in [`ortho`]
//! - **Tokenization**: [`WordTokenizer`] cuts text into byte-addressed tokens
//! - **Training**: [`Trainer`] scores abbreviations, collocations and
//!   sentence starters with Dunning log-likelihood
//! - **Annotation**: an ordered list of [`Annotation`] stages decides every
//!   sentence break; [`language`] supplies punctuation rules and extra stages
//!
//! # Example
//!
//! ```rust
//! use punkt_core::{SentenceTokenizer, Trainer};
//!
//! let mut trainer = Trainer::new();
//! trainer.train("Mr. Smith arrived. Mr. Jones left. Mr. Brown stayed.", true);
//!
//! let tokenizer = SentenceTokenizer::new(trainer.into_storage());
//! let sentences = tokenizer.tokenize("Hello world. This is a test.");
//!
//! assert_eq!(sentences.len(), 2);
//! assert_eq!(sentences[1].text, " This is a test.");
//! assert_eq!((sentences[1].start, sentences[1].end), (12, 28));
//! ```

#![warn(missing_docs)]

pub mod annotate;
pub mod error;
pub mod freq_dist;
pub mod language;
pub mod ortho;
pub mod sentence_tokenizer;
pub mod storage;
pub mod token;
pub mod trainer;
pub mod word_tokenizer;

pub use annotate::{
    ortho_heuristic, Annotation, AnnotationContext, OrthoVerdict, TokenBasedAnnotation,
    TypeBasedAnnotation,
};
pub use error::{PunktError, Result};
pub use freq_dist::FrequencyDistribution;
pub use language::{
    get_language_config, list_available_languages, LanguageConfig, PunctuationConfig,
    PunctuationRules, PunctuationSet,
};
pub use ortho::{OrthoContext, OrthoFlag};
pub use sentence_tokenizer::{Sentence, SentenceTokenizer, SentenceTokenizerBuilder};
pub use storage::Storage;
pub use token::{Token, NUMBER_TYPE};
pub use trainer::{Trainer, TrainerConfig};
pub use word_tokenizer::WordTokenizer;
