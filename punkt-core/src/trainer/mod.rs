//! Unsupervised training
//!
//! The [`Trainer`] learns a [`Storage`] from raw text. Each call to
//! [`Trainer::train`] runs four stages over one chunk of text:
//!
//! 1. count word types and period-final tokens;
//! 2. add or remove abbreviations by their log-likelihood score;
//! 3. run the first annotation pass and record orthographic context;
//! 4. count sentence-starter and collocation evidence, and pick up rare
//!    abbreviations.
//!
//! Sentence starters and collocations are only computed by
//! [`Trainer::finalize_training`], which replaces both sets wholesale.
//! Chunks may be fed one by one with `finalize = false` and finalized once.

mod config;
mod likelihood;

pub use config::TrainerConfig;
pub use likelihood::{col_log_likelihood, modified_log_likelihood};

use crate::annotate::{Annotation, AnnotationContext, TypeBasedAnnotation};
use crate::freq_dist::FrequencyDistribution;
use crate::language::PunctuationRules;
use crate::ortho::{OrthoFlag, Position};
use crate::storage::{collocation_key, Storage};
use crate::token::{Token, NUMBER_TYPE};
use crate::word_tokenizer::WordTokenizer;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// A pending abbreviation decision
#[derive(Debug, Clone, PartialEq)]
struct AbbreviationCandidate {
    typ: String,
    score: f64,
    is_add: bool,
}

/// Learns abbreviations, collocations, sentence starters and orthographic
/// context from a corpus
#[derive(Debug)]
pub struct Trainer {
    config: TrainerConfig,
    storage: Storage,
    word_tokenizer: WordTokenizer,
    type_fdist: FrequencyDistribution,
    collocation_fdist: FrequencyDistribution<(String, String)>,
    sent_starter_fdist: FrequencyDistribution,
    period_token_count: usize,
    sentbreak_count: usize,
    pending: bool,
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new()
    }
}

fn has_letter(typ: &str) -> bool {
    typ.chars().any(|c| c.is_alphabetic() || c == '_')
}

impl Trainer {
    /// Trainer with default thresholds, punctuation rules and an empty model
    pub fn new() -> Self {
        Self {
            config: TrainerConfig::default(),
            storage: Storage::new(),
            word_tokenizer: WordTokenizer::default(),
            type_fdist: FrequencyDistribution::new(),
            collocation_fdist: FrequencyDistribution::new(),
            sent_starter_fdist: FrequencyDistribution::new(),
            period_token_count: 0,
            sentbreak_count: 0,
            pending: false,
        }
    }

    /// Replace the tuning parameters
    pub fn with_config(mut self, config: TrainerConfig) -> Self {
        self.config = config;
        self
    }

    /// Continue training an existing model
    pub fn with_storage(mut self, storage: Storage) -> Self {
        self.storage = storage;
        self
    }

    /// Use custom punctuation rules
    pub fn with_rules(mut self, rules: Arc<dyn PunctuationRules>) -> Self {
        self.word_tokenizer = WordTokenizer::new(rules);
        self
    }

    /// Tuning parameters in use
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// The model as trained so far
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Finalize any pending statistics and hand over the model
    pub fn into_storage(mut self) -> Storage {
        if self.pending {
            self.finalize_training();
        }
        self.storage
    }

    /// Train on one chunk of raw text
    pub fn train(&mut self, text: &str, finalize: bool) {
        let tokens = self.word_tokenizer.tokenize(text, false);
        self.train_tokens(tokens, finalize);
    }

    /// Train on pre-tokenized, unannotated tokens
    pub fn train_tokens(&mut self, mut tokens: Vec<Token>, finalize: bool) {
        self.pending = true;

        for token in &tokens {
            self.type_fdist.increment(token.typ().to_string());
            if token.period_final() {
                self.period_token_count += 1;
            }
        }

        let candidates = self.abbreviation_candidates(&tokens);
        self.apply_abbreviation_candidates(candidates);

        let ctx = AnnotationContext {
            storage: &self.storage,
            rules: self.word_tokenizer.rules(),
        };
        TypeBasedAnnotation.annotate(&ctx, &mut tokens);

        self.collect_ortho_data(&tokens);
        self.sentbreak_count += tokens.iter().filter(|token| token.sent_break).count();

        for pair in tokens.windows(2) {
            let (token, next) = (&pair[0], &pair[1]);
            if !token.period_final() {
                continue;
            }

            if self.is_rare_abbreviation(token, next) {
                log::debug!("rare abbreviation: {}", token.type_no_period());
                self.storage.add_abbreviation(token.type_no_period());
            }

            if Self::is_potential_sent_starter(token, next) {
                self.sent_starter_fdist.increment(next.typ().to_string());
            }

            if self.is_potential_collocation(token, next) {
                self.collocation_fdist.increment((
                    token.type_no_period().to_string(),
                    next.type_no_sent_period().to_string(),
                ));
            }
        }

        if finalize {
            self.finalize_training();
        }
    }

    /// Recompute sentence starters and collocations from all statistics so far
    pub fn finalize_training(&mut self) {
        let sent_starters = self.find_sentence_starters();
        let collocations = self.find_collocations(&sent_starters);

        log::info!(
            "finalized training: {} abbreviations, {} sentence starters, {} collocations",
            self.storage.abbreviations().count(),
            sent_starters.len(),
            collocations.len()
        );

        let collocations = collocations
            .iter()
            .map(|(first, second)| collocation_key(first, second))
            .collect();
        self.storage.replace_finalized(sent_starters, collocations);
        self.pending = false;
    }

    fn abbreviation_candidates(&self, tokens: &[Token]) -> Vec<AbbreviationCandidate> {
        let mut types: BTreeMap<&str, bool> = BTreeMap::new();
        for token in tokens {
            let typ = token.typ();
            if !has_letter(typ) || typ == NUMBER_TYPE {
                continue;
            }

            // Known abbreviations are rescored so weak ones can be dropped.
            let (stem, is_add) = match typ.strip_suffix('.') {
                Some(stem) => (stem, !self.storage.is_abbreviation(stem)),
                None if self.storage.is_abbreviation(typ) => (typ, false),
                None => continue,
            };
            types
                .entry(stem)
                .and_modify(|add| *add &= is_add)
                .or_insert(is_add);
        }

        types
            .into_iter()
            .map(|(typ, is_add)| AbbreviationCandidate {
                typ: typ.to_string(),
                score: self.abbreviation_score(typ),
                is_add,
            })
            .collect()
    }

    fn abbreviation_score(&self, typ: &str) -> f64 {
        let num_periods = typ.matches('.').count() + 1;
        let num_nonperiods = typ.chars().filter(|&c| c != '.').count();

        let count_with_period = self.type_fdist.count(format!("{typ}.").as_str()) as f64;
        let count_without_period = self.type_fdist.count(typ) as f64;

        let likelihood = modified_log_likelihood(
            count_with_period + count_without_period,
            self.period_token_count as f64,
            count_with_period,
            self.type_fdist.total() as f64,
        );

        let f_length = (-(num_nonperiods as f64)).exp();
        let f_periods = num_periods as f64;
        let f_penalty = if self.config.ignore_abbrev_penalty {
            1.0
        } else {
            (num_nonperiods as f64).powf(-count_without_period)
        };

        likelihood * f_length * f_periods * f_penalty
    }

    fn apply_abbreviation_candidates(&mut self, candidates: Vec<AbbreviationCandidate>) {
        for candidate in candidates {
            if !candidate.score.is_finite() {
                log::debug!("skipping {}: non-finite score", candidate.typ);
                continue;
            }

            if candidate.score >= self.config.abbrev_threshold {
                if candidate.is_add {
                    log::debug!(
                        "abbreviation added: {} ({:.3})",
                        candidate.typ,
                        candidate.score
                    );
                    self.storage.add_abbreviation(candidate.typ);
                }
            } else if !candidate.is_add {
                log::debug!(
                    "abbreviation removed: {} ({:.3})",
                    candidate.typ,
                    candidate.score
                );
                self.storage.remove_abbreviation(&candidate.typ);
            }
        }
    }

    fn collect_ortho_data(&mut self, tokens: &[Token]) {
        let mut context = Position::Internal;
        for token in tokens {
            if token.para_start && context != Position::Unknown {
                context = Position::Initial;
            }
            if token.line_start && context == Position::Internal {
                context = Position::Unknown;
            }

            if let Some(flag) = OrthoFlag::for_context(context, token.first_case()) {
                self.storage
                    .add_ortho_context(token.type_no_sent_period(), flag);
            }

            context = if token.sent_break {
                if token.is_number() || token.is_initial() {
                    Position::Unknown
                } else {
                    Position::Initial
                }
            } else if token.ellipsis || token.abbr {
                Position::Unknown
            } else {
                Position::Internal
            };
        }
    }

    /// A rare type ending a sentence that looks more like an abbreviation
    /// given the token after it
    fn is_rare_abbreviation(&self, token: &Token, next: &Token) -> bool {
        if token.abbr || !token.sent_break {
            return false;
        }

        let typ = token.type_no_sent_period();
        let count = self.type_fdist.count(typ) + self.type_fdist.count(format!("{typ}.").as_str());
        if self.storage.is_abbreviation(typ) || count >= self.config.abbrev_backoff {
            return false;
        }

        let internal = self.word_tokenizer.rules().internal_punctuation();
        if next
            .text()
            .chars()
            .next()
            .is_some_and(|c| internal.contains(&c))
        {
            return true;
        }

        if next.first_lower() {
            let ortho = self.storage.ortho_context(next.type_no_sent_period());
            return ortho.contains(OrthoFlag::BegUc) && !ortho.contains(OrthoFlag::MidUc);
        }

        false
    }

    fn is_potential_sent_starter(prev: &Token, token: &Token) -> bool {
        prev.sent_break && !(prev.is_number() || prev.is_initial()) && token.is_alpha()
    }

    fn is_potential_collocation(&self, token: &Token, next: &Token) -> bool {
        (self.config.include_all_collocs
            || (self.config.include_abbrev_collocs && token.abbr)
            || (token.sent_break && (token.is_number() || token.is_initial())))
            && token.is_non_punct()
            && next.is_non_punct()
    }

    fn find_sentence_starters(&self) -> HashSet<String> {
        let mut starters = HashSet::new();
        if self.sentbreak_count == 0 {
            return starters;
        }

        let n = self.type_fdist.total() as f64;
        let sentbreaks = self.sentbreak_count as f64;
        for (typ, at_break) in self.sent_starter_fdist.iter() {
            let typ_count =
                self.type_fdist.count(typ) + self.type_fdist.count(format!("{typ}.").as_str());
            if at_break == 0 || typ_count < at_break {
                continue;
            }

            let likelihood =
                col_log_likelihood(sentbreaks, typ_count as f64, at_break as f64, n);
            if likelihood >= self.config.sent_starter_threshold
                && n / sentbreaks > typ_count as f64 / at_break as f64
            {
                log::debug!("sentence starter: {typ} ({likelihood:.3})");
                starters.insert(typ.clone());
            }
        }
        starters
    }

    fn find_collocations(&self, sent_starters: &HashSet<String>) -> Vec<(String, String)> {
        let n = self.type_fdist.total() as f64;
        let mut collocations = Vec::new();

        for ((first, second), col_count) in self.collocation_fdist.iter() {
            if sent_starters.contains(second) {
                continue;
            }

            let first_count =
                self.type_fdist.count(first) + self.type_fdist.count(format!("{first}.").as_str());
            let second_count = self.type_fdist.count(second)
                + self.type_fdist.count(format!("{second}.").as_str());

            if first_count <= 1
                || second_count <= 1
                || col_count <= self.config.min_colloc_freq
                || col_count > first_count.min(second_count)
            {
                continue;
            }

            let likelihood = col_log_likelihood(
                first_count as f64,
                second_count as f64,
                col_count as f64,
                n,
            );
            if likelihood >= self.config.collocation_threshold
                && n / first_count as f64 > second_count as f64 / col_count as f64
            {
                log::debug!("collocation: {first} {second} ({likelihood:.3})");
                collocations.push((first.clone(), second.clone()));
            }
        }
        collocations
    }
}
