//! Text normalization and part-of-speech categorization.
//!
//! Raw text flows through four capabilities, in this order:
//!
//! ```text
//! text ─▸ tokenize ─▸ drop stopwords ─▸ stem ─▸ lemmatize ─▸ normalized tokens
//!                                                                  │
//!                                  TokenSet ◂─ partition ◂─ tag ◂──┘
//! ```
//!
//! Stemming runs *before* lemmatization. The lemmatizer therefore often
//! sees forms it cannot resolve (`happiness` → `happi` stays `happi`); the
//! resulting degraded forms are the expected output.
//!
//! ## Extension
//!
//! Every stage is a trait object ([`Tokenizer`], [`Stemmer`], [`Lemmatizer`],
//! [`PosTagger`]); swap one with the `with_*` builders on [`NlpPipeline`].

pub mod categorize;
pub mod lemmatizer;
pub mod lexicon;
pub mod stemmer;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;
pub mod traits;

pub use categorize::TokenSet;
pub use lemmatizer::MorphyLemmatizer;
pub use lexicon::Lexicon;
pub use stemmer::PorterStemmer;
pub use stopwords::Stopwords;
pub use tagger::{LexiconTagger, PosTag};
pub use tokenizer::TreebankTokenizer;
pub use traits::{Lemmatizer, PosTagger, Stemmer, Tokenizer};

use crate::config::NlpConfig;
use crate::error::EngineError;
use std::sync::{Arc, LazyLock};

/// The built-in English pipeline, for the free functions below.
static DEFAULT_PIPELINE: LazyLock<NlpPipeline> = LazyLock::new(NlpPipeline::english);

/// Normalize `text` with the built-in English resources.
pub fn normalize(text: &str) -> Vec<String> {
    DEFAULT_PIPELINE.normalize(text)
}

/// Tag and partition already-normalized tokens with the built-in English resources.
pub fn categorize(tokens: &[String]) -> TokenSet {
    DEFAULT_PIPELINE.categorize(tokens)
}

/// Normalizer + categorizer over a set of linguistic capabilities.
///
/// Holds no per-call state; one instance can serve every turn.
#[derive(Clone)]
pub struct NlpPipeline {
    tokenizer: Arc<dyn Tokenizer>,
    stopwords: Arc<Stopwords>,
    stemmer: Arc<dyn Stemmer>,
    lemmatizer: Arc<dyn Lemmatizer>,
    tagger: Arc<dyn PosTagger>,
}

impl NlpPipeline {
    /// Built-in English resources with no extensions.
    pub fn english() -> Self {
        Self::with_lexicon(Lexicon::english(), Stopwords::english())
    }

    fn with_lexicon(lexicon: Lexicon, stopwords: Stopwords) -> Self {
        let lexicon = Arc::new(lexicon);
        Self {
            tokenizer: Arc::new(TreebankTokenizer),
            stopwords: Arc::new(stopwords),
            stemmer: Arc::new(PorterStemmer),
            lemmatizer: Arc::new(MorphyLemmatizer::new(Arc::clone(&lexicon))),
            tagger: Arc::new(LexiconTagger::new(lexicon)),
        }
    }

    /// Load the English resources plus any configured extensions.
    ///
    /// A configured lexicon file that cannot be read or parsed is a
    /// `ResourceUnavailable` error; callers treat it as fatal.
    pub fn from_config(config: &NlpConfig) -> Result<Self, EngineError> {
        let mut lexicon = Lexicon::english();
        if let Some(path) = &config.lexicon_path {
            let added = lexicon.extend_from_file(path)?;
            tracing::info!(path = %path.display(), added, "Loaded user lexicon");
        }
        if lexicon.is_empty() {
            return Err(EngineError::resource("lexicon", "no entries loaded"));
        }

        let stopwords = Stopwords::with_extra(&config.extra_stopwords);
        Ok(Self::with_lexicon(lexicon, stopwords))
    }

    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn with_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    pub fn with_lemmatizer(mut self, lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        self.lemmatizer = lemmatizer;
        self
    }

    pub fn with_tagger(mut self, tagger: Arc<dyn PosTagger>) -> Self {
        self.tagger = tagger;
        self
    }

    /// Tokenize, drop stopwords, stem, then lemmatize.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .filter(|token| !self.stopwords.contains(token))
            .map(|token| self.stemmer.stem(&token))
            .map(|stem| self.lemmatizer.lemmatize(&stem))
            .collect()
    }

    /// Tag the whole sequence and split it into nouns, pronouns and verbs.
    pub fn categorize(&self, tokens: &[String]) -> TokenSet {
        let tagged = self.tagger.tag(tokens);
        TokenSet::from_tagged(&tagged)
    }

    /// `normalize` followed by `categorize`.
    pub fn analyze(&self, text: &str) -> TokenSet {
        let tokens = self.normalize(text);
        self.categorize(&tokens)
    }
}
