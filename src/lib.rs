//! Text-mining chatbot engine.
//!
//! One utterance in, one reply out: the text is normalized and
//! part-of-speech categorized, scanned for an age, and a fixed-priority
//! rule cascade picks the reply. An age can be turned into a salary
//! estimate by a pre-trained regression model.
//!
//! ```no_run
//! use chatmine::{Config, IntentResolver};
//!
//! let config = Config::load_or_init()?;
//! let resolver = IntentResolver::from_config(&config)?;
//! println!("{}", resolver.resolve("I love my dog"));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod age;
pub mod config;
pub mod engine;
pub mod error;
pub mod nlp;
pub mod salary;
pub mod transcript;

pub use age::extract_age;
pub use config::Config;
pub use engine::{Intent, IntentResolver, Resolution};
pub use error::EngineError;
pub use nlp::{categorize, normalize, NlpPipeline, TokenSet};
pub use salary::{SalaryModel, SalaryPredictor};
pub use transcript::{TranscriptEntry, TranscriptStore};
