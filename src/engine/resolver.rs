//! The rule cascade.

use super::phrases::{FAREWELLS, GREETINGS};
use super::{
    noun_topic_reply, verb_topic_reply, Intent, Resolution, FALLBACK_REPLY, FAREWELL_REPLY,
    GREETING_REPLY, NO_AGE_REPLY,
};
use crate::age::extract_age;
use crate::config::{Config, MatchMode};
use crate::error::EngineError;
use crate::nlp::{NlpPipeline, TokenSet};
use crate::salary::SalaryPredictor;
use std::cell::OnceCell;

// ── Turn state ───────────────────────────────────────────────────

/// Everything the rules may look at for one utterance.
struct Turn<'a> {
    text: &'a str,
    age: Option<u32>,
    pipeline: &'a NlpPipeline,
    tokens: OnceCell<TokenSet>,
}

impl<'a> Turn<'a> {
    fn new(text: &'a str, pipeline: &'a NlpPipeline) -> Self {
        Self {
            text,
            age: extract_age(text),
            pipeline,
            tokens: OnceCell::new(),
        }
    }

    fn tokens(&self) -> &TokenSet {
        self.tokens.get_or_init(|| self.pipeline.analyze(self.text))
    }
}

// ── Rules ────────────────────────────────────────────────────────

struct Rule {
    intent: Intent,
    applies: fn(&IntentResolver, &Turn<'_>) -> bool,
    reply: fn(&IntentResolver, &Turn<'_>) -> String,
}

/// Highest priority first.
const RULES: &[Rule] = &[
    Rule {
        intent: Intent::Greeting,
        applies: is_greeting,
        reply: greeting,
    },
    Rule {
        intent: Intent::Farewell,
        applies: is_farewell,
        reply: farewell,
    },
    Rule {
        intent: Intent::AgeSalary,
        applies: has_age,
        reply: salary,
    },
    Rule {
        intent: Intent::NounTopic,
        applies: has_noun,
        reply: noun_topic,
    },
    Rule {
        intent: Intent::VerbTopic,
        applies: has_verb_or_pronoun,
        reply: verb_topic,
    },
];

fn is_greeting(resolver: &IntentResolver, turn: &Turn<'_>) -> bool {
    GREETINGS.matches(turn.text, resolver.match_mode)
}

fn greeting(_: &IntentResolver, _: &Turn<'_>) -> String {
    GREETING_REPLY.to_string()
}

fn is_farewell(resolver: &IntentResolver, turn: &Turn<'_>) -> bool {
    FAREWELLS.matches(turn.text, resolver.match_mode)
}

fn farewell(_: &IntentResolver, _: &Turn<'_>) -> String {
    FAREWELL_REPLY.to_string()
}

// Without a loaded model the age rule never fires, as if no age was found.
fn has_age(resolver: &IntentResolver, turn: &Turn<'_>) -> bool {
    turn.age.is_some() && resolver.salary.is_some()
}

fn salary(resolver: &IntentResolver, turn: &Turn<'_>) -> String {
    match (turn.age, &resolver.salary) {
        (Some(age), Some(predictor)) => predictor.predict_salary(age),
        _ => NO_AGE_REPLY.to_string(),
    }
}

fn has_noun(_: &IntentResolver, turn: &Turn<'_>) -> bool {
    !turn.tokens().nouns.is_empty()
}

fn noun_topic(_: &IntentResolver, turn: &Turn<'_>) -> String {
    let noun = turn.tokens().nouns.first().map_or("", String::as_str);
    noun_topic_reply(noun)
}

fn has_verb_or_pronoun(_: &IntentResolver, turn: &Turn<'_>) -> bool {
    let tokens = turn.tokens();
    !tokens.verbs.is_empty() || !tokens.pronouns.is_empty()
}

fn verb_topic(_: &IntentResolver, turn: &Turn<'_>) -> String {
    let tokens = turn.tokens();
    let topic = if tokens.verbs.is_empty() {
        tokens.pronouns.join(" ")
    } else {
        tokens.verbs.join(" ")
    };
    verb_topic_reply(&topic)
}

// ── Resolver ─────────────────────────────────────────────────────

/// Selects exactly one reply per utterance.
///
/// Immutable after construction and `Send + Sync`; share it freely.
#[derive(Clone)]
pub struct IntentResolver {
    pipeline: NlpPipeline,
    salary: Option<SalaryPredictor>,
    match_mode: MatchMode,
}

impl IntentResolver {
    /// `salary = None` disables the age rule.
    pub fn new(pipeline: NlpPipeline, salary: Option<SalaryPredictor>) -> Self {
        Self {
            pipeline,
            salary,
            match_mode: MatchMode::default(),
        }
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Load linguistic resources and the salary model as configured.
    pub fn from_config(config: &Config) -> Result<Self, EngineError> {
        let pipeline = NlpPipeline::from_config(&config.nlp)?;
        let salary = SalaryPredictor::from_config(&config.salary)?;
        Ok(Self::new(pipeline, salary).with_match_mode(config.engine.match_mode))
    }

    /// Intents in the order they are tried.
    pub fn priority() -> impl Iterator<Item = Intent> {
        RULES
            .iter()
            .map(|rule| rule.intent)
            .chain(std::iter::once(Intent::Unknown))
    }

    pub fn has_salary_model(&self) -> bool {
        self.salary.is_some()
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn pipeline(&self) -> &NlpPipeline {
        &self.pipeline
    }

    /// The reply for `text`.
    pub fn resolve(&self, text: &str) -> String {
        self.resolve_detailed(text).reply
    }

    /// The reply for `text` together with the intent that produced it.
    pub fn resolve_detailed(&self, text: &str) -> Resolution {
        let turn = Turn::new(text, &self.pipeline);
        let resolution = RULES
            .iter()
            .find(|rule| (rule.applies)(self, &turn))
            .map(|rule| Resolution {
                intent: rule.intent,
                reply: (rule.reply)(self, &turn),
            })
            .unwrap_or_else(|| Resolution {
                intent: Intent::Unknown,
                reply: FALLBACK_REPLY.to_string(),
            });

        tracing::debug!(
            intent = %resolution.intent,
            age = ?turn.age,
            tokens = ?turn.tokens.get(),
            "Resolved utterance"
        );
        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::salary::SalaryModel;
    use std::sync::Arc;

    struct Flat(f64);

    impl SalaryModel for Flat {
        fn predict(&self, _features: &[f64]) -> f64 {
            self.0
        }
    }

    fn resolver() -> IntentResolver {
        let predictor = SalaryPredictor::new(Arc::new(Flat(55000.0)));
        IntentResolver::new(NlpPipeline::english(), Some(predictor))
    }

    fn intent(text: &str) -> Intent {
        resolver().resolve_detailed(text).intent
    }

    #[test]
    fn priority_order_is_fixed() {
        let order: Vec<_> = IntentResolver::priority().collect();
        assert_eq!(
            order,
            vec![
                Intent::Greeting,
                Intent::Farewell,
                Intent::AgeSalary,
                Intent::NounTopic,
                Intent::VerbTopic,
                Intent::Unknown,
            ]
        );
    }

    #[test]
    fn greeting() {
        assert_eq!(resolver().resolve("Hello there"), GREETING_REPLY);
    }

    #[test]
    fn greeting_beats_everything_else() {
        assert_eq!(intent("hello, I am 30 years old"), Intent::Greeting);
        assert_eq!(intent("hey I love my dog"), Intent::Greeting);
        assert_eq!(intent("hi and goodbye"), Intent::Greeting);
    }

    #[test]
    fn farewell() {
        assert_eq!(resolver().resolve("goodbye"), FAREWELL_REPLY);
        assert_eq!(intent("bye, I am 30"), Intent::Farewell);
    }

    #[test]
    fn age_triggers_prediction() {
        let reply = resolver().resolve("I am 34 years old");
        assert_eq!(reply, "Predicted salary for age 34: $55000.00");
    }

    #[test]
    fn age_beats_topics() {
        assert_eq!(intent("my dog is 12"), Intent::AgeSalary);
    }

    #[test]
    fn age_rule_skipped_without_model() {
        let resolver = IntentResolver::new(NlpPipeline::english(), None);
        let resolution = resolver.resolve_detailed("I am 34 years old");
        assert_ne!(resolution.intent, Intent::AgeSalary);
        assert!(!resolution.reply.starts_with("Predicted salary"));
    }

    #[test]
    fn noun_topic() {
        assert_eq!(
            resolver().resolve("I love my dog"),
            "I don't know much about dog. Can you help me understand it?"
        );
    }

    #[test]
    fn verb_topic_joins_verbs() {
        assert_eq!(
            resolver().resolve("running jumping"),
            "I would like to know about run jump."
        );
    }

    #[test]
    fn topics_keep_y_after_a_vowel() {
        assert_eq!(
            resolver().resolve("I want money"),
            "I don't know much about money. Can you help me understand it?"
        );
        assert_eq!(
            resolver().resolve("I enjoy playing"),
            "I would like to know about enjoy play."
        );
    }

    #[test]
    fn verb_topic_prefers_verbs_over_pronouns() {
        assert_eq!(resolver().resolve("help us"), "I would like to know about help.");
    }

    #[test]
    fn pronoun_topic_when_no_verbs() {
        let resolution = resolver().resolve_detailed("whose");
        assert_eq!(resolution.intent, Intent::VerbTopic);
        assert_eq!(resolution.reply, "I would like to know about whose.");
    }

    #[test]
    fn empty_and_blank_input_fall_back() {
        assert_eq!(resolver().resolve(""), FALLBACK_REPLY);
        assert_eq!(resolver().resolve("   "), FALLBACK_REPLY);
        assert_eq!(resolver().resolve("?!"), FALLBACK_REPLY);
    }

    #[test]
    fn stopword_only_input_falls_back() {
        assert_eq!(intent("the and of it"), Intent::Unknown);
    }

    #[test]
    fn substring_matching_is_the_default() {
        // "this" contains "hi".
        assert_eq!(intent("this chip"), Intent::Greeting);
    }

    #[test]
    fn word_boundary_matching_is_opt_in() {
        let resolver = resolver().with_match_mode(MatchMode::WordBoundary);
        assert_eq!(resolver.match_mode(), MatchMode::WordBoundary);
        assert_eq!(resolver.resolve_detailed("this chip").intent, Intent::NounTopic);
        assert_eq!(resolver.resolve_detailed("hi").intent, Intent::Greeting);
    }

    #[test]
    fn exactly_one_reply_per_turn() {
        let resolver = resolver();
        for text in ["", "hi", "bye", "42", "dog", "run", "whose", "..."] {
            assert!(!resolver.resolve(text).is_empty(), "empty reply for '{text}'");
        }
    }

    #[test]
    fn resolver_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IntentResolver>();
    }
}
