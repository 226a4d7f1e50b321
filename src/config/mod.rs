pub mod schema;

pub use schema::{
    config_schema_json, Config, EngineConfig, MatchMode, NlpConfig, SalaryConfig, SalaryMode,
    TranscriptConfig,
};
