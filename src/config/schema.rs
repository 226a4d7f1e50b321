use anyhow::{Context, Result};
use directories::UserDirs;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-user data directory under `$HOME`.
const DATA_DIR_NAME: &str = ".chatmine";

/// Default model artifact file name, resolved against the workspace dir.
const DEFAULT_MODEL_FILE: &str = "salary_model.json";

/// Model artifact shipped with the binary, installed on first run.
const BUNDLED_MODEL: &str = include_str!("../../models/salary_model.json");

/// Default transcript database file name.
const DEFAULT_TRANSCRIPT_FILE: &str = "transcript.db";

// ── Top-level config ─────────────────────────────────────────────

/// Top-level `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Path this config was loaded from (not serialized).
    #[serde(skip)]
    #[schemars(skip)]
    pub config_path: PathBuf,
    /// Directory holding the model artifact and transcript (not serialized).
    #[serde(skip)]
    #[schemars(skip)]
    pub workspace_dir: PathBuf,

    #[serde(default)]
    pub nlp: NlpConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub salary: SalaryConfig,
    #[serde(default)]
    pub transcript: TranscriptConfig,
}

impl Default for Config {
    fn default() -> Self {
        let workspace_dir = default_workspace_dir();
        Self {
            config_path: workspace_dir.join("config.toml"),
            workspace_dir,
            nlp: NlpConfig::default(),
            engine: EngineConfig::default(),
            salary: SalaryConfig::default(),
            transcript: TranscriptConfig::default(),
        }
    }
}

// ── Sections ─────────────────────────────────────────────────────

/// Linguistic resource extensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct NlpConfig {
    /// Optional `word<TAB>TAG [TAG...]` file merged into the built-in lexicon.
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
    /// Words dropped in addition to the English stopword list.
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

/// How greeting and farewell phrases are found in the raw text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Plain substring containment ("hi" matches inside "this").
    #[default]
    Substring,
    /// Phrase must not be flanked by letters or digits.
    WordBoundary,
}

/// Intent resolver settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct EngineConfig {
    #[serde(default)]
    pub match_mode: MatchMode,
}

/// Whether the age/salary feature is advertised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SalaryMode {
    /// Refuse to start without a valid model.
    #[default]
    Required,
    /// Start anyway; age queries fall through as if no age was found.
    Optional,
    /// Never load the model.
    Disabled,
}

/// Salary model settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SalaryConfig {
    #[serde(default)]
    pub mode: SalaryMode,
    /// JSON model artifact. Relative paths resolve against the workspace dir.
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
}

impl Default for SalaryConfig {
    fn default() -> Self {
        Self {
            mode: SalaryMode::default(),
            model_path: default_model_path(),
        }
    }
}

/// Conversation transcript settings (used by the CLI, not the engine).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TranscriptConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// SQLite file. Relative paths resolve against the workspace dir.
    #[serde(default = "default_transcript_path")]
    pub db_path: PathBuf,
    /// Oldest turns beyond this count are pruned on append. `0` keeps everything.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            db_path: default_transcript_path(),
            max_entries: default_max_entries(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_FILE)
}

fn default_transcript_path() -> PathBuf {
    PathBuf::from(DEFAULT_TRANSCRIPT_FILE)
}

fn default_max_entries() -> usize {
    1000
}

fn default_workspace_dir() -> PathBuf {
    UserDirs::new()
        .map(|u| u.home_dir().join(DATA_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(DATA_DIR_NAME))
}

// ── Loading ──────────────────────────────────────────────────────

impl Config {
    /// Load `~/.chatmine/config.toml`, writing the defaults on first run.
    pub fn load_or_init() -> Result<Self> {
        let path = default_workspace_dir().join("config.toml");
        Self::load_or_init_at(&path)
    }

    /// Load the config at `path`, writing the defaults there if it is missing.
    pub fn load_or_init_at(path: &Path) -> Result<Self> {
        let workspace_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            toml::from_str::<Config>(&contents)
                .with_context(|| format!("Failed to parse config: {}", path.display()))?
        } else {
            std::fs::create_dir_all(&workspace_dir).with_context(|| {
                format!("Failed to create config dir: {}", workspace_dir.display())
            })?;
            let defaults = Config::default();
            let rendered =
                toml::to_string_pretty(&defaults).context("Failed to serialize default config")?;
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write config: {}", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote default config");
            install_bundled_model(&workspace_dir)?;
            defaults
        };

        config.config_path = path.to_path_buf();
        config.workspace_dir = workspace_dir;
        config.resolve_paths();
        Ok(config)
    }

    /// Make relative file paths absolute against the workspace dir.
    fn resolve_paths(&mut self) {
        let base = self.workspace_dir.clone();
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.salary.model_path);
        resolve(&mut self.transcript.db_path);
        if let Some(lexicon) = self.nlp.lexicon_path.as_mut() {
            resolve(lexicon);
        }
    }

    /// Render the effective config as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// JSON schema of `config.toml`.
pub fn config_schema_json() -> Result<String> {
    let schema = schemars::schema_for!(Config);
    serde_json::to_string_pretty(&schema).context("Failed to serialize config schema")
}

/// Write the bundled model where the default config expects it. An
/// existing file is left alone.
fn install_bundled_model(workspace_dir: &Path) -> Result<()> {
    let model_path = workspace_dir.join(DEFAULT_MODEL_FILE);
    if model_path.exists() {
        return Ok(());
    }
    std::fs::write(&model_path, BUNDLED_MODEL)
        .with_context(|| format!("Failed to write model: {}", model_path.display()))?;
    tracing::info!(path = %model_path.display(), "Installed bundled salary model");
    Ok(())
}
