// src/config.rs
//! Analyzer configuration.
//!
//! The only option is the lexicon override. Resolution order:
//! 1) explicit path (CLI flag / caller)
//! 2) $SENTIMENT_LEXICON_PATH (must exist if set)
//! 3) config/lexicon.toml
//! 4) config/lexicon.json
//! 5) built-in lexicon

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::lexicon::Lexicon;

pub const ENV_LEXICON_PATH: &str = "SENTIMENT_LEXICON_PATH";
pub const DEFAULT_LEXICON_TOML: &str = "config/lexicon.toml";
pub const DEFAULT_LEXICON_JSON: &str = "config/lexicon.json";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Override file for the three token sets; `None` keeps the built-in lexicon.
    pub lexicon_path: Option<PathBuf>,
}

impl AnalyzerConfig {
    pub fn with_lexicon_path(path: impl Into<PathBuf>) -> Self {
        Self {
            lexicon_path: Some(path.into()),
        }
    }

    /// Resolve from env var + fallbacks (see module docs).
    pub fn from_env() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_LEXICON_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Ok(Self::with_lexicon_path(pb));
            }
            return Err(anyhow!(
                "{ENV_LEXICON_PATH} points to non-existent path {}",
                pb.display()
            ));
        }
        for candidate in [DEFAULT_LEXICON_TOML, DEFAULT_LEXICON_JSON] {
            let pb = PathBuf::from(candidate);
            if pb.exists() {
                return Ok(Self::with_lexicon_path(pb));
            }
        }
        Ok(Self::default())
    }

    /// Load the override lexicon, if one is configured.
    pub fn load_lexicon(&self) -> Result<Option<Lexicon>> {
        let Some(path) = self.lexicon_path.as_deref() else {
            return Ok(None);
        };
        let lex = Lexicon::load_from_file(path)?;
        log_loaded(path, &lex);
        Ok(Some(lex))
    }
}

fn log_loaded(path: &Path, lex: &Lexicon) {
    if lex.is_empty() {
        warn!(
            path = %path.display(),
            "lexicon override has no tokens; every text will use the fallback"
        );
    }
    info!(
        path = %path.display(),
        positive = lex.positive.len(),
        negative = lex.negative.len(),
        neutral = lex.neutral.len(),
        "loaded lexicon override"
    );
}
