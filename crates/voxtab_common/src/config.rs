//! Voxtab configuration
//!
//! Configuration lives in `~/.config/voxtab/config.toml`. Every field has a
//! default so a missing file means a working assistant; a malformed file is
//! an error, not a silent fallback.
//!
//! The entity-extraction credential is injected here (file or the
//! `VOXTAB_LANGUAGE_API_KEY` environment variable), never embedded in
//! source.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "voxtab";
const CONFIG_FILE: &str = "config.toml";

/// Environment override for the entity-extraction API key.
pub const LANGUAGE_API_KEY_ENV: &str = "VOXTAB_LANGUAGE_API_KEY";

/// Entity-extraction service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageApiSettings {
    /// POST endpoint for entity analysis.
    #[serde(default = "default_language_endpoint")]
    pub endpoint: String,

    /// API key, sent as the `key` query parameter. Empty means the
    /// environment variable is consulted at load time.
    #[serde(default)]
    pub api_key: String,
}

/// Question-answering service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerSettings {
    /// GET endpoint; `q` and `format=json` are appended per query.
    #[serde(default = "default_answers_endpoint")]
    pub endpoint: String,
}

/// Search engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Base search URL; the URL-encoded query is appended as `q`.
    #[serde(default = "default_search_url")]
    pub url: String,
}

/// Media settings for the "play music" command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaSettings {
    #[serde(default = "default_music_url")]
    pub music_url: String,
}

/// Speech synthesis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechSettings {
    /// Synthesizer program spawned per spoken message.
    #[serde(default = "default_synth_command")]
    pub synth_command: String,

    /// Words per minute passed to the synthesizer.
    #[serde(default = "default_speech_rate")]
    pub rate: u32,
}

fn default_language_endpoint() -> String {
    "https://language.googleapis.com/v1beta2/documents:analyzeEntities".to_string()
}

fn default_answers_endpoint() -> String {
    "https://api.duckduckgo.com/".to_string()
}

fn default_search_url() -> String {
    "https://www.google.com/search".to_string()
}

fn default_music_url() -> String {
    "https://open.spotify.com/track/5FuEhQ674excghjJ6WNkFj?si=a18008f53fad46e5".to_string()
}

fn default_synth_command() -> String {
    "espeak".to_string()
}

fn default_speech_rate() -> u32 {
    175
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoxtabConfig {
    #[serde(default = "default_language_api")]
    pub language_api: LanguageApiSettings,

    #[serde(default = "default_answers")]
    pub answers: AnswerSettings,

    #[serde(default = "default_search")]
    pub search: SearchSettings,

    #[serde(default = "default_media")]
    pub media: MediaSettings,

    #[serde(default = "default_speech")]
    pub speech: SpeechSettings,
}

fn default_language_api() -> LanguageApiSettings {
    LanguageApiSettings {
        endpoint: default_language_endpoint(),
        api_key: String::new(),
    }
}

fn default_answers() -> AnswerSettings {
    AnswerSettings {
        endpoint: default_answers_endpoint(),
    }
}

fn default_search() -> SearchSettings {
    SearchSettings {
        url: default_search_url(),
    }
}

fn default_media() -> MediaSettings {
    MediaSettings {
        music_url: default_music_url(),
    }
}

fn default_speech() -> SpeechSettings {
    SpeechSettings {
        synth_command: default_synth_command(),
        rate: default_speech_rate(),
    }
}

impl Default for VoxtabConfig {
    fn default() -> Self {
        Self {
            language_api: default_language_api(),
            answers: default_answers(),
            search: default_search(),
            media: default_media(),
            speech: default_speech(),
        }
    }
}

impl VoxtabConfig {
    /// Default config file path under the XDG config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist. The environment key override applies in both
    /// cases.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                let mut config = Self::default();
                config.apply_env_overrides();
                Ok(config)
            }
        }
    }

    /// Load from an explicit path. The file must exist and parse.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: VoxtabConfig = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(LANGUAGE_API_KEY_ENV) {
            if !key.is_empty() {
                self.language_api.api_key = key;
            }
        }
    }

    /// Serialized form with the credential redacted, for `voxtab config`.
    pub fn redacted_toml(&self) -> Result<String> {
        let mut shown = self.clone();
        if !shown.language_api.api_key.is_empty() {
            shown.language_api.api_key = "<redacted>".to_string();
        }
        toml::to_string_pretty(&shown).context("Failed to serialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_section() {
        let config: VoxtabConfig = toml::from_str("").unwrap();
        assert!(config.language_api.endpoint.contains("analyzeEntities"));
        assert!(config.answers.endpoint.contains("duckduckgo"));
        assert!(config.search.url.contains("google"));
        assert_eq!(config.speech.synth_command, "espeak");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config: VoxtabConfig = toml::from_str(
            r#"
            [speech]
            synth_command = "say"
            "#,
        )
        .unwrap();
        assert_eq!(config.speech.synth_command, "say");
        assert_eq!(config.speech.rate, 175);
        assert!(config.search.url.contains("google"));
    }

    #[test]
    fn test_load_from_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [language_api]
            api_key = "k-123"

            [media]
            music_url = "https://example.com/track"
            "#,
        )
        .unwrap();

        let config = VoxtabConfig::load_from(&path).unwrap();
        assert_eq!(config.media.music_url, "https://example.com/track");
        // Key comes from the file unless the env override is set.
        if std::env::var(LANGUAGE_API_KEY_ENV).is_err() {
            assert_eq!(config.language_api.api_key, "k-123");
        }
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not = [valid").unwrap();
        assert!(VoxtabConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_redacted_toml_hides_key() {
        let mut config = VoxtabConfig::default();
        config.language_api.api_key = "secret".to_string();
        let shown = config.redacted_toml().unwrap();
        assert!(!shown.contains("secret"));
        assert!(shown.contains("<redacted>"));
    }
}
