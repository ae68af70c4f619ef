use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

/// Configuration used when no file is given
///
/// Reads both provider credentials from the process environment.
const DEFAULT_CONFIG: &str = r#"
[llm]
api_key = "{{ env.OPENAI_API_KEY | default("") }}"

[tts]
api_key = "{{ env.ELEVENLABS_API_KEY | default("") }}"
"#;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, variable expansion
    /// fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        tracing::debug!(path = %path.display(), "loading configuration");

        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml_str(&raw)
    }

    /// Load from `path` when given, otherwise from the environment-only defaults
    ///
    /// # Errors
    ///
    /// See [`Config::load`]
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::from_toml_str(DEFAULT_CONFIG),
        }
    }

    /// Parse and validate configuration text
    ///
    /// # Errors
    ///
    /// Returns an error if variable expansion, parsing, or validation fails
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let mut config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.normalize();
        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the speech credential is missing or a provider
    /// setting is out of range
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_tts_config()?;
        self.validate_llm_config()?;
        self.validate_telemetry_config()?;
        Ok(())
    }

    /// Treat an empty summarizer key (e.g. an unset variable with an empty
    /// default) as no key at all
    fn normalize(&mut self) {
        if self
            .llm
            .api_key
            .as_ref()
            .is_some_and(|key| key.expose_secret().trim().is_empty())
        {
            self.llm.api_key = None;
        }
    }

    fn validate_tts_config(&self) -> anyhow::Result<()> {
        let has_key = self
            .tts
            .api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty());

        if !has_key {
            anyhow::bail!("tts.api_key must be set (ELEVENLABS_API_KEY is not set in the environment)");
        }

        if self.tts.models.is_empty() {
            anyhow::bail!("tts.models must list at least one model");
        }

        if let Some(blank) = self.tts.models.iter().position(|model| model.trim().is_empty()) {
            anyhow::bail!("tts.models[{blank}] must not be empty");
        }

        for (alias, voice_id) in &self.tts.voices {
            if voice_id.trim().is_empty() {
                anyhow::bail!("tts.voices.{alias} must not be empty");
            }
        }

        let settings = self.tts.voice_settings;
        for (name, value) in [
            ("stability", settings.stability),
            ("similarity_boost", settings.similarity_boost),
        ] {
            if !(0.0..=1.0).contains(&value) {
                anyhow::bail!("tts.voice_settings.{name} must be between 0.0 and 1.0, got {value}");
            }
        }

        Ok(())
    }

    fn validate_llm_config(&self) -> anyhow::Result<()> {
        if self.llm.model.trim().is_empty() {
            anyhow::bail!("llm.model must not be empty");
        }

        if let Some(temperature) = self.llm.temperature
            && !(0.0..=2.0).contains(&temperature)
        {
            anyhow::bail!("llm.temperature must be between 0.0 and 2.0, got {temperature}");
        }

        Ok(())
    }

    fn validate_telemetry_config(&self) -> anyhow::Result<()> {
        if let Some(ref telemetry) = self.telemetry
            && !(0.0..=1.0).contains(&telemetry.sampling_rate)
        {
            anyhow::bail!(
                "telemetry.sampling_rate must be between 0.0 and 1.0, got {}",
                telemetry.sampling_rate
            );
        }

        Ok(())
    }
}
