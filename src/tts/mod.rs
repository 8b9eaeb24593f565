//! TTS (Text-to-Speech) Module
//!
//! Backends implement [`TtsEngine`]; [`SpeechOutput`] sits in front of them,
//! owns the loaded voice list and picks a voice for every request.

use crate::config::Config;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

pub mod speechd;
pub mod system;

/// Language used when the selected voice does not carry one
pub const DEFAULT_LANG: &str = "en-US";

/// A synthesis voice as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    /// Backend identifier used to request this voice
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// BCP 47 style language tag, e.g. "en-gb"
    pub lang: String,
}

impl Voice {
    pub fn new(id: impl Into<String>, name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lang: lang.into(),
        }
    }

    fn is_english(&self) -> bool {
        self.lang.to_lowercase().starts_with("en-")
    }

    /// Whole-word match on the name, so "Female" voices never count as male
    fn is_male(&self) -> bool {
        self.name
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| word == "male")
    }
}

/// One speak request
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub voice: Voice,
    pub lang: String,
    /// 1.0 is the engine's normal speed
    pub rate: f32,
    /// 1.0 is the engine's normal pitch
    pub pitch: f32,
    /// 0.0..=1.0
    pub volume: f32,
}

impl Utterance {
    pub fn new(text: &str, voice: &Voice) -> Self {
        let lang = if voice.lang.is_empty() {
            DEFAULT_LANG.to_string()
        } else {
            voice.lang.clone()
        };

        Self {
            text: text.to_string(),
            voice: voice.clone(),
            lang,
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

/// Trait for TTS engines
#[async_trait]
pub trait TtsEngine: Send + Sync + std::fmt::Debug {
    /// Speak the utterance. Returns once playback has been handed off.
    async fn speak(&self, utterance: &Utterance) -> Result<()>;

    /// Voices currently offered by the engine
    async fn voices(&self) -> Result<Vec<Voice>>;

    /// Get the engine name
    fn name(&self) -> &str;
}

/// Speech output seam used by the dispatcher
#[async_trait]
pub trait Speaker: Send + Sync {
    /// Fire-and-forget; failures are logged, never returned
    async fn speak(&self, text: &str);
}

/// Voice precedence: English male, then any English, then the first voice.
pub fn select_voice(voices: &[Voice]) -> Option<&Voice> {
    voices
        .iter()
        .find(|v| v.is_english() && v.is_male())
        .or_else(|| voices.iter().find(|v| v.is_english()))
        .or_else(|| voices.first())
}

/// Speech output service: engine + loaded voices
#[derive(Debug)]
pub struct SpeechOutput {
    engine: Arc<dyn TtsEngine>,
    voices: RwLock<Vec<Voice>>,
}

impl SpeechOutput {
    /// Create with no voices loaded; call [`SpeechOutput::load_voices`] next.
    pub fn new(engine: Arc<dyn TtsEngine>) -> Self {
        Self {
            engine,
            voices: RwLock::new(Vec::new()),
        }
    }

    /// Create the configured engine and load its voices
    pub async fn start(config: &Config) -> Arc<Self> {
        let output = Self::new(create_engine(config).await);
        output.load_voices().await;
        Arc::new(output)
    }

    /// Re-query the engine's voices. Returns how many are loaded.
    pub async fn load_voices(&self) -> usize {
        let loaded = match self.engine.voices().await {
            Ok(voices) => voices,
            Err(e) => {
                warn!("⚠️ Could not list voices from '{}': {}", self.engine.name(), e);
                Vec::new()
            }
        };

        let count = loaded.len();
        match self.voices.write() {
            Ok(mut voices) => *voices = loaded,
            Err(poisoned) => *poisoned.into_inner() = loaded,
        }
        info!("🗣️ Loaded {} voice(s) from '{}'", count, self.engine.name());
        count
    }

    pub fn voice_count(&self) -> usize {
        self.voices.read().map(|v| v.len()).unwrap_or(0)
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Build the utterance for `text`, or `None` when no voice is loaded
    pub fn prepare(&self, text: &str) -> Option<Utterance> {
        let voices = match self.voices.read() {
            Ok(voices) => voices,
            Err(poisoned) => poisoned.into_inner(),
        };
        select_voice(&voices).map(|voice| Utterance::new(text, voice))
    }
}

#[async_trait]
impl Speaker for SpeechOutput {
    async fn speak(&self, text: &str) {
        let Some(utterance) = self.prepare(text) else {
            warn!("🔇 No voice available yet, skipping: '{}'", text);
            return;
        };

        debug!(
            "📢 Speaking with '{}' ({}): '{}'",
            utterance.voice.name, utterance.lang, text
        );
        if let Err(e) = self.engine.speak(&utterance).await {
            warn!("❌ TTS engine '{}' failed: {}", self.engine.name(), e);
        }
    }
}

/// Factory to create the configured TTS engine
pub async fn create_engine(config: &Config) -> Arc<dyn TtsEngine> {
    info!("🛠️ Creating TTS engine: {}", config.tts_engine);
    let engine: Arc<dyn TtsEngine> = match config.tts_engine.as_str() {
        "speechd_ng" | "speechd" => match speechd::SpeechdEngine::connect().await {
            Ok(client) => Arc::new(client),
            Err(e) => {
                warn!("  - Speechd unavailable ({}), falling back to System", e);
                Arc::new(system::SystemEngine::new())
            }
        },
        "system" => Arc::new(system::SystemEngine::new()),
        other => {
            warn!("  - Unknown engine '{}', falling back to System", other);
            Arc::new(system::SystemEngine::new())
        }
    };
    info!("✅ TTS engine '{}' initialized", engine.name());
    engine
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingEngine {
        voices: Vec<Voice>,
        spoken: Mutex<Vec<Utterance>>,
    }

    #[async_trait]
    impl TtsEngine for RecordingEngine {
        async fn speak(&self, utterance: &Utterance) -> Result<()> {
            self.spoken.lock().unwrap().push(utterance.clone());
            Ok(())
        }

        async fn voices(&self) -> Result<Vec<Voice>> {
            Ok(self.voices.clone())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    fn voices() -> Vec<Voice> {
        vec![
            Voice::new("de", "German (male)", "de-de"),
            Voice::new("en-gb-f", "English UK (female)", "en-gb"),
            Voice::new("en-us-m", "English US (male)", "en-us"),
        ]
    }

    #[test]
    fn test_select_english_male_first() {
        let v = voices();
        assert_eq!(select_voice(&v).unwrap().id, "en-us-m");
    }

    #[test]
    fn test_female_is_not_male() {
        let v = vec![
            Voice::new("f", "Samantha Female", "en-us"),
            Voice::new("m", "Daniel Male", "en-gb"),
        ];
        assert_eq!(select_voice(&v).unwrap().id, "m");
    }

    #[test]
    fn test_select_any_english_second() {
        let v = vec![
            Voice::new("fr", "French (male)", "fr-fr"),
            Voice::new("en", "English", "en-au"),
        ];
        assert_eq!(select_voice(&v).unwrap().id, "en");
    }

    #[test]
    fn test_bare_en_is_not_regional_english() {
        let v = vec![
            Voice::new("en", "English (male)", "en"),
            Voice::new("es", "Spanish", "es-es"),
        ];
        // Neither tag starts with "en-", so the first voice is used
        assert_eq!(select_voice(&v).unwrap().id, "en");
    }

    #[test]
    fn test_select_first_overall_last() {
        let v = vec![
            Voice::new("fr", "French", "fr-fr"),
            Voice::new("de", "German", "de-de"),
        ];
        assert_eq!(select_voice(&v).unwrap().id, "fr");
        assert!(select_voice(&[]).is_none());
    }

    #[test]
    fn test_utterance_defaults() {
        let voice = Voice::new("x", "Nameless", "");
        let u = Utterance::new("hi", &voice);
        assert_eq!(u.lang, DEFAULT_LANG);
        assert_eq!(u.rate, 1.0);
        assert_eq!(u.pitch, 1.0);
        assert_eq!(u.volume, 1.0);
    }

    #[test]
    fn test_speak_without_voices_is_noop() {
        let engine = Arc::new(RecordingEngine::default());
        let output = SpeechOutput::new(engine.clone());

        tokio_test::block_on(output.speak("hello"));
        assert!(engine.spoken.lock().unwrap().is_empty());
        assert_eq!(output.voice_count(), 0);
    }

    #[tokio::test]
    async fn test_speak_uses_selected_voice() {
        let engine = Arc::new(RecordingEngine {
            voices: voices(),
            ..Default::default()
        });
        let output = SpeechOutput::new(engine.clone());
        assert_eq!(output.load_voices().await, 3);

        output.speak("Opening github").await;
        let spoken = engine.spoken.lock().unwrap();
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0].text, "Opening github");
        assert_eq!(spoken[0].voice.id, "en-us-m");
        assert_eq!(spoken[0].lang, "en-us");
    }
}
