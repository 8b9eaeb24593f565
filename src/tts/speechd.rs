//! Speechd-ng TTS backend using D-Bus
//!
//! The service picks its own voice, so a single default voice is exposed.

use crate::tts::{TtsEngine, Utterance, Voice};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info, warn};
use zbus::{proxy, Connection};

#[proxy(
    interface = "org.speech.Service",
    default_service = "org.speech.Service",
    default_path = "/org/speech/Service"
)]
trait SpeechService {
    fn speak(&self, text: &str) -> zbus::Result<()>;
    fn ping(&self) -> zbus::Result<String>;
}

pub struct SpeechdEngine {
    proxy: SpeechServiceProxy<'static>,
}

impl std::fmt::Debug for SpeechdEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechdEngine").finish()
    }
}

impl SpeechdEngine {
    pub async fn connect() -> Result<Self> {
        let connection = Connection::session().await?;
        let proxy = SpeechServiceProxy::new(&connection).await?;

        match proxy.ping().await {
            Ok(response) => {
                info!("🔊 Connected to speechd-ng: {}", response);
            }
            Err(e) => {
                warn!("⚠️ speechd-ng not responding: {}", e);
                return Err(anyhow::anyhow!("speechd-ng not responding: {}", e));
            }
        }

        Ok(Self { proxy })
    }
}

#[async_trait]
impl TtsEngine for SpeechdEngine {
    async fn speak(&self, utterance: &Utterance) -> Result<()> {
        debug!("speechd-ng speaking: {}", utterance.text);
        self.proxy.speak(&utterance.text).await?;
        Ok(())
    }

    async fn voices(&self) -> Result<Vec<Voice>> {
        Ok(vec![Voice::new("default", "speechd-ng default", "en-US")])
    }

    fn name(&self) -> &str {
        "speechd_ng"
    }
}
