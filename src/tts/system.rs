//! System TTS engine (espeak-ng, with spd-say as fallback)

use super::{TtsEngine, Utterance, Voice};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// espeak-ng words per minute at rate 1.0
const ESPEAK_BASE_WPM: f32 = 175.0;
/// espeak-ng pitch at 1.0 (range 0-99)
const ESPEAK_BASE_PITCH: f32 = 50.0;
/// espeak-ng amplitude at volume 1.0
const ESPEAK_MAX_AMPLITUDE: f32 = 100.0;

#[derive(Debug)]
pub struct SystemEngine;

impl Default for SystemEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TtsEngine for SystemEngine {
    async fn speak(&self, utterance: &Utterance) -> Result<()> {
        debug!("System speaking: {}", utterance.text);

        if espeak_command(utterance).spawn().is_ok() {
            return Ok(());
        }

        if spd_say_command(utterance).spawn().is_ok() {
            return Ok(());
        }

        Err(anyhow::anyhow!(
            "No system TTS command found (tried espeak-ng, spd-say)"
        ))
    }

    async fn voices(&self) -> Result<Vec<Voice>> {
        match Command::new("espeak-ng")
            .arg("--voices")
            .output()
            .await
        {
            Ok(output) if output.status.success() => {
                Ok(parse_espeak_voices(&String::from_utf8_lossy(&output.stdout)))
            }
            _ => {
                // spd-say has no usable voice listing; expose its default voice
                Command::new("spd-say")
                    .arg("--version")
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status()
                    .await
                    .context("Neither espeak-ng nor spd-say is installed")?;
                Ok(vec![Voice::new("default", "Speech Dispatcher default", "en-US")])
            }
        }
    }

    fn name(&self) -> &str {
        "system"
    }
}

fn espeak_command(utterance: &Utterance) -> Command {
    let mut cmd = Command::new("espeak-ng");
    cmd.arg("-v")
        .arg(&utterance.voice.id)
        .arg("-s")
        .arg(format!("{}", (ESPEAK_BASE_WPM * utterance.rate).round() as u32))
        .arg("-p")
        .arg(format!(
            "{}",
            (ESPEAK_BASE_PITCH * utterance.pitch).clamp(0.0, 99.0).round() as u32
        ))
        .arg("-a")
        .arg(format!(
            "{}",
            (ESPEAK_MAX_AMPLITUDE * utterance.volume).clamp(0.0, 200.0).round() as u32
        ))
        .arg(&utterance.text)
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    cmd
}

fn spd_say_command(utterance: &Utterance) -> Command {
    // spd-say takes -100..=100 with 0 as neutral
    let relative = |v: f32| format!("{}", ((v - 1.0) * 100.0).clamp(-100.0, 100.0).round() as i32);

    let mut cmd = Command::new("spd-say");
    cmd.arg("-l")
        .arg(&utterance.lang)
        .arg("-r")
        .arg(relative(utterance.rate))
        .arg("-p")
        .arg(relative(utterance.pitch))
        .arg("-i")
        .arg(relative(utterance.volume))
        .arg(&utterance.text)
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    cmd
}

/// Parse the table printed by `espeak-ng --voices`
///
/// ```text
/// Pty Language       Age/Gender VoiceName          File                 Other Languages
///  2  en-us           --/M      English_(America)  gmw/en-US
/// ```
pub fn parse_espeak_voices(output: &str) -> Vec<Voice> {
    output
        .lines()
        .skip_while(|line| !line.trim_start().starts_with("Pty"))
        .skip(1)
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 4 {
                return None;
            }

            let lang = fields[1];
            let gender = match fields[2].rsplit('/').next() {
                Some("M") => "male",
                Some("F") => "female",
                _ => "",
            };
            let base = fields[3].replace('_', " ");
            let name = if gender.is_empty() {
                base
            } else {
                format!("{}, {}", base, gender)
            };

            Some(Voice::new(lang, name, lang))
        })
        .collect()
}
