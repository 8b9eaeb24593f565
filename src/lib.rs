//! Friday Library
//!
//! Core modules for the Friday voice assistant.

pub mod asr;
pub mod audio;
pub mod browser;
pub mod commands;
pub mod config;
pub mod directory;
pub mod error;
pub mod gui;
pub mod lookup;
pub mod tts;
