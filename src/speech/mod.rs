//! Speech synthesis collaborator
//!
//! The advisors only produce text. A `SpeechSynthesizer` turns the final
//! narration into an audio artifact that the transport layer delivers and
//! then drops.

use crate::config::{AppConfig, TtsBackend};
use crate::error::AdvisorError;
use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub mod google;
pub use google::GoogleTts;

pub const MPEG_MEDIA_TYPE: &str = "audio/mpeg";
pub const DEFAULT_FILE_NAME: &str = "voice.mp3";

/// Synthesized audio for a single request, held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioArtifact {
    pub bytes: Vec<u8>,
    pub media_type: &'static str,
    pub file_name: String,
}

impl AudioArtifact {
    pub fn mp3(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            media_type: MPEG_MEDIA_TYPE,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Trait for text-to-speech backends
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn synthesize(&self, text: &str, language: &str) -> Result<AudioArtifact>;
}

/// Offline synthesizer for development & testing.
/// Output is a fake MPEG payload derived from the input, so identical text
/// yields identical bytes.
pub struct MockSynthesizer;

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn synthesize(&self, text: &str, language: &str) -> Result<AudioArtifact> {
        if text.trim().is_empty() {
            return Err(AdvisorError::SynthesisError(
                "No text to synthesize".to_string(),
            ));
        }

        let mut bytes = b"ID3".to_vec();
        bytes.extend_from_slice(format!("[{}]", language).as_bytes());
        bytes.extend_from_slice(text.as_bytes());

        Ok(AudioArtifact::mp3(bytes))
    }
}

/// Build the synthesizer selected by configuration
pub fn create_synthesizer(config: &AppConfig) -> Result<Arc<dyn SpeechSynthesizer>> {
    match config.tts_backend {
        TtsBackend::Google => Ok(Arc::new(GoogleTts::new(
            config.tts_endpoint.clone(),
            config.tts_timeout,
        )?)),
        TtsBackend::Mock => Ok(Arc::new(MockSynthesizer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_is_deterministic() {
        let first = tokio_test::block_on(MockSynthesizer.synthesize("Save more.", "en")).unwrap();
        let second = tokio_test::block_on(MockSynthesizer.synthesize("Save more.", "en")).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.media_type, MPEG_MEDIA_TYPE);
        assert_eq!(first.file_name, "voice.mp3");
        assert!(first.bytes.starts_with(b"ID3[en]"));
        assert!(!first.is_empty());
    }

    #[test]
    fn test_mock_rejects_blank_text() {
        let result = tokio_test::block_on(MockSynthesizer.synthesize("  \n", "en"));
        assert!(matches!(result, Err(AdvisorError::SynthesisError(_))));
    }

    #[test]
    fn test_create_mock_from_config() {
        let config = AppConfig {
            tts_backend: TtsBackend::Mock,
            ..AppConfig::default()
        };

        let synthesizer = create_synthesizer(&config).unwrap();
        assert_eq!(synthesizer.name(), "mock");
    }
}
