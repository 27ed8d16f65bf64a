//! Google Translate text-to-speech client
//!
//! The endpoint accepts short snippets only, so narration is split into
//! word-aligned chunks and the returned MPEG frames are concatenated.
//! Uses a long-lived reqwest::Client for connection pooling.

use super::{AudioArtifact, SpeechSynthesizer};
use crate::error::AdvisorError;
use crate::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info};

pub const DEFAULT_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// Longest snippet the endpoint accepts, in characters
const MAX_CHUNK_CHARS: usize = 100;

/// Reusable TTS client (connection-pooled)
pub struct GoogleTts {
    client: Client,
    endpoint: String,
}

impl GoogleTts {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(8)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, endpoint })
    }

    async fn fetch_chunk(
        &self,
        chunk: &str,
        language: &str,
        idx: usize,
        total: usize,
    ) -> Result<Vec<u8>> {
        let idx = idx.to_string();
        let total = total.to_string();
        let textlen = chunk.chars().count().to_string();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("q", chunk),
                ("tl", language),
                ("client", "tw-ob"),
                ("total", total.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("TTS request failed: {}", e);
                AdvisorError::SynthesisError(format!("TTS request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(%status, "TTS error response: {}", error_text);
            return Err(AdvisorError::SynthesisError(format!(
                "TTS endpoint returned {}",
                status
            )));
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!("TTS response body unreadable: {}", e);
            AdvisorError::SynthesisError(format!("TTS response body unreadable: {}", e))
        })?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTts {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn synthesize(&self, text: &str, language: &str) -> Result<AudioArtifact> {
        if language.trim().is_empty() {
            return Err(AdvisorError::SynthesisError(
                "Language must not be empty".to_string(),
            ));
        }

        let chunks = chunk_text(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(AdvisorError::SynthesisError(
                "No text to synthesize".to_string(),
            ));
        }

        info!(chunks = chunks.len(), language, "Calling TTS endpoint");

        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let bytes = self.fetch_chunk(chunk, language, idx, chunks.len()).await?;
            debug!(idx, bytes = bytes.len(), "TTS chunk received");
            audio.extend_from_slice(&bytes);
        }

        if audio.is_empty() {
            return Err(AdvisorError::SynthesisError(
                "TTS endpoint returned no audio".to_string(),
            ));
        }

        Ok(AudioArtifact::mp3(audio))
    }
}

/// Split `text` into word-aligned pieces of at most `max_chars` characters.
/// Words longer than `max_chars` are split mid-word.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_len = needed;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunks_respect_limit_and_keep_words() {
        let text = "Build an emergency fund of at least three months of expenses.\n\
                    Invest in low-risk assets like government bonds or fixed deposits.";
        let chunks = chunk_text(text, 40);

        assert!(chunks.iter().all(|c| c.chars().count() <= 40));
        assert_eq!(
            chunks.join(" "),
            text.split_whitespace().collect::<Vec<_>>().join(" ")
        );
    }

    #[test]
    fn test_long_word_is_hard_split() {
        let chunks = chunk_text("ab abcdefgh cd", 3);
        assert_eq!(chunks, vec!["ab", "abc", "def", "gh", "cd"]);
    }

    #[test]
    fn test_blank_text_yields_no_chunks() {
        assert!(chunk_text("   \n\t", 100).is_empty());
    }

    #[test]
    fn test_multibyte_counts_chars() {
        let chunks = chunk_text("ééé ééé", 3);
        assert_eq!(chunks, vec!["ééé", "ééé"]);
    }

    #[tokio::test]
    async fn test_empty_text_is_rejected_without_request() {
        // Unroutable endpoint: the call must fail before any I/O
        let tts = GoogleTts::new("http://127.0.0.1:9".to_string(), Duration::from_secs(1)).unwrap();
        let result = tts.synthesize("", "en").await;
        match result {
            Err(AdvisorError::SynthesisError(msg)) => assert!(msg.contains("No text")),
            other => panic!("unexpected result: {:?}", other.map(|a| a.len())),
        }
    }

    #[tokio::test]
    async fn test_truncated_body_is_synthesis_error() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        // Promises 100 bytes of audio, sends 3, then hangs up
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\nContent-Type: audio/mpeg\r\nContent-Length: 100\r\n\r\nID3",
                )
                .await;
            let _ = socket.shutdown().await;
        });

        let tts = GoogleTts::new(format!("http://{}/tts", addr), Duration::from_secs(5)).unwrap();
        let result = tts.synthesize("Hello there", "en").await;
        match result {
            Err(AdvisorError::SynthesisError(msg)) => assert!(msg.contains("body")),
            other => panic!("unexpected result: {:?}", other.map(|a| a.len())),
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_synthesis_error() {
        let tts = GoogleTts::new("http://127.0.0.1:9".to_string(), Duration::from_secs(2)).unwrap();
        let result = tts.synthesize("Hello there", "en").await;
        assert!(matches!(result, Err(AdvisorError::SynthesisError(_))));
    }
}
