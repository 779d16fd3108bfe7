//! services/game/src/adapters/openai.rs
//!
//! This module contains the adapter for the OpenAI embedding and word
//! generation APIs. It implements the `EmbeddingProvider` port from the
//! `core` crate.

const WORD_PROMPT: &str = r#"
You are a word generator.
You are given a date and you need to generate a word for that date.
The word should be a single word that is related to the date.
The word should be a single word that is a common word.
The word should be a single word that is NOT a proper noun.
Just return the word, nothing else.
Day: {day}
Word:
"#;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestSystemMessageArgs, CreateChatCompletionRequestArgs,
        CreateEmbeddingRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use word_guess_core::ports::{EmbeddingProvider, PortError, PortResult};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements the `EmbeddingProvider` port using the OpenAI
/// embeddings endpoint, plus a small chat completion for generating the word
/// of the day when the calendar has no entry.
#[derive(Clone)]
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    embedding_model: String,
    word_model: String,
}

impl OpenAiProvider {
    /// Creates a new `OpenAiProvider`.
    pub fn new(
        client: Client<OpenAIConfig>,
        embedding_model: String,
        word_model: String,
    ) -> Self {
        Self {
            client,
            embedding_model,
            word_model,
        }
    }
}

//=========================================================================================
// `EmbeddingProvider` Trait Implementation
//=========================================================================================

#[async_trait]
impl EmbeddingProvider for OpenAiProvider {
    /// Embeds a single word. The API's f32 components widen to the f64s the
    /// core stores and scores with.
    async fn embed(&self, word: &str) -> PortResult<Vec<f64>> {
        let request = CreateEmbeddingRequestArgs::default()
            .model(&self.embedding_model)
            .input(word)
            .build()
            .map_err(|e| PortError::Provider(e.to_string()))?;

        // Call the API and manually map the error, which respects the orphan rule.
        let response = self
            .client
            .embeddings()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Provider(e.to_string()))?;

        let data = response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| PortError::Provider("Failed to embed word".to_string()))?;

        Ok(data.embedding.into_iter().map(f64::from).collect())
    }

    /// Asks the chat model for the day's word. The core normalizes the
    /// result and rejects empty output.
    async fn generate_word(&self, date_stamp: &str) -> PortResult<String> {
        let messages = vec![ChatCompletionRequestSystemMessageArgs::default()
            .content(WORD_PROMPT.replace("{day}", date_stamp))
            .build()
            .map_err(|e| PortError::Provider(e.to_string()))?
            .into()];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.word_model)
            .max_tokens(4u32)
            .messages(messages)
            .build()
            .map_err(|e| PortError::Provider(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Provider(e.to_string()))?;

        // Extract the text content from the first choice in the response.
        if let Some(choice) = response.choices.into_iter().next() {
            if let Some(content) = choice.message.content {
                Ok(content)
            } else {
                Err(PortError::Provider(
                    "Word generation response contained no text content.".to_string(),
                ))
            }
        } else {
            Err(PortError::Provider(
                "Word generation returned no choices in its response.".to_string(),
            ))
        }
    }
}
