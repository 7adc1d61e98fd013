use crate::config::ChatConfig;
use crate::{Result, TutorError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Chat message for the completion endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Client for an OpenAI-compatible chat completion endpoint (Groq).
///
/// Treated as an opaque text-in/text-out collaborator: the question goes in
/// with a fixed system prompt, the assistant message text comes out.
pub struct ChatClient {
    config: ChatConfig,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl ChatClient {
    pub fn new(config: ChatConfig) -> Result<Self> {
        if config.api_key.is_none() {
            return Err(TutorError::Configuration(
                "chat API key required".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { config, client })
    }

    /// Send a question and return the assistant's answer text.
    pub async fn ask(&self, question: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| TutorError::Configuration("chat API key not set".to_string()))?;

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: self.config.system_prompt.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: question.to_string(),
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!("Sending chat request to {}", self.config.endpoint);

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TutorError::Api { status, body });
        }

        let chat_response: ChatResponse = response.json().await?;

        let content = chat_response
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .ok_or_else(|| {
                TutorError::MissingData("no choices in chat completion".to_string())
            })?;

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_request_shape() {
        let config = Config::default().chat;
        let request = ChatRequest {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: config.system_prompt.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: "How do list comprehensions work?".to_string(),
                },
            ],
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "llama3-8b-8192");
        assert_eq!(value["max_tokens"], 400);
        assert!((value["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
    }

    #[test]
    fn test_response_deserialization() {
        let payload = r#"{
            "choices": [
                { "message": { "role": "assistant", "content": "Use a for loop." } }
            ]
        }"#;
        let parsed: ChatResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Use a for loop.");
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let config = Config::default().chat;
        assert!(matches!(
            ChatClient::new(config),
            Err(TutorError::Configuration(_))
        ));
    }
}
