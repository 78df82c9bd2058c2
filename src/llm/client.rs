use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Default model for all pipeline stages
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Configuration for the Groq API client
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API key (from GROQ_API_KEY env var)
    pub api_key: String,
    /// Model to use (e.g., "llama-3.1-8b-instant")
    pub model: String,
    /// Temperature (0-2, lower = more deterministic)
    pub temperature: f64,
    /// Maximum tokens in response
    pub max_tokens: u32,
}

impl GroqConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .context("GROQ_API_KEY environment variable not set")?;

        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.4,
            max_tokens: 8192,
        })
    }

    /// Create with custom settings
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            temperature: 0.4,
            max_tokens: 8192,
        }
    }
}

/// Token counts reported by the API for a single completion
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

impl Usage {
    /// Accumulate another completion's counts into this total
    pub fn merge(&mut self, other: Usage) {
        self.prompt_tokens += other.prompt_tokens;
        self.completion_tokens += other.completion_tokens;
        self.total_tokens += other.total_tokens;
    }
}

/// Assistant text plus token accounting for one chat call
#[derive(Debug, Clone)]
pub struct ChatCompletion {
    pub content: String,
    pub usage: Usage,
}

/// Groq chat completions client (OpenAI-compatible API)
pub struct GroqClient {
    client: Client,
    config: GroqConfig,
}

impl GroqClient {
    pub fn new(config: GroqConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Model name this client sends with every request
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send a system + user prompt pair and get the assistant's reply
    pub async fn chat(&self, system: &str, user: &str) -> Result<ChatCompletion> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            temperature: Some(self.config.temperature),
            max_tokens: self.config.max_tokens,
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
        };

        let response = self
            .client
            .post("https://api.groq.com/openai/v1/chat/completions")
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Groq API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Groq API error: {} - {}", status, body);
        }

        let response: ChatResponse = response
            .json()
            .await
            .context("Failed to parse Groq API response")?;

        let usage = response.usage;
        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .context("No completion content in response")?;

        Ok(ChatCompletion { content, usage })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_merge() {
        let mut total = Usage::default();
        total.merge(Usage {
            prompt_tokens: 100,
            completion_tokens: 40,
            total_tokens: 140,
        });
        total.merge(Usage {
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: 15,
        });

        assert_eq!(total.prompt_tokens, 110);
        assert_eq!(total.completion_tokens, 45);
        assert_eq!(total.total_tokens, 155);
    }

    #[test]
    fn test_parse_chat_response() {
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "Hello there"},
                    "finish_reason": "stop"
                }
            ],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices[0].message.content, "Hello there");
        assert_eq!(response.usage.total_tokens, 15);
    }

    #[test]
    fn test_parse_chat_response_without_usage() {
        let json = r#"{
            "choices": [{"message": {"role": "assistant", "content": "ok"}}]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.usage.total_tokens, 0);
    }
}
