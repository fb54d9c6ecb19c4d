//! Local Ollama chat backend.
//!
//! The local chat endpoint is given a single user turn, so the conversation
//! is flattened first. Response shapes differ between Ollama versions.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use serde::Serialize;
use serde_json::Value;

use super::LlmClient;
use crate::config::{Config, OllamaSettings, ProviderKind};
use crate::error::CoachError;
use crate::message::{Message, Role};

const TEMPERATURE: f32 = 0.95;
const TOP_P: f32 = 0.9;

#[derive(Debug)]
pub struct OllamaClient {
    http: HttpClient,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    stream: bool,
    options: SamplingOptions,
}

#[derive(Serialize)]
struct SamplingOptions {
    temperature: f32,
    top_p: f32,
}

impl OllamaClient {
    pub fn new(settings: &OllamaSettings) -> Result<Self, CoachError> {
        if settings.timeout_secs == 0 {
            return Err(CoachError::ConfigError(
                "ollama timeout_secs must be greater than zero".to_string(),
            ));
        }
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, CoachError> {
        Self::new(&config.ollama)
    }
}

/// Collapse a conversation into one prompt string.
///
/// System content is marked with a visible `[SYSTEM]` header; everything is
/// joined with newlines in the original order.
pub fn flatten_messages(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|m| match m.role {
            Role::System => format!("[SYSTEM]\n{}\n", m.content),
            Role::User => m.content.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pull the reply text out of a chat response.
///
/// Checks `message.content`, then a top-level `content`, and finally falls
/// back to the serialized payload. A `null` content field is an error.
pub fn extract_content(data: &Value) -> Result<String, CoachError> {
    if let Some(content) = data.get("message").and_then(|m| m.get("content")) {
        return value_text(content);
    }
    if let Some(content) = data.get("content") {
        return value_text(content);
    }
    Ok(data.to_string())
}

fn value_text(value: &Value) -> Result<String, CoachError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Err(CoachError::MalformedResponse(
            "reply content was null".to_string(),
        )),
        other => Ok(other.to_string()),
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn generate(&self, messages: &[Message]) -> Result<String, CoachError> {
        let url = format!("{}/api/chat", self.base_url);
        let req = ChatRequest {
            model: &self.model,
            messages: vec![Message::user(flatten_messages(messages))],
            stream: false,
            options: SamplingOptions {
                temperature: TEMPERATURE,
                top_p: TOP_P,
            },
        };

        debug!(
            "ollama: sending {} flattened messages to {} at {}",
            messages.len(),
            self.model,
            url
        );

        let resp = self.http.post(&url).json(&req).send().await?.error_for_status()?;
        let data = resp.json::<Value>().await?;
        extract_content(&data)
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Ollama
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    #[test]
    fn test_flatten_marks_system_turns() {
        let flat = flatten_messages(&[
            Message::system("Be a coach."),
            Message::user("Example one."),
            Message::user("Bill: tax sugar."),
        ]);
        assert_eq!(
            flat,
            "[SYSTEM]\nBe a coach.\n\nExample one.\nBill: tax sugar."
        );
    }

    #[test]
    fn test_flatten_user_only() {
        assert_eq!(flatten_messages(&[Message::user("solo")]), "solo");
        assert_eq!(flatten_messages(&[]), "");
    }

    #[test]
    fn test_extract_prefers_nested_message_content() {
        let data = json!({
            "model": "llama3",
            "message": { "role": "assistant", "content": "nested reply" },
            "content": "top-level reply",
            "done": true
        });
        assert_eq!(extract_content(&data).unwrap(), "nested reply");
    }

    #[test]
    fn test_extract_falls_back_to_top_level_content() {
        let data = json!({ "model": "llama3", "content": "top-level reply" });
        assert_eq!(extract_content(&data).unwrap(), "top-level reply");

        let data = json!({ "message": { "role": "assistant" }, "content": "top-level reply" });
        assert_eq!(extract_content(&data).unwrap(), "top-level reply");
    }

    #[test]
    fn test_extract_dumps_unrecognized_payload() {
        let data = json!({ "response": "legacy generate reply", "done": true });
        let dumped = extract_content(&data).unwrap();
        assert_eq!(dumped, data.to_string());
        assert!(dumped.contains("legacy generate reply"));
    }

    #[test]
    fn test_extract_null_content_is_malformed() {
        let data = json!({ "message": { "role": "assistant", "content": null } });
        assert!(matches!(
            extract_content(&data),
            Err(CoachError::MalformedResponse(_))
        ));

        let data = json!({ "content": null });
        assert!(extract_content(&data).is_err());
    }

    #[test]
    fn test_request_body_shape() {
        let req = ChatRequest {
            model: "llama3",
            messages: vec![Message::user(flatten_messages(&[
                Message::system("rules"),
                Message::user("task"),
            ]))],
            stream: false,
            options: SamplingOptions {
                temperature: TEMPERATURE,
                top_p: TOP_P,
            },
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["model"], "llama3");
        assert_eq!(body["stream"], false);
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "[SYSTEM]\nrules\n\ntask");
        assert!(body["options"]["temperature"].as_f64().unwrap() > 0.9);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let settings = OllamaSettings {
            base_url: "http://localhost:11434/".to_string(),
            ..OllamaSettings::default()
        };
        let client = OllamaClient::new(&settings).unwrap();
        assert_eq!(client.base_url, "http://localhost:11434");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let settings = OllamaSettings {
            timeout_secs: 0,
            ..OllamaSettings::default()
        };
        assert!(matches!(
            OllamaClient::new(&settings),
            Err(CoachError::ConfigError(_))
        ));
    }

    /// Serve one canned HTTP response and hand back the request body it received.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            let request_body = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break String::new();
                }
                buf.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&buf).to_string();
                if let Some(split) = text.find("\r\n\r\n") {
                    let (head, rest) = text.split_at(split + 4);
                    let length = head
                        .lines()
                        .find_map(|l| {
                            let (name, value) = l.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if rest.len() >= length {
                        break rest.to_string();
                    }
                }
            };
            let _ = tx.send(request_body);

            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        (format!("http://{addr}"), rx)
    }

    fn client_for(base_url: String) -> OllamaClient {
        OllamaClient::new(&OllamaSettings {
            base_url,
            model: "llama3".to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_generate_sends_flattened_turn_and_reads_nested_content() {
        let (base_url, request) = serve_once(
            "200 OK",
            r#"{"model":"llama3","message":{"role":"assistant","content":"hi"},"done":true}"#,
        )
        .await;

        let reply = client_for(base_url)
            .generate(&[Message::system("rules"), Message::user("task")])
            .await
            .unwrap();
        assert_eq!(reply, "hi");

        let sent: Value = serde_json::from_str(&request.await.unwrap()).unwrap();
        assert_eq!(sent["model"], "llama3");
        assert_eq!(sent["stream"], false);
        assert_eq!(sent["messages"][0]["role"], "user");
        assert_eq!(sent["messages"][0]["content"], "[SYSTEM]\nrules\n\ntask");
    }

    #[tokio::test]
    async fn test_generate_surfaces_server_errors() {
        let (base_url, _request) =
            serve_once("500 Internal Server Error", r#"{"error":"model crashed"}"#).await;

        let result = client_for(base_url).generate(&[Message::user("task")]).await;
        match result {
            Err(CoachError::HttpError(e)) => {
                assert_eq!(e.status().map(|s| s.as_u16()), Some(500));
            }
            other => panic!("expected HTTP error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_null_content_is_malformed() {
        let (base_url, _request) =
            serve_once("200 OK", r#"{"message":{"role":"assistant","content":null}}"#).await;

        let result = client_for(base_url).generate(&[Message::user("task")]).await;
        assert!(matches!(result, Err(CoachError::MalformedResponse(_))));
    }
}
