use serde::{Deserialize, Serialize};
use solace_reasoning::{Branch, Classification};

/// Body of `POST /chat`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    /// Message text, or `None` when missing or blank.
    pub fn text(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<Branch>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub crisis: bool,
}

impl ChatResponse {
    pub fn message(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            branch: None,
            crisis: false,
        }
    }
}

impl From<Classification> for ChatResponse {
    fn from(c: Classification) -> Self {
        Self {
            reply: c.reply,
            branch: Some(c.branch),
            crisis: c.crisis,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub sessions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_blank_message() {
        let req: ChatRequest = serde_json::from_str(r#"{"message":"   "}"#).unwrap();
        assert!(req.text().is_none());
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(req.text().is_none());
        let req: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(req.text(), Some("hi"));
    }

    #[test]
    fn test_plain_message_serializes_reply_only() {
        let json = serde_json::to_string(&ChatResponse::message("Please provide a message.")).unwrap();
        assert_eq!(json, r#"{"reply":"Please provide a message."}"#);
    }
}
