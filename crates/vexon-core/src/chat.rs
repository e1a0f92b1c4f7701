//! Support Chat Transcript
//!
//! Conversation state behind the floating support widget. The backend is
//! stateless, so every turn resends the system prompt plus the full history.

use serde::{Deserialize, Serialize};

/// Instructions sent ahead of every support conversation
pub const SUPPORT_SYSTEM_PROMPT: &str = r#"You are Vexon AI Support, a highly advanced neural assistant for Vexon AI.
Vexon AI is the world's first AI-powered neural audio synthesis platform.

Key Product Features:
- Neural Lab: Real-time high-definition audio synthesis using deep learning.
- Spectral Pro: Advanced frequency modulation and waveform manipulation.
- Voice Cloning: High-fidelity identity transfer for vocal assets.
- Integrated SaaS Dashboard: Subscription management, usage analytics, and project hub.

Industrial Utility & Use Cases:
- Acoustic Creators: Hyper-realistic voiceovers and studio-grade podcasts.
- Enterprise Logic: Global audio analytics with sentiment and intent detection.
- Media Networks: Multi-language synthesis for international distribution (60+ dialects).

Technical Foundation:
- Neural Pipeline: Modular architecture for custom spectral routing.
- Zero-Latency PNE: Proprietary Neural Engine for real-time 32-bit float processing.
- Global Synthesis: Cloud-to-edge synchronization.
- SHA-256 secure handshake protocols.

Instructions:
- Be helpful, professional, and futuristic. Use terminology like "neural", "frequency", "protocol", "uplink", "spectral".
- If you don't know something about Vexon, tell the user to contact the core engineers through the contact page.
- Keep responses concise."#;

/// First assistant line of every transcript
pub const GREETING: &str = "Neural link established. How can I assist with your Vexon uplink today?";

/// Shown when the backend answers without a reply
pub const REPLY_REJECTED: &str = "Signal interference detected. Handshake failed.";

/// Role of a message sender
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single chat line
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Visible conversation of the support widget
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// Transcript opened with the assistant greeting
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
        }
    }

    /// Visible messages, without the system prompt
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Record the user's input and build the history to send.
    ///
    /// Blank input is ignored and yields `None`.
    pub fn begin_turn(&mut self, input: &str) -> Option<Vec<ChatMessage>> {
        if input.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(input));

        let mut history = Vec::with_capacity(self.messages.len() + 1);
        history.push(ChatMessage::system(SUPPORT_SYSTEM_PROMPT));
        history.extend(self.messages.iter().cloned());
        Some(history)
    }

    /// Append the assistant's answer, or the fallback line when there is none
    pub fn finish_turn(&mut self, reply: Option<String>) {
        let content = reply
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| REPLY_REJECTED.to_string());
        self.messages.push(ChatMessage::assistant(content));
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_starts_with_greeting() {
        let transcript = Transcript::new();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].role, Role::Assistant);
        assert_eq!(transcript.messages()[0].content, GREETING);
    }

    #[test]
    fn test_turn_history() {
        let mut transcript = Transcript::new();
        let history = transcript.begin_turn("What is Spectral Pro?").unwrap();

        assert_eq!(history.len(), 3);
        assert_eq!(history[0].role, Role::System);
        assert_eq!(history[1].content, GREETING);
        assert_eq!(history[2], ChatMessage::user("What is Spectral Pro?"));

        transcript.finish_turn(Some("Frequency modulation suite.".into()));
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.messages()[2].content, "Frequency modulation suite.");
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut transcript = Transcript::new();
        assert!(transcript.begin_turn("   ").is_none());
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_missing_reply_uses_fallback() {
        let mut transcript = Transcript::new();
        transcript.begin_turn("hello");
        transcript.finish_turn(None);
        assert_eq!(transcript.messages().last().unwrap().content, REPLY_REJECTED);
    }

    #[test]
    fn test_role_wire_format() {
        let json = serde_json::to_string(&ChatMessage::assistant("hi")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }
}
