use crate::llm::ChatMessage;
use solace_core::ConversationTurn;

pub const SYSTEM_INSTRUCTION: &str = "You are a supportive mental health chatbot. Respond with empathy and care. Provide helpful suggestions but make it clear you are not a replacement for professional help. Keep responses concise and focused on the user's well-being.";

/// Prompt returned for an empty message.
pub const EMPTY_INPUT_REPLY: &str = "Please provide a message.";

pub fn chat_messages(turns: &[ConversationTurn]) -> Vec<ChatMessage> {
    turns.iter().map(ChatMessage::from).collect()
}

/// Llama-2 chat template around the system instruction and the latest user
/// message.
pub fn llama2_prompt(messages: &[ChatMessage]) -> String {
    let system = messages
        .iter()
        .find(|m| m.is_system())
        .map(|m| m.content.as_str())
        .unwrap_or(SYSTEM_INSTRUCTION);
    let user = messages
        .iter()
        .rev()
        .find(|m| m.is_user())
        .map(|m| m.content.as_str())
        .unwrap_or_default();
    format!("<s>[INST] <<SYS>>\n{system}\n<</SYS>>\n\n{user} [/INST]")
}

/// Text generated after the final `[/INST]` marker, trimmed. Models that
/// don't echo the prompt return the whole text.
pub fn strip_llama2_prompt(generated: &str) -> &str {
    generated
        .rsplit_once("[/INST]")
        .map_or(generated, |(_, after)| after)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(role: &str, content: &str) -> ChatMessage {
        ChatMessage {
            role: role.into(),
            content: content.into(),
        }
    }

    #[test]
    fn test_llama2_prompt_uses_latest_user_message() {
        let messages = vec![
            msg("system", "be kind"),
            msg("user", "first"),
            msg("assistant", "reply"),
            msg("user", "second"),
        ];
        assert_eq!(
            llama2_prompt(&messages),
            "<s>[INST] <<SYS>>\nbe kind\n<</SYS>>\n\nsecond [/INST]"
        );
    }

    #[test]
    fn test_strip_prompt() {
        assert_eq!(strip_llama2_prompt("<s>[INST] hi [/INST]  Hello there "), "Hello there");
        assert_eq!(strip_llama2_prompt("plain answer"), "plain answer");
    }
}
