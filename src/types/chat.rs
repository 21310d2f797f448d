use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
}

#[derive(Deserialize, Debug)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
pub struct ChatChoice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Deserialize, Debug)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// choices[0].message.content
    pub fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_has_user_message_and_model() {
        let req = ChatRequest {
            messages: vec![ChatMessage::user("hi")],
            model: "m".to_string(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "messages": [{ "role": "user", "content": "hi" }],
                "model": "m"
            })
        );
    }

    #[test]
    fn first_content_takes_first_choice() {
        let res: ChatResponse = serde_json::from_value(serde_json::json!({
            "id": "gen-1",
            "choices": [
                { "message": { "role": "assistant", "content": "first" } },
                { "message": { "role": "assistant", "content": "second" } }
            ]
        }))
        .unwrap();
        assert_eq!(res.first_content().as_deref(), Some("first"));
    }

    #[test]
    fn first_content_missing_pieces_is_none() {
        let no_choices: ChatResponse =
            serde_json::from_value(serde_json::json!({ "error": { "message": "x" } })).unwrap();
        assert!(no_choices.first_content().is_none());

        let no_content: ChatResponse =
            serde_json::from_value(serde_json::json!({ "choices": [{ "message": {} }] })).unwrap();
        assert!(no_content.first_content().is_none());
    }
}
