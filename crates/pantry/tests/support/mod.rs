//! In-memory [`ChatCompletionProvider`] that replays scripted replies.
#![allow(dead_code)]

use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, Mutex},
};

use pantry::{
    PantryClient,
    actions::RecipeActions,
    error::{PantryError, Result},
    generic::{GenericChatCompletionResponse, GenericMessage, GenericRole, ResponseFormat},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};
use serde_json::{Value, json};

#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Text(String),
    Empty,
    Fail,
}

/// What the provider saw on one call.
#[derive(Debug, Clone)]
pub struct Call {
    pub messages: Vec<GenericMessage>,
    pub response_format: Option<ResponseFormat>,
}

impl Call {
    pub fn user_prompt(&self) -> &str {
        self.messages
            .iter()
            .find(|m| m.role == GenericRole::User)
            .and_then(|m| m.content.as_deref())
            .unwrap_or_default()
    }
}

pub struct ScriptedProvider {
    reply: Reply,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl ChatCompletionProvider for ScriptedProvider {
    type Message = GenericMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<
        Box<dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>> + Send + 'p>,
    >
    where
        M: Into<Self::Message> + Send + Sync + 'p,
    {
        let params: ChatCompleteParameters<GenericMessage> = params.map_messages(Into::into);
        self.calls.lock().unwrap().push(Call {
            messages: params.messages,
            response_format: params.response_format,
        });

        let content = match &self.reply {
            Reply::Json(value) => Some(value.to_string()),
            Reply::Text(text) => Some(text.clone()),
            Reply::Empty => None,
            Reply::Fail => {
                return Box::pin(async {
                    Err(PantryError::Backend("connection refused".into()))
                });
            }
        };

        Box::pin(async move {
            Ok(GenericChatCompletionResponse {
                content: GenericMessage {
                    content,
                    role: GenericRole::Assistant,
                    name: None,
                },
                usage: None,
            })
        })
    }
}

pub type Actions = RecipeActions<PantryClient<ScriptedProvider>>;

/// Actions wired to a provider that always answers with `reply`.
pub fn actions(reply: Reply) -> (Actions, Arc<Mutex<Vec<Call>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let provider = ScriptedProvider {
        reply,
        calls: Arc::clone(&calls),
    };
    (RecipeActions::new(PantryClient::new(provider)), calls)
}

pub fn recipe(name: &str) -> Value {
    json!({
        "name": name,
        "ingredients": "1 cup rice, 1 chicken breast",
        "instructions": "1. Cook the rice.\n2. Fry the chicken.\n3. Combine.",
        "nutritionalInformation": "Calories: 500, Fat: 12g, Protein: 35g, Carbs: 60g",
        "imagePrompt": format!("A photorealistic plate of {name}")
    })
}

pub fn three_recipes() -> Value {
    json!({
        "recipes": [
            recipe("Chicken Fried Rice"),
            recipe("Chicken Congee"),
            recipe("Chicken Rice Bowl")
        ]
    })
}
