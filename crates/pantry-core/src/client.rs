//! Generic, lightweight client that executes a [`PromptTemplate`] against a
//! single concrete backend.
//!
//! The client is **generic over the backend type `B`**, so the compiler
//! checks that the prompt's `Message` type converts into what the backend
//! expects, without dynamic dispatch in user code.
//!
//! Any backend crate (e.g. `pantry-openai`) only implements
//! [`ChatCompletionProvider`]; the client adds the typed
//! [`PromptExecutionProvider`] layer on top: it derives the response schema
//! from `P::Output`, performs exactly one completion call and parses the
//! answer.
use std::{future::Future, pin::Pin, sync::Arc};

use tracing::{debug, warn};

use crate::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage},
    provider::{ChatCompleteParameters, ChatCompletionProvider, PromptExecutionProvider},
    schema_util::{parse_structured, response_format},
    template::{IntoPrompt, PromptTemplate},
};

/// A client bound to a single provider.
///
/// Cloning is cheap: the backend sits behind an `Arc`.
#[derive(Debug)]
pub struct PantryClient<B> {
    backend: Arc<B>,
}

impl<B> Clone for PantryClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B> PantryClient<B>
where
    B: ChatCompletionProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }
}

impl<B: ChatCompletionProvider> ChatCompletionProvider for PantryClient<B> {
    type Message = B::Message;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<
        Box<dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>> + Send + 'p>,
    >
    where
        M: Into<Self::Message> + Send + Sync + 'p,
    {
        self.backend.chat_complete(params)
    }
}

impl<B: ChatCompletionProvider + 'static> PromptExecutionProvider for PantryClient<B> {
    type Message = B::Message;

    fn prompt_execute<'a, 'p, P>(
        &'a self,
        prompt: P,
    ) -> Pin<
        Box<
            dyn Future<Output = Result<GenericChatCompletionResponse<Option<P::Output>>>>
                + Send
                + 'p,
        >,
    >
    where
        'a: 'p,
        P: PromptTemplate + Send + Sync + 'p,
        <P as IntoPrompt>::Message: Into<Self::Message>,
    {
        Box::pin(execute_prompt(Arc::clone(&self.backend), prompt))
    }
}

/// Single attempt: derive the schema of `P::Output`, run one completion and
/// parse the reply.
async fn execute_prompt<B, P>(
    backend: Arc<B>,
    prompt: P,
) -> Result<GenericChatCompletionResponse<Option<P::Output>>>
where
    B: ChatCompletionProvider,
    P: PromptTemplate,
    <P as IntoPrompt>::Message: Into<B::Message>,
{
    let format = response_format::<P::Output>()?;
    debug!(schema = %format.name, model = ?P::MODEL, "executing prompt");

    let params =
        ChatCompleteParameters::new(prompt.into_prompt(), P::MODEL).with_response_format(format);
    let response = backend.chat_complete(params).await?;

    if let Some(usage) = &response.usage {
        debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            total_tokens = usage.total_tokens,
            "completion usage"
        );
    }

    let content = parse_structured::<P::Output>(response.content.content.as_deref())
        .inspect_err(|err| warn!(error = %err, "model reply does not match response schema"))?;

    Ok(GenericChatCompletionResponse {
        content,
        usage: response.usage,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use schemars::JsonSchema;
    use serde::Deserialize;

    use super::*;
    use crate::{
        error::PantryError,
        generic::GenericRole,
        model::{Model, OpenAiModel},
    };

    #[derive(Debug, Deserialize, JsonSchema, PartialEq)]
    #[serde(deny_unknown_fields)]
    struct Greeting {
        text: String,
    }

    struct GreetingPrompt;

    impl IntoPrompt for GreetingPrompt {
        type Message = GenericMessage;

        fn into_prompt(self) -> Vec<Self::Message> {
            vec![GenericMessage::new("Greet me".into(), GenericRole::User)]
        }
    }

    impl PromptTemplate for GreetingPrompt {
        type Output = Greeting;
        const MODEL: Model = Model::OpenAi(OpenAiModel::Gpt4oMini);
    }

    /// Replies with a canned text and remembers the schema it was given.
    struct Canned {
        reply: Option<String>,
        seen_schema: Arc<Mutex<Option<String>>>,
    }

    impl ChatCompletionProvider for Canned {
        type Message = GenericMessage;

        fn chat_complete<'p, M>(
            &self,
            params: ChatCompleteParameters<M>,
        ) -> Pin<
            Box<
                dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>>
                    + Send
                    + 'p,
            >,
        >
        where
            M: Into<Self::Message> + Send + Sync + 'p,
        {
            *self.seen_schema.lock().unwrap() = params.response_format.map(|f| f.name);
            let reply = self.reply.clone();
            Box::pin(async move {
                Ok(GenericChatCompletionResponse {
                    content: GenericMessage {
                        content: reply,
                        role: GenericRole::Assistant,
                        name: None,
                    },
                    usage: None,
                })
            })
        }
    }

    fn client(reply: Option<&str>) -> (PantryClient<Canned>, Arc<Mutex<Option<String>>>) {
        let seen = Arc::new(Mutex::new(None));
        let backend = Canned {
            reply: reply.map(str::to_owned),
            seen_schema: Arc::clone(&seen),
        };
        (PantryClient::new(backend), seen)
    }

    #[tokio::test]
    async fn typed_output_is_parsed_and_schema_attached() {
        let (client, seen) = client(Some(r#"{"text":"hi"}"#));

        let response = client.prompt_execute(GreetingPrompt).await.unwrap();

        assert_eq!(response.content, Some(Greeting { text: "hi".into() }));
        assert_eq!(seen.lock().unwrap().as_deref(), Some("Greeting"));
    }

    #[tokio::test]
    async fn empty_reply_is_none() {
        let (client, _) = client(None);
        let response = client.prompt_execute(GreetingPrompt).await.unwrap();
        assert_eq!(response.content, None);
    }

    #[tokio::test]
    async fn unknown_fields_are_rejected() {
        let (client, _) = client(Some(r#"{"text":"hi","mood":"happy"}"#));
        let err = client.prompt_execute(GreetingPrompt).await.unwrap_err();
        assert!(matches!(err, PantryError::Serialization(_)));
    }
}
