use std::{future::Future, pin::Pin, sync::Arc};

use pantry_core::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage, GenericUsageReport},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};
use tracing::debug;

use crate::{
    OpenAiAdapter, OpenAiClient,
    api_v1::{ChatCompletionMessage, ChatCompletionRequest, FinishReason},
    error::OpenAiError,
    model_map::map_model,
};

impl ChatCompletionProvider for OpenAiAdapter {
    type Message = ChatCompletionMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<
        Box<dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>> + Send + 'p>,
    >
    where
        M: Into<Self::Message> + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);
        Box::pin(complete(client, params.map_messages(Into::into)))
    }
}

/// One `chat/completions` round-trip, converted into the generic response.
async fn complete(
    client: Arc<OpenAiClient>,
    params: ChatCompleteParameters<ChatCompletionMessage>,
) -> Result<GenericChatCompletionResponse<GenericMessage>> {
    let model = map_model(&params.model).into_owned();

    let mut request = ChatCompletionRequest::new(model, params.messages);
    request.response_format = params.response_format.map(Into::into);

    let response = client.chat_completion(request).await?;

    let usage = response.usage.map(|usage| GenericUsageReport {
        prompt_tokens: usage.prompt_tokens,
        completion_tokens: usage.completion_tokens,
        total_tokens: usage.total_tokens,
    });

    let Some(first_choice) = response.choices.into_iter().next() else {
        return Err(OpenAiError::Format("response has no choices".into()).into());
    };
    debug!(finish_reason = ?first_choice.finish_reason, "chat completion finished");

    if let Some(refusal) = first_choice.message.refusal.as_deref() {
        return Err(OpenAiError::Format(format!("model refused: {refusal}")).into());
    }

    match &first_choice.finish_reason {
        None | Some(FinishReason::Stop) => Ok(GenericChatCompletionResponse {
            content: first_choice.message.into(),
            usage,
        }),
        Some(other) => Err(OpenAiError::Format(format!(
            "unhandled finish reason on API: {other:?}"
        ))
        .into()),
    }
}
