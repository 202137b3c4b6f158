use std::borrow::Cow;

use pantry_core::model::{Model, OpenAiModel};

pub const GPT4_O: &str = "gpt-4o";
pub const GPT4_O_MINI: &str = "gpt-4o-mini";
pub const GPT4_1: &str = "gpt-4.1";
pub const GPT4_1_MINI: &str = "gpt-4.1-mini";

pub(crate) fn map_model(model: &Model) -> Cow<'static, str> {
    match model {
        Model::Custom(custom) => Cow::Borrowed(*custom),
        Model::OpenAi(OpenAiModel::Gpt4o) => GPT4_O.into(),
        Model::OpenAi(OpenAiModel::Gpt4oMini) => GPT4_O_MINI.into(),
        Model::OpenAi(OpenAiModel::Gpt4_1) => GPT4_1.into(),
        Model::OpenAi(OpenAiModel::Gpt4_1Mini) => GPT4_1_MINI.into(),
    }
}
