use crate::openai::OpenAiClient;

#[derive(Clone)]
pub struct AppState {
    pub openai: OpenAiClient,
}
