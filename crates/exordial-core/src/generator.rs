use async_trait::async_trait;

use crate::{
    error::{DraftError, GenerateError},
    types::PetitionRequest,
};

/// A raw text-generation capability: one prompt in, generated text or a
/// typed failure out.
///
/// The orchestrated flow is agnostic to which provider sits behind this
/// trait; transport errors, timeouts and application-level refusals all
/// surface through the same `GenerateError` space.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, max_output_tokens: u32)
        -> Result<String, GenerateError>;
}

/// A petition-level backend: whole request in, assembled draft out.
///
/// One concrete type per selectable backend — simulated, single-call,
/// templated agent, orchestrated flow. Selection is by stored name (see
/// the agent crate's registry).
#[async_trait]
pub trait PetitionGenerator: Send + Sync {
    async fn generate(&self, request: &PetitionRequest) -> Result<String, DraftError>;
}
