use std::sync::Arc;

use async_trait::async_trait;
use exordial_core::{
    error::DraftError,
    flow::PetitionFlow,
    generator::{PetitionGenerator, TextGenerator},
    types::PetitionRequest,
};

/// Multi-step backend: plans the legal sections, expands them one by
/// one and closes the petition, all over a raw text capability (Gemini
/// in production, anything implementing [`TextGenerator`] elsewhere).
pub struct OrchestratedGenerator {
    flow: PetitionFlow,
}

impl OrchestratedGenerator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            flow: PetitionFlow::new(generator),
        }
    }
}

#[async_trait]
impl PetitionGenerator for OrchestratedGenerator {
    async fn generate(&self, request: &PetitionRequest) -> Result<String, DraftError> {
        self.flow
            .run(request)
            .await
            .map_err(DraftError::Flow)
    }
}
