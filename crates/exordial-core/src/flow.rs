//! Four-stage petition generation flow over a raw text capability.
//!
//! Stage order is fixed: plan → opening → one expansion per planned
//! title → closing. Later stages depend on earlier output (the plan
//! feeds the expander, the expander's titles feed the closing summary),
//! so execution is strictly sequential. Planner, opener and closer
//! failures abort the run; a failed section is replaced by an inline
//! error block and iteration continues.

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    error::{FlowError, GenerateError},
    generator::TextGenerator,
    plan::{numbered_caption, parse_plan, PlanFilter},
    prompts,
    types::{GenerationStep, PetitionDraft, PetitionRequest, Plan, Stage},
};

/// Header line inserted between the opening block and the expanded
/// legal sections.
pub const LAW_SECTION_HEADER: &str = "2. DO DIREITO";

/// Delimiters of the inline block that replaces a failed section body.
/// Callers scan the assembled draft for [`SECTION_ERROR_START`] to
/// detect per-section failures before accepting it as final.
pub const SECTION_ERROR_START: &str = "--- ERRO AO GERAR TÓPICO:";
pub const SECTION_ERROR_END: &str = "--- FIM DO ERRO ---";

/// Output length requested for the plan step.
const PLAN_MAX_TOKENS: u32 = 1_000;
/// Output length for every other step.
const STEP_MAX_TOKENS: u32 = 7_500;

/// Inline block embedded in the draft in place of a failed section's
/// body, identifying the title and the failure.
pub fn section_error_block(title: &str, error: &GenerateError) -> String {
    format!("{SECTION_ERROR_START} {title} ---\n{error}\n{SECTION_ERROR_END}")
}

pub struct PetitionFlow {
    generator: Arc<dyn TextGenerator>,
    plan_filter: PlanFilter,
}

impl PetitionFlow {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            plan_filter: numbered_caption,
        }
    }

    /// Replace the numbered-caption heuristic used to extract the plan.
    /// Zero surviving lines remains fatal regardless of the filter.
    pub fn with_plan_filter(mut self, filter: PlanFilter) -> Self {
        self.plan_filter = filter;
        self
    }

    /// Run every stage and assemble the draft.
    ///
    /// Returns the concatenated draft text, or the first fatal stage
    /// failure. A draft that generated successfully may still contain
    /// inline section-error blocks; callers that care must scan for
    /// [`SECTION_ERROR_START`].
    pub async fn run(&self, request: &PetitionRequest) -> Result<String, FlowError> {
        let plan = self.plan(request).await?;

        let mut draft = PetitionDraft::default();

        let opening = self
            .step(Stage::Opening, prompts::opening_prompt(request))
            .await
            .into_result()
            .map_err(FlowError::Opening)?;
        draft.push_block(opening);

        draft.push_block(LAW_SECTION_HEADER);
        for title in plan.titles() {
            let step = self
                .step(Stage::Section, prompts::section_prompt(request, title))
                .await;
            match step.into_result() {
                Ok(body) => draft.push_block(body),
                Err(e) => {
                    warn!(title = %title, error = %e, "section expansion failed, embedding inline marker");
                    draft.push_block(section_error_block(title, &e));
                }
            }
        }

        let closing = self
            .step(
                Stage::Closing,
                prompts::closing_prompt(request, &plan.summary()),
            )
            .await
            .into_result()
            .map_err(FlowError::Closing)?;
        draft.push_block(closing);

        Ok(draft.finalize())
    }

    /// Plan stage: one capability call, then the caption filter.
    async fn plan(&self, request: &PetitionRequest) -> Result<Plan, FlowError> {
        let raw = self
            .step_with_limit(Stage::Plan, prompts::plan_prompt(request), PLAN_MAX_TOKENS)
            .await
            .into_result()
            .map_err(FlowError::Planning)?;

        let plan = parse_plan(&raw, self.plan_filter);
        if plan.is_empty() {
            return Err(FlowError::EmptyPlan { raw });
        }
        info!(topics = plan.len(), "law-section plan extracted");
        Ok(plan)
    }

    async fn step(&self, stage: Stage, prompt: String) -> GenerationStep {
        self.step_with_limit(stage, prompt, STEP_MAX_TOKENS).await
    }

    /// One capability call, recorded as a [`GenerationStep`].
    async fn step_with_limit(
        &self,
        stage: Stage,
        prompt: String,
        max_output_tokens: u32,
    ) -> GenerationStep {
        info!(stage = %stage, prompt_len = prompt.len(), "calling text generator");
        let result = self.generator.generate(&prompt, max_output_tokens).await;
        match &result {
            Ok(text) => info!(stage = %stage, output_len = text.len(), "generator responded"),
            Err(e) => warn!(stage = %stage, error = %e, "generator call failed"),
        }
        GenerationStep {
            stage,
            prompt,
            result,
        }
    }
}
