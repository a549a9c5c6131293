use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

// ── Request ──────────────────────────────────────────────────────────────

/// Extracted (or placeholder) text of a document attached to a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub filename: String,
    pub content: String,
}

/// Immutable input for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetitionRequest {
    /// Kind of pleading (e.g. "Ação de Indenização").
    pub petition_type: String,
    /// Main subject of the dispute.
    pub subject: String,
    /// Free-text description of claimant and respondent.
    pub parties: String,
    /// Detailed facts narrative supplied by the user.
    pub facts: String,
    /// Additional guidelines or specific requests.
    #[serde(default)]
    pub extra_instructions: String,
    /// Attached-document summaries included as prompt context.
    #[serde(default)]
    pub documents: Vec<DocumentSummary>,
}

// ── Flow stages ──────────────────────────────────────────────────────────

/// One phase of the fixed four-phase generation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Plans the ordered list of legal-argument section titles.
    Plan,
    /// Court addressing, party qualification, action name and facts.
    Opening,
    /// One legal-argument section body for a planned title.
    Section,
    /// Relief requests, case value, closing and signature block.
    Closing,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Plan => "planejamento",
            Self::Opening => "endereçamento/fatos",
            Self::Section => "fundamentos",
            Self::Closing => "pedidos/encerramento",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── Plan ─────────────────────────────────────────────────────────────────

/// Ordered list of section titles produced by the planner, driving the
/// expander's iteration. Each title keeps its ordinal prefix
/// (e.g. "2.1 DA RESPONSABILIDADE CIVIL OBJETIVA").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    titles: Vec<String>,
}

impl Plan {
    pub fn new(titles: Vec<String>) -> Self {
        Self { titles }
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Semicolon-joined title list, used as the closing stage's topic
    /// summary. Includes every planned title, expanded or not.
    pub fn summary(&self) -> String {
        self.titles.join("; ")
    }
}

// ── Generation step ──────────────────────────────────────────────────────

/// A single request/response unit inside a run: the stage, the prompt
/// sent, and what came back. Never outlives the run that produced it.
#[derive(Debug, Clone)]
pub struct GenerationStep {
    pub stage: Stage,
    pub prompt: String,
    pub result: Result<String, GenerateError>,
}

impl GenerationStep {
    pub fn into_result(self) -> Result<String, GenerateError> {
        self.result
    }
}

// ── Draft ────────────────────────────────────────────────────────────────

/// Accumulated output of a run: ordered text blocks (opening, section
/// header, section bodies, closing). Grows monotonically as stages
/// complete; finalized by concatenation only after every stage has been
/// attempted.
#[derive(Debug, Clone, Default)]
pub struct PetitionDraft {
    blocks: Vec<String>,
}

impl PetitionDraft {
    pub fn push_block(&mut self, block: impl Into<String>) {
        self.blocks.push(block.into());
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Join all blocks with blank-line separators, in insertion order.
    pub fn finalize(self) -> String {
        self.blocks.join("\n\n")
    }
}
