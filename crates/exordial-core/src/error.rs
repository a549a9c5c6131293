use thiserror::Error;

/// Typed failure from a text-generation capability call.
///
/// Display strings are the user-facing Portuguese messages: they are
/// embedded verbatim in inline section markers and in stage failures,
/// so wording changes here are visible to end users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("chave de API ausente ou inválida")]
    InvalidCredential,

    #[error("cota da API excedida, tente novamente mais tarde")]
    QuotaExceeded,

    #[error("conteúdo bloqueado pela API ({reason})")]
    ContentBlocked { reason: String },

    #[error("falha de transporte: {0}")]
    Transport(String),

    #[error("tempo limite de {secs}s excedido")]
    Timeout { secs: u64 },

    #[error("erro HTTP {status} da API: {body}")]
    Api { status: u16, body: String },

    #[error("resposta da API vazia")]
    EmptyResponse,

    #[error("resposta da API em formato inesperado: {0}")]
    Malformed(String),
}

/// Fatal failure of an orchestrated run, naming the failing stage.
///
/// A failed section expansion is never represented here — it is
/// recovered locally as an inline marker block in the draft (see
/// `flow::section_error_block`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// The planner capability call itself failed.
    #[error("Erro no planejamento: {0}")]
    Planning(GenerateError),

    /// The planner responded, but no line survived the caption filter.
    /// Carries the raw response so the caller can see what came back.
    #[error("Erro no planejamento: não foi possível extrair os tópicos de direito do plano gerado. Plano recebido:\n{raw}")]
    EmptyPlan { raw: String },

    #[error("Erro no endereçamento/fatos: {0}")]
    Opening(GenerateError),

    #[error("Erro nos pedidos/encerramento: {0}")]
    Closing(GenerateError),
}

/// Failure of a petition-level backend run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// The backend's capability call failed.
    #[error("{0}")]
    Generate(#[from] GenerateError),

    /// A fatal stage failure in the orchestrated flow.
    #[error("{0}")]
    Flow(#[from] FlowError),
}
