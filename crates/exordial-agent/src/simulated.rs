use async_trait::async_trait;
use chrono::{Datelike, Local, NaiveDate};
use exordial_core::{
    error::DraftError,
    generator::PetitionGenerator,
    types::PetitionRequest,
};
use tracing::info;

/// Offline canned backend: assembles a fixed-skeleton draft from the
/// request fields. The default backend; no credentials, no network.
pub struct SimulatedGenerator;

const MONTHS: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho",
    "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
];

/// "6 de agosto de 2026" — pt-BR long date for the signature line.
pub fn date_in_full(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year(),
    )
}

/// Build the canned draft for a given date. Deterministic, so the date
/// is a parameter and `generate` supplies today's.
pub fn render(request: &PetitionRequest, date: NaiveDate) -> String {
    format!(
        "EXCELENTÍSSIMO(A) SENHOR(A) DOUTOR(A) JUIZ(A) DE DIREITO DA [VARA SIMULADA] DA COMARCA DE [COMARCA SIMULADA].\n\
         \n\
         Partes: {parties}\n\
         Tipo: {petition_type}\n\
         Assunto: {subject}\n\
         \n\
         1. DOS FATOS (SIMULADO)\n\
         {facts}\n\
         \n\
         2. DO DIREITO (SIMULADO)\n\
         [Fundamentação jurídica simulada...]\n\
         {extra}\n\
         \n\
         3. DOS PEDIDOS (SIMULADO)\n\
         [Pedidos simulados...]\n\
         \n\
         [CIDADE], {date}.\n\
         [ADVOGADO SIMULADO]\n\
         OAB/UF [XXXXX]",
        parties = request.parties,
        petition_type = request.petition_type.to_uppercase(),
        subject = request.subject.to_uppercase(),
        facts = request.facts,
        extra = request.extra_instructions,
        date = date_in_full(date),
    )
}

#[async_trait]
impl PetitionGenerator for SimulatedGenerator {
    async fn generate(&self, request: &PetitionRequest) -> Result<String, DraftError> {
        info!("generating simulated petition draft");
        Ok(render(request, Local::now().date_naive()))
    }
}
