//! Prompt construction for every generation path.
//!
//! All builders are pure functions over [`PetitionRequest`]; the flow,
//! the single-call backend and the agent backend share the request
//! snapshot format so the petition data reads the same everywhere.

use crate::types::PetitionRequest;

/// Persona and formatting rules prepended to every flow prompt.
pub const BASE_INSTRUCTION: &str = "\
Você é um assistente jurídico especialista em Direito Brasileiro, com domínio técnico de direito material e processual.
Sua tarefa é auxiliar na redação de partes de uma petição inicial completa, com rigor jurídico, clareza argumentativa e linguagem forense formal.
Siga estritamente as instruções para cada parte da petição.
Não utilize formatação em negrito no texto da petição.
Crie parágrafos de tamanho médio e claros. Separe o texto em parágrafos.
A argumentação deve ser longa e citar artigos da lei brasileira quando pertinente.";

/// Citation rule for the section expander: exactly one literal court
/// decision per section, ementa in caps, blank line, then the
/// parenthesized citation metadata.
pub const JURISPRUDENCE_INSTRUCTION: &str = "\
REGRAS PARA JURISPRUDÊNCIA (quando solicitado especificamente para um tópico de direito):
Faça uma citação literal de UMA jurisprudência relevante para o tópico.
Sempre insira a EMENTA EM CAIXA ALTA no início da citação da jurisprudência.
Após a citação, salte uma linha e coloque, na mesma formatação, a informação sobre o tribunal e julgado. Exemplo:
(REsp n. 1.733.136/RO, relator Ministro Paulo de Tarso Sanseverino, Terceira Turma, julgado em 21/9/2021, DJe de 24/9/2021.)
Não escreva \"Fonte:\" ou \"Jurisprudência Citada:\". Apenas a citação e os dados do julgado.";

/// Request snapshot shared by the flow prompts.
fn case_data(request: &PetitionRequest) -> String {
    format!(
        "- Tipo de Peça Jurídica: {}\n\
         - Assunto Principal: {}\n\
         - Partes Envolvidas: {}\n\
         - Descrição dos Fatos: {}\n\
         - Outras Informações/Diretrizes: {}",
        request.petition_type,
        request.subject,
        request.parties,
        request.facts,
        request.extra_instructions,
    )
}

/// Planner prompt: asks for the numbered title list of "2. DO DIREITO"
/// and nothing else.
pub fn plan_prompt(request: &PetitionRequest) -> String {
    format!(
        "{BASE_INSTRUCTION}\n\
         Considerando os seguintes dados fornecidos pelo usuário para uma petição inicial:\n\
         {}\n\n\
         Tarefa: Crie um plano para a seção \"2. DO DIREITO\" da petição.\n\
         O plano deve consistir em uma lista numerada de TÍTULOS DESCRITIVOS (em CAIXA ALTA) para os subtópicos dos fundamentos jurídicos.\n\
         Cada título deve ser conciso e indicar o tema do respectivo subtópico.\n\
         Por exemplo:\n\
         2.1 DA RESPONSABILIDADE CIVIL OBJETIVA\n\
         2.2 DOS DANOS MORAIS\n\
         2.3 DA TUTELA DE URGÊNCIA\n\n\
         Não escreva o conteúdo dos tópicos, apenas a lista de títulos planejados para a seção \"2. DO DIREITO\".",
        case_data(request),
    )
}

/// Opener prompt: addressing, party qualification (placeholders for
/// missing fields), all-caps action name and the "1. DOS FATOS"
/// narrative, in that order.
pub fn opening_prompt(request: &PetitionRequest) -> String {
    format!(
        "{BASE_INSTRUCTION}\n\
         Dados para a petição:\n\
         {}\n\n\
         Tarefa: Redija as seguintes seções da petição inicial:\n\
         1. ENDEREÇAMENTO (Ex: AO JUIZADO ESPECIAL CÍVEL DA COMARCA DE [CIDADE/ESTADO])\n\
         2. QUALIFICAÇÃO DAS PARTES (Apresente a qualificação completa da parte autora e da parte ré, com base nas informações fornecidas em \"Partes Envolvidas\". Se os detalhes não forem completos, use placeholders como [Nacionalidade], [Profissão], [CPF], [Endereço Completo], [CNPJ se aplicável], etc.)\n\
         3. NOME DA AÇÃO (EM CAIXA ALTA. Ex: AÇÃO DE INDENIZAÇÃO POR DANOS MORAIS E MATERIAIS)\n\
         4. Seção \"1. DOS FATOS\" (Descreva os fatos de forma objetiva, impessoal e cronológica, com base na \"Descrição dos Fatos\" fornecida. Permita a perfeita compreensão da dinâmica do conflito.)\n\n\
         Siga rigorosamente a estrutura e formatação indicadas.",
        case_data(request),
    )
}

/// Expander prompt for one planned title.
pub fn section_prompt(request: &PetitionRequest, topic_title: &str) -> String {
    format!(
        "{BASE_INSTRUCTION}\n\
         {JURISPRUDENCE_INSTRUCTION}\n\n\
         Dados do caso:\n\
         {}\n\n\
         Tarefa: Desenvolva o conteúdo argumentativo para o seguinte tópico da seção \"2. DO DIREITO\":\n\
         Título do Tópico: {topic_title}\n\n\
         Instruções para este tópico:\n\
         - Apresente argumentação jurídica robusta, baseada em doutrina relevante e dispositivos legais vigentes (ex: Código Civil, CDC, CPC, CF, Resoluções de agências, etc.).\n\
         - Se este tópico permitir e for relevante, inclua UMA citação de jurisprudência conforme as regras de formatação especificadas acima.\n\
         - Adapte a argumentação especificamente para o \"{topic_title}\".",
        case_data(request),
    )
}

/// Closer prompt. `topics_summary` is the semicolon-joined list of all
/// planned titles, expanded or not.
pub fn closing_prompt(request: &PetitionRequest, topics_summary: &str) -> String {
    format!(
        "{BASE_INSTRUCTION}\n\
         Dados do caso:\n\
         {}\n\
         - Resumo dos tópicos de direito já desenvolvidos: {topics_summary}\n\n\
         Tarefa: Redija as seguintes seções finais da petição inicial:\n\
         1. Seção \"3. DOS PEDIDOS\" (Enumere com clareza os pedidos formulados ao juízo. Ex: citação, condenação em danos materiais R$ XXX,XX, danos morais R$ XX.XXX,XX, produção de provas, procedência total, condenação em sucumbência).\n\
         2. Inclua a frase: \"Opta-se pela realização de audiência de conciliação.\"\n\
         3. Indique o VALOR DA CAUSA: \"Dá-se à causa o valor de R$ [VALOR DA CAUSA], conforme o art. 292 do CPC.\" (Se possível, sugira um valor ou um placeholder claro).\n\
         4. ENCERRAMENTO (Termos em que, Pede deferimento. [LOCAL], [DATA].)\n\
         5. ASSINATURA (NOME DO ADVOGADO, ADVOGADO – OAB/UF Nº XXXXX) (Use placeholders para nome, local, data e OAB).",
        case_data(request),
    )
}

/// Attached-document block appended to the single-call and agent
/// prompts. Empty string when the request carries no documents.
fn documents_block(request: &PetitionRequest) -> String {
    if request.documents.is_empty() {
        return String::new();
    }
    let mut s = String::from("\n\nConteúdo de documentos anexos:\n");
    for doc in &request.documents {
        s.push_str(&format!("- {}: {}\n", doc.filename, doc.content));
    }
    s
}

/// One-shot prompt for the single-call backend: the whole petition in a
/// single completion.
pub fn single_call_prompt(request: &PetitionRequest) -> String {
    let mut prompt = format!(
        "Você é um assistente jurídico especializado em criar rascunhos de petições no Brasil.\n\
         Tarefa: Gerar um rascunho de uma '{}' sobre '{}'.\n\
         Partes envolvidas: {}.\n\
         Descrição detalhada dos fatos: {}.\n",
        request.petition_type, request.subject, request.parties, request.facts,
    );
    if !request.extra_instructions.is_empty() {
        prompt.push_str(&format!(
            "Diretrizes adicionais ou pedidos específicos: {}.\n",
            request.extra_instructions
        ));
    }
    prompt.push_str(&documents_block(request));
    prompt.push_str(
        "\nPor favor, gere o rascunho da petição solicitado, estruturando-o adequadamente com \
         seções como 'DOS FATOS', 'DOS FUNDAMENTOS JURÍDICOS', 'DOS PEDIDOS', etc. Adapte o tom \
         e a formalidade ao tipo de peça jurídica. Use linguagem forense formal e cite \
         dispositivos legais brasileiros.",
    );
    prompt
}

/// Query text for the templated remote agent. The structuring prompt
/// lives server-side on the agent; this is only the case data it fills
/// the template with.
pub fn agent_query(request: &PetitionRequest) -> String {
    let mut query = format!(
        "Tipo de Peça: {}\nAssunto Principal: {}\nPartes: {}\nFatos: {}\nOutras Informações: {}",
        request.petition_type,
        request.subject,
        request.parties,
        request.facts,
        request.extra_instructions,
    );
    query.push_str(&documents_block(request));
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocumentSummary;

    fn request() -> PetitionRequest {
        PetitionRequest {
            petition_type: "Ação de Indenização".into(),
            subject: "Atraso de voo".into(),
            parties: "João da Silva x Companhia Aérea X".into(),
            facts: "O voo atrasou doze horas.".into(),
            extra_instructions: "Pedir tutela de urgência.".into(),
            documents: vec![],
        }
    }

    #[test]
    fn plan_prompt_carries_case_data_and_asks_for_titles_only() {
        let p = plan_prompt(&request());
        assert!(p.contains("Ação de Indenização"));
        assert!(p.contains("Atraso de voo"));
        assert!(p.contains("apenas a lista de títulos"));
        assert!(!p.contains("REGRAS PARA JURISPRUDÊNCIA"));
    }

    #[test]
    fn opening_prompt_orders_addressing_before_facts() {
        let p = opening_prompt(&request());
        let addressing = p.find("ENDEREÇAMENTO").expect("addressing present");
        let facts = p.find("1. DOS FATOS").expect("facts present");
        assert!(addressing < facts);
        assert!(p.contains("[CPF]"));
        assert!(p.contains("O voo atrasou doze horas."));
    }

    #[test]
    fn section_prompt_includes_citation_rule_and_title() {
        let p = section_prompt(&request(), "2.1 DOS DANOS MORAIS");
        assert!(p.contains("REGRAS PARA JURISPRUDÊNCIA"));
        assert!(p.contains("EMENTA EM CAIXA ALTA"));
        assert_eq!(p.matches("2.1 DOS DANOS MORAIS").count(), 2);
    }

    #[test]
    fn closing_prompt_embeds_topic_summary_and_case_value_article() {
        let p = closing_prompt(&request(), "2.1 A; 2.2 B");
        assert!(p.contains("já desenvolvidos: 2.1 A; 2.2 B"));
        assert!(p.contains("art. 292 do CPC"));
        assert!(p.contains("audiência de conciliação"));
    }

    #[test]
    fn single_call_prompt_lists_documents() {
        let mut req = request();
        req.documents.push(DocumentSummary {
            filename: "contrato.pdf".into(),
            content: "[conteúdo extraído]".into(),
        });
        let p = single_call_prompt(&req);
        assert!(p.contains("- contrato.pdf: [conteúdo extraído]"));
    }

    #[test]
    fn single_call_prompt_omits_empty_extras() {
        let mut req = request();
        req.extra_instructions = String::new();
        let p = single_call_prompt(&req);
        assert!(!p.contains("Diretrizes adicionais"));
    }

    #[test]
    fn agent_query_is_case_data_only() {
        let q = agent_query(&request());
        assert!(q.starts_with("Tipo de Peça: Ação de Indenização"));
        assert!(!q.contains("Você é um"));
    }
}
