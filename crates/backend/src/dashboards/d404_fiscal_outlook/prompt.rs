use contracts::dashboards::d404_fiscal_outlook::format::{format_brl, format_decimal};
use contracts::dashboards::d404_fiscal_outlook::FiscalRecord;

use crate::shared::llm::ChatMessage;

const SYSTEM_PROMPT: &str = "Você é um consultor sênior de gestão fazendária que assessora \
prefeitos. Responda em português do Brasil, em tom executivo e diplomático.";

/// Сообщения для запроса комментария по одному муниципалитету
pub fn build_messages(record: &FiscalRecord) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(build_user_prompt(record)),
    ]
}

fn build_user_prompt(record: &FiscalRecord) -> String {
    format!(
        "Analise para o Prefeito de {name}:\n\
         - Histórico IVA: 2022({iva2022}), 2023({iva2023}), 2024({iva2024})\n\
         - Variação Recente: {variation}%\n\
         - Projeção de Repasse 2025/26: R$ {revenue}\n\
         - Incremento no IPM: {increment}\n\
         \n\
         Crie um \"Ponto de Atenção Estratégico\" para uma reunião de prefeitos. \
         Destaque o sucesso na arrecadação ou onde há espaço para melhoria técnica imediata. \
         Seja diplomático, mas direto sobre o impacto financeiro. Máximo 3 frases curtas.",
        name = record.name,
        iva2022 = record.iva2022,
        iva2023 = record.iva2023,
        iva2024 = record.iva2024,
        variation = format_decimal(record.definitive_variation2024, 2),
        revenue = format_brl(record.revenue_projection),
        increment = format_decimal(record.ipm_increment, 4),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::ChatRole;

    fn santaluz() -> FiscalRecord {
        FiscalRecord {
            name: "Santaluz".into(),
            iva2022: 0.1352,
            iva2023: 0.1822,
            iva_provisional2024: 0.2638,
            iva2024: 0.2514,
            definitive_variation2024: 36.6,
            ipm_projection2026: 0.2415,
            revenue_projection: 28068170.22,
            total_contribution: 0.0,
            ipm_increment: -0.0055,
            monthly_fee: 10656.12,
        }
    }

    #[test]
    fn test_prompt_carries_record_figures() {
        let messages = build_messages(&santaluz());
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[1].role, ChatRole::User);

        let prompt = &messages[1].content;
        assert!(prompt.contains("Prefeito de Santaluz"));
        assert!(prompt.contains("2022(0.1352), 2023(0.1822), 2024(0.2514)"));
        assert!(prompt.contains("Variação Recente: 36,60%"));
        assert!(prompt.contains("R$ 28.068.170,22"));
        assert!(prompt.contains("Incremento no IPM: -0,0055"));
        assert!(prompt.contains("Máximo 3 frases curtas."));
    }
}
