use super::context::FiscalOutlookContext;
use super::insight_panel::InsightPanel;
use super::iva_chart::IvaHistoryChart;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::icons::icon;
use contracts::dashboards::d404_fiscal_outlook::format::{
    format_brl, format_brl_millions, format_index, format_signed_percent,
};
use contracts::dashboards::d404_fiscal_outlook::{FiscalRecord, Trend};
use leptos::prelude::*;
use thaw::*;

/// Отчёт по выбранному муниципалитету
#[component]
pub fn MunicipalityDetail(ctx: FiscalOutlookContext) -> impl IntoView {
    let selected = Memo::new(move |_| ctx.selected());

    view! {
        <section class="d404-detail">
            <div class="d404-detail__toolbar">
                <ButtonGroup>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| ctx.previous()
                    >
                        {icon("chevron-left")}
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| ctx.next()
                    >
                        {icon("chevron-right")}
                    </Button>
                </ButtonGroup>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.presentation.set(true)
                >
                    {icon("maximize")}
                    "Modo Apresentação"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| ctx.clear()
                >
                    {icon("x")}
                </Button>
            </div>

            {move || selected.get().map(|record| view! { <DetailBody ctx=ctx record=record /> })}
        </section>
    }
}

#[component]
fn DetailBody(ctx: FiscalOutlookContext, record: FiscalRecord) -> impl IntoView {
    let position = Signal::derive(move || {
        ctx.selected_position()
            .map(|p| format!("{}º Posição", p))
            .unwrap_or_else(|| "Fora do filtro".to_string())
    });
    let (trend_icon, trend_tone) = match record.trend() {
        Trend::Up => ("trending-up", StatTone::Good),
        Trend::Down => ("trending-down", StatTone::Bad),
    };

    view! {
        <div class="d404-detail__header">
            <h1>{record.name.clone()}</h1>
            <p>"Relatório técnico consolidado para o exercício 2025/2026."</p>
        </div>

        <div class="d404-detail__cards">
            <StatCard
                label="Estimativa de Receita (Anual)"
                icon_name="money"
                value=format!("R$ {}", format_brl(record.revenue_projection))
                subtitle=Some(format!("Base: IPM {}", format_index(record.ipm_projection2026)))
                tone=StatTone::Accent
            />
            <StatCard
                label="Crescimento Real"
                icon_name=trend_icon
                value=format_signed_percent(record.definitive_variation2024, 2)
                subtitle=Some("vs. exercício anterior".to_string())
                tone=trend_tone
            />
            <StatCard label="Ranking Estadual" icon_name="award" value=position />
        </div>

        <div class="d404-detail__facts">
            <div class="d404-detail__fact">
                <span>"Total Incremento IPM"</span>
                <span class="mono">{format_index(record.ipm_increment)}</span>
            </div>
            <div class="d404-detail__fact">
                <span>"Contribuição VA"</span>
                <span class="mono">{format_brl_millions(record.total_contribution, 1)}</span>
            </div>
            <div class="d404-detail__fact">
                <span>"Mensalidade"</span>
                <span class="mono">{format!("R$ {}", format_brl(record.monthly_fee))}</span>
            </div>
            <div class="d404-detail__fact">
                <span>"IVA 2024 (provisório)"</span>
                <span class="mono">{format_index(record.iva_provisional2024)}</span>
            </div>
        </div>

        <div class="d404-detail__grid">
            <div class="d404-panel">
                <h3>"Histórico do Índice (3 Anos)"</h3>
                <IvaHistoryChart record=record.clone() />
            </div>
            <InsightPanel ctx=ctx title="Análise Inteligente" />
        </div>
    }
}
