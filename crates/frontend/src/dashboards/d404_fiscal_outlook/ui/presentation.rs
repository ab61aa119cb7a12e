use super::context::FiscalOutlookContext;
use super::insight_panel::InsightPanel;
use super::iva_chart::IvaHistoryChart;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use contracts::dashboards::d404_fiscal_outlook::format::{
    format_brl, format_brl_millions, format_index, format_signed_percent,
};
use contracts::dashboards::d404_fiscal_outlook::{FiscalRecord, Trend};
use leptos::prelude::*;
use thaw::*;

/// Полноэкранный режим для выступления перед руководством.
///
/// Навигация: кнопки или ArrowLeft / ArrowRight, выход по Escape
/// (обработчик клавиатуры живёт в `FiscalOutlookDashboard`).
#[component]
pub fn PresentationMode(ctx: FiscalOutlookContext) -> impl IntoView {
    let selected = Memo::new(move |_| ctx.selected());

    view! {
        <PageFrame page_id="d404_fiscal_outlook--presentation" category=PAGE_CAT_CUSTOM class="d404-presentation">
            <div class="d404-presentation__bar">
                <div>
                    <h1>{move || selected.get().map(|r| r.name).unwrap_or_default()}</h1>
                    <p class="d404-presentation__subtitle">"Modo Apresentação Executiva"</p>
                </div>
                <div class="d404-presentation__nav">
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| ctx.previous()>
                        {icon("chevron-left")}
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| ctx.next()>
                        {icon("chevron-right")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| ctx.presentation.set(false)
                    >
                        {icon("x")}
                    </Button>
                </div>
            </div>

            {move || selected.get().map(|record| view! { <PresentationBody ctx=ctx record=record /> })}
        </PageFrame>
    }
}

#[component]
fn PresentationBody(ctx: FiscalOutlookContext, record: FiscalRecord) -> impl IntoView {
    let variation_class = match record.trend() {
        Trend::Up => "d404-presentation__figure d404-presentation__figure--up",
        Trend::Down => "d404-presentation__figure d404-presentation__figure--down",
    };
    let position = move || ctx.selected_position().map(|p| format!("{}º Posição", p));

    view! {
        <div class="d404-presentation__grid">
            <div class="d404-presentation__left">
                <div class="d404-presentation__hero">
                    <div>
                        <p class="d404-presentation__label">"Projeção de Repasse 25/26"</p>
                        <h2 class="d404-presentation__figure">
                            {format!("R$ {}", format_brl(record.revenue_projection))}
                        </h2>
                    </div>
                    <div>
                        <p class="d404-presentation__label">"Performance"</p>
                        <h2 class=variation_class>
                            {format_signed_percent(record.definitive_variation2024, 2)}
                        </h2>
                    </div>
                </div>
                <div class="d404-panel">
                    <h3>"Trajetória do IVA (2022-2024)"</h3>
                    <IvaHistoryChart record=record.clone() />
                </div>
            </div>

            <div class="d404-presentation__right">
                <InsightPanel ctx=ctx title="Estratégia do Gestor" />
                <div class="d404-panel">
                    <p class="d404-presentation__label">"Ranking Estadual"</p>
                    <p class="d404-presentation__rank">{position}</p>
                    <div class="d404-detail__fact">
                        <span>"Total Incremento IPM"</span>
                        <span class="mono">{format_index(record.ipm_increment)}</span>
                    </div>
                    <div class="d404-detail__fact">
                        <span>"Contribuição VA"</span>
                        <span class="mono">{format_brl_millions(record.total_contribution, 1)}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
