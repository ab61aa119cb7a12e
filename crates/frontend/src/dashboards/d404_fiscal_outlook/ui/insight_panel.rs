use super::context::FiscalOutlookContext;
use crate::shared::icons::icon;
use contracts::dashboards::d404_fiscal_outlook::InsightState;
use leptos::prelude::*;

/// Блок стратегического инсайта для выбранного муниципалитета
#[component]
pub fn InsightPanel(ctx: FiscalOutlookContext, title: &'static str) -> impl IntoView {
    let state = Memo::new(move |_| ctx.insight_state());

    let body = move || match state.get() {
        InsightState::Loading { .. } => view! {
            <div class="d404-insight__skeleton">
                <div class="d404-insight__line"></div>
                <div class="d404-insight__line"></div>
                <div class="d404-insight__line d404-insight__line--short"></div>
            </div>
        }
        .into_any(),
        InsightState::Resolved { text, .. } => view! {
            <blockquote class="d404-insight__quote">
                <p>{format!("\"{}\"", text)}</p>
                <footer>"Assistente Fazendário"</footer>
            </blockquote>
        }
        .into_any(),
        InsightState::Failed { message, .. } => view! {
            <p class="d404-insight__message">{message}</p>
        }
        .into_any(),
        InsightState::Idle => view! {
            <p class="d404-insight__message">"Carregando a análise do consultor virtual..."</p>
        }
        .into_any(),
    };

    view! {
        <div class="d404-insight">
            <h3 class="d404-insight__title">
                {icon("sparkles")}
                {title}
            </h3>
            {body}
        </div>
    }
}
