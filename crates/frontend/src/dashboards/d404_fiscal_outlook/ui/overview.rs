use super::context::FiscalOutlookContext;
use crate::shared::components::stat_card::{StatCard, StatTone};
use contracts::dashboards::d404_fiscal_outlook::format::{
    format_brl_millions, format_signed_percent, format_thousands,
};
use contracts::dashboards::d404_fiscal_outlook::AggregateStats;
use leptos::prelude::*;

/// Обзор по всему штату, показывается пока ничего не выбрано
#[component]
pub fn FiscalOverview(ctx: FiscalOutlookContext) -> impl IntoView {
    let stats = Memo::new(move |_| ctx.session.with(|s| s.as_ref().map(|s| s.stats())));

    let growth_tone = Signal::derive(move || match stats.get() {
        Some(s) if s.average_growth > 0.0 => StatTone::Good,
        Some(s) if s.average_growth < 0.0 => StatTone::Bad,
        _ => StatTone::Neutral,
    });

    view! {
        <section class="d404-overview">
            <div class="d404-overview__intro">
                <h1>"Visão Global do Estado"</h1>
                <p>"Selecione um município na barra lateral para acessar o relatório detalhado."</p>
            </div>

            <div class="d404-overview__cards">
                <StatCard
                    label="Total Repasses"
                    icon_name="money"
                    value=stat_text(stats, |s| format_brl_millions(s.total_revenue_projection, 0))
                />
                <StatCard
                    label="Crescimento Médio"
                    icon_name="trending-up"
                    value=stat_text(stats, |s| {
                        if s.count == 0 {
                            "—".to_string()
                        } else {
                            format_signed_percent(s.average_growth, 2)
                        }
                    })
                    tone=growth_tone
                />
                <StatCard
                    label="Contribuição VA"
                    icon_name="award"
                    value=stat_text(stats, |s| format_brl_millions(s.total_contribution, 1))
                />
                <StatCard
                    label="Municípios"
                    icon_name="map-pin"
                    value=stat_text(stats, |s| format_thousands(s.count as u64))
                    tone=StatTone::Accent
                />
            </div>
        </section>
    }
}

fn stat_text(stats: Memo<Option<AggregateStats>>, f: fn(&AggregateStats) -> String) -> Signal<String> {
    Signal::derive(move || {
        stats
            .get()
            .map(|s| f(&s))
            .unwrap_or_else(|| "—".to_string())
    })
}
