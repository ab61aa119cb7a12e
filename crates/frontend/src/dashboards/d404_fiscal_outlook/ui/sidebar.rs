use super::context::FiscalOutlookContext;
use contracts::dashboards::d404_fiscal_outlook::format::{
    format_brl_thousands, format_signed_percent,
};
use contracts::dashboards::d404_fiscal_outlook::{FiscalRecord, SortKey, Trend};
use leptos::prelude::*;
use thaw::*;

/// Список муниципалитетов с поиском и сортировкой
#[component]
pub fn MunicipalitySidebar(ctx: FiscalOutlookContext) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let sort_value = RwSignal::new(SortKey::default().as_str().to_string());

    Effect::new(move |_| {
        let term = search.get();
        ctx.set_search_term(term);
    });

    Effect::new(move |_| {
        let value = sort_value.get();
        match SortKey::from_str_opt(&value) {
            Some(key) => ctx.set_sort_key(key),
            None => log::warn!("D404: unknown sort key '{}'", value),
        }
    });

    view! {
        <aside class="d404-sidebar">
            <div class="d404-sidebar__filters">
                <Input value=search placeholder="Buscar município..." />
                <Select value=sort_value>
                    {SortKey::ALL
                        .iter()
                        .map(|key| view! { <option value=key.as_str()>{key.label()}</option> })
                        .collect_view()}
                </Select>
            </div>

            <ul class="d404-sidebar__list">
                <For
                    each=move || ctx.visible_records()
                    key=|record| record.name.clone()
                    children=move |record: FiscalRecord| {
                        view! { <SidebarItem ctx=ctx record=record /> }
                    }
                />
            </ul>

            {move || ctx.visible_records().is_empty().then(|| view! {
                <div class="d404-sidebar__empty">"Nenhum município encontrado."</div>
            })}
        </aside>
    }
}

#[component]
fn SidebarItem(ctx: FiscalOutlookContext, record: FiscalRecord) -> impl IntoView {
    let name = record.name.clone();
    let item_class = {
        let name = name.clone();
        move || {
            if ctx.is_selected(&name) {
                "d404-sidebar__item d404-sidebar__item--active"
            } else {
                "d404-sidebar__item"
            }
        }
    };
    let trend_class = match record.trend() {
        Trend::Up => "d404-badge d404-badge--up",
        Trend::Down => "d404-badge d404-badge--down",
    };

    view! {
        <li class=item_class on:click=move |_| ctx.select(name.clone())>
            <span class="d404-sidebar__name">{record.name.clone()}</span>
            <span class="d404-sidebar__revenue">
                {format_brl_thousands(record.revenue_projection)}
            </span>
            <span class=trend_class>
                {format_signed_percent(record.definitive_variation2024, 2)}
            </span>
        </li>
    }
}
