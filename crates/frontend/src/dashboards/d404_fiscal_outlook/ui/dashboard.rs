use super::context::FiscalOutlookContext;
use super::detail::MunicipalityDetail;
use super::overview::FiscalOverview;
use super::presentation::PresentationMode;
use super::sidebar::MunicipalitySidebar;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use leptos::prelude::*;

/// Fiscal Outlook Dashboard (d404)
#[component]
pub fn FiscalOutlookDashboard() -> impl IntoView {
    let ctx = FiscalOutlookContext::new();
    ctx.load();

    // Клавиатура работает только в режиме презентации
    let _ = window_event_listener(leptos::ev::keydown, move |ev: leptos::ev::KeyboardEvent| {
        if !ctx.presentation.get_untracked() {
            return;
        }
        match ev.key().as_str() {
            "ArrowRight" => ctx.next(),
            "ArrowLeft" => ctx.previous(),
            "Escape" => ctx.presentation.set(false),
            _ => {}
        }
    });

    view! {
        <PageFrame page_id="d404_fiscal_outlook--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h2 class="page__title">"Panorama Fiscal Municipal"</h2>
            </div>

            {move || ctx.error.get().map(|msg| view! {
                <div class="alert alert--error">
                    <strong>"⚠ Erro: "</strong>
                    {msg}
                </div>
            })}

            <Show
                when=move || ctx.is_ready()
                fallback=|| view! {
                    <div class="d404-loading">"Carregando dados..."</div>
                }
            >
                <div class="page__content d404-layout">
                    <MunicipalitySidebar ctx=ctx />
                    <main class="d404-main">
                        <Show
                            when=move || ctx.selected().is_some()
                            fallback=move || view! { <FiscalOverview ctx=ctx /> }
                        >
                            <MunicipalityDetail ctx=ctx />
                        </Show>
                    </main>
                </div>
            </Show>

            <Show when=move || ctx.presentation.get() && ctx.selected().is_some()>
                <PresentationMode ctx=ctx />
            </Show>
        </PageFrame>
    }
}
