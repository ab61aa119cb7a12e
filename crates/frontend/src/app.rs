use crate::dashboards::FiscalOutlookDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <FiscalOutlookDashboard />
    }
}
