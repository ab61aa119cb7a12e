use contracts::dashboards::d404_fiscal_outlook::format::format_index;
use contracts::dashboards::d404_fiscal_outlook::FiscalRecord;
use leptos::prelude::*;

/// Минимальная высота столбца, чтобы наименьшее значение оставалось видимым
const MIN_BAR_PERCENT: f64 = 15.0;

/// Столбчатая диаграмма IVA за 2022-2024
#[component]
pub fn IvaHistoryChart(record: FiscalRecord) -> impl IntoView {
    let points = record.iva_history();
    let max = points.iter().map(|p| p.iva).fold(f64::MIN, f64::max);
    let min = points.iter().map(|p| p.iva).fold(f64::MAX, f64::min);
    let last = points.len() - 1;

    let bars = points
        .into_iter()
        .enumerate()
        .map(|(i, point)| {
            let height = bar_height(point.iva, min, max);
            let class = if i == last {
                "d404-chart__bar d404-chart__bar--current"
            } else {
                "d404-chart__bar"
            };
            view! {
                <div class="d404-chart__column">
                    <span class="d404-chart__value">{format_index(point.iva)}</span>
                    <div class=class style=format!("height: {:.1}%;", height)></div>
                    <span class="d404-chart__year">{point.year.to_string()}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="d404-chart">{bars}</div>
    }
}

fn bar_height(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span <= 0.0 {
        return 100.0;
    }
    MIN_BAR_PERCENT + (value - min) / span * (100.0 - MIN_BAR_PERCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height_bounds() {
        assert_eq!(bar_height(1.0, 1.0, 2.0), MIN_BAR_PERCENT);
        assert_eq!(bar_height(2.0, 1.0, 2.0), 100.0);
        assert_eq!(bar_height(5.0, 5.0, 5.0), 100.0);
    }
}
