use yew::prelude::*;

use crate::services::format::format_currency;

#[derive(Properties, PartialEq)]
pub struct GoalSummaryProps {
    pub total_saved: f64,
    pub total_target: f64,
    pub overall_progress: f64,
}

/// Totals across every goal, shown above the cards.
#[function_component(GoalSummary)]
pub fn goal_summary(props: &GoalSummaryProps) -> Html {
    let progress = props.overall_progress.clamp(0.0, 100.0);

    html! {
        <section class="savings-summary">
            <div class="summary-totals">
                <div class="summary-item">
                    <span class="summary-label">{"Накоплено:"}</span>
                    <span class="summary-value">{format_currency(props.total_saved)}</span>
                </div>
                <div class="summary-item">
                    <span class="summary-label">{"Все цели:"}</span>
                    <span class="summary-value">{format_currency(props.total_target)}</span>
                </div>
            </div>
            <div class="progress-bar">
                <div class="progress-fill" style={format!("width: {:.0}%", progress)}></div>
            </div>
            <div class="progress-text">{format!("{:.0}% от всех целей", progress)}</div>
        </section>
    }
}
