use gloo::timers::future::TimeoutFuture;
use shared::{GoalUpdateRequest, GoalUpdateResponse, SavingsGoal};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::animation::{animate_amount, AnimationTokens};
use crate::services::api::ApiClient;
use crate::services::error::{validate_amount, UpdateError};
use crate::services::feedback::{vibrate_pattern, CELEBRATION_DURATION_MS, CELEBRATION_PATTERN};
use crate::services::format::{clamp_progress, format_currency};
use crate::services::logging::Logger;

/// Rendered state of one card, derived from the last accepted response.
/// Applying the same response twice must land on the same state.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalCardViewState {
    pub progress: u8,
    pub amount: f64,
    pub achieved: bool,
    pub on_track: Option<bool>,
}

fn view_state_after(update: &GoalUpdateResponse) -> GoalCardViewState {
    GoalCardViewState {
        progress: clamp_progress(update.progress_percentage),
        amount: update.current_amount,
        achieved: update.is_achieved,
        on_track: update.is_on_track,
    }
}

#[derive(Properties, PartialEq)]
pub struct GoalCardProps {
    pub goal: SavingsGoal,
    pub api_client: ApiClient,
    pub tokens: AnimationTokens,
    pub on_refresh: Callback<()>,
}

#[function_component(GoalCard)]
pub fn goal_card(props: &GoalCardProps) -> Html {
    let goal = &props.goal;

    // Card view state, seeded from the list payload and owned by this
    // card from then on (last response wins).
    let progress = use_state(|| clamp_progress(goal.progress_percentage));
    let displayed_amount = use_state(|| goal.current_amount);
    let achieved = use_state(|| goal.is_achieved);
    let on_track = use_state(|| Option::<bool>::None);
    let celebrating = use_state(|| false);

    // Form state.
    let amount_input = use_state(String::new);
    let submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);
    let success_message = use_state(|| Option::<String>::None);

    // A card removed mid-animation must not leave a frame loop writing.
    {
        let tokens = props.tokens.clone();
        let goal_id = goal.id.clone();
        use_effect_with((), move |_| {
            move || {
                tokens.cancel(&goal_id);
            }
        });
    }

    let on_amount_change = {
        let amount_input = amount_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount_input.set(input.value());
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let tokens = props.tokens.clone();
        let on_refresh = props.on_refresh.clone();
        let goal_id = goal.id.clone();
        let amount_input = amount_input.clone();
        let submitting = submitting.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();
        let progress = progress.clone();
        let displayed_amount = displayed_amount.clone();
        let achieved = achieved.clone();
        let on_track = on_track.clone();
        let celebrating = celebrating.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Validation happens synchronously; a bad amount never leaves
            // the page.
            let amount = match validate_amount(&amount_input) {
                Ok(amount) => amount,
                Err(err) => {
                    error_message.set(Some(err.to_string()));
                    return;
                }
            };

            let request = GoalUpdateRequest {
                goal_id: goal_id.clone(),
                amount,
            };

            let api_client = api_client.clone();
            let tokens = tokens.clone();
            let on_refresh = on_refresh.clone();
            let goal_id = goal_id.clone();
            let amount_input = amount_input.clone();
            let submitting = submitting.clone();
            let error_message = error_message.clone();
            let success_message = success_message.clone();
            let progress = progress.clone();
            let displayed_amount = displayed_amount.clone();
            let achieved = achieved.clone();
            let on_track = on_track.clone();
            let celebrating = celebrating.clone();

            spawn_local(async move {
                submitting.set(true);
                error_message.set(None);
                success_message.set(None);

                match api_client.update_goal_amount(&request).await {
                    Ok(update) if update.success => {
                        Logger::info_with_component(
                            "goal-card",
                            &format!("goal {} updated: {}", goal_id, update.message),
                        );

                        let view = view_state_after(&update);
                        progress.set(view.progress);
                        achieved.set(view.achieved);
                        on_track.set(view.on_track);

                        // Count up from whatever is currently displayed;
                        // an older loop for this goal goes stale here.
                        let start = *displayed_amount;
                        let token = tokens.begin(&goal_id);
                        animate_amount(tokens.clone(), goal_id.clone(), token, start, view.amount, {
                            let displayed_amount = displayed_amount.clone();
                            move |value| displayed_amount.set(value)
                        });

                        if view.achieved {
                            celebrating.set(true);
                            vibrate_pattern(&CELEBRATION_PATTERN);

                            let celebrating = celebrating.clone();
                            spawn_local(async move {
                                TimeoutFuture::new(CELEBRATION_DURATION_MS).await;
                                celebrating.set(false);
                            });
                        }

                        success_message.set(Some(update.message));
                        amount_input.set(String::new());
                        on_refresh.emit(());
                    }
                    Ok(update) => {
                        // Business-level failure: the server's message, the
                        // entered amount stays in the form.
                        error_message.set(Some(UpdateError::Business(update.message).to_string()));
                    }
                    Err(err) => {
                        Logger::error_with_component(
                            "goal-card",
                            &format!("goal {} update failed: {:?}", goal_id, err),
                        );
                        error_message.set(Some(err.to_string()));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let dismiss_error = {
        let error_message = error_message.clone();
        Callback::from(move |_: MouseEvent| error_message.set(None))
    };

    let dismiss_success = {
        let success_message = success_message.clone();
        Callback::from(move |_: MouseEvent| success_message.set(None))
    };

    let card_class = format!(
        "goal-card{}",
        if *celebrating { " celebrate" } else { "" }
    );
    let badge_class = if *achieved {
        "progress-badge achieved"
    } else {
        "progress-badge"
    };

    html! {
        <article class={card_class} id={format!("goal-card-{}", goal.id)}>
            <div class="goal-header">
                <h3 class="goal-title">{&goal.title}</h3>
                <span class={badge_class}>{format!("{}%", *progress)}</span>
            </div>

            {if let Some(description) = goal.description.as_ref() {
                html! { <p class="goal-description">{description}</p> }
            } else { html! {} }}

            <div class="progress-bar">
                <div class="progress-fill" style={format!("width: {}%", *progress)}></div>
            </div>

            <div class="goal-amounts">
                <span class="current-amount" data-amount={format!("{}", *displayed_amount)}>
                    {format_currency(*displayed_amount)}
                </span>
                <span class="target-amount">
                    {format!("из {}", format_currency(goal.target_amount))}
                </span>
            </div>

            {if *on_track == Some(false) && !*achieved {
                html! {
                    <div class="form-message info">
                        {"Вы отстаёте от графика накоплений"}
                    </div>
                }
            } else { html! {} }}

            {if let Some(error) = error_message.as_ref() {
                html! {
                    <div class="form-message error" role="alert">
                        {error}
                        <button type="button" class="banner-dismiss" onclick={dismiss_error}>
                            {"×"}
                        </button>
                    </div>
                }
            } else { html! {} }}

            {if let Some(success) = success_message.as_ref() {
                html! {
                    <div class="form-message success" role="status">
                        {success}
                        <button type="button" class="banner-dismiss" onclick={dismiss_success}>
                            {"×"}
                        </button>
                    </div>
                }
            } else { html! {} }}

            <form class="goal-update-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for={format!("goal-amount-{}", goal.id)}>
                        {"Новая сумма накоплений"}
                    </label>
                    <input
                        type="number"
                        id={format!("goal-amount-{}", goal.id)}
                        placeholder="10000"
                        step="0.01"
                        min="0.01"
                        value={(*amount_input).clone()}
                        oninput={on_amount_change}
                        disabled={*submitting}
                    />
                </div>
                <button
                    type="submit"
                    class="btn btn-primary goal-update-btn"
                    disabled={*submitting}
                >
                    {if *submitting { "Обновление..." } else { "Обновить" }}
                </button>
            </form>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn successful_update() -> GoalUpdateResponse {
        GoalUpdateResponse {
            success: true,
            message: "Цель обновлена!".to_string(),
            progress_percentage: 100,
            current_amount: 50000.0,
            is_achieved: true,
            is_on_track: None,
        }
    }

    #[test]
    fn achieved_response_fills_the_bar_and_badge() {
        let view = view_state_after(&successful_update());
        assert_eq!(view.progress, 100);
        assert_eq!(view.amount, 50000.0);
        assert!(view.achieved);
    }

    #[test]
    fn out_of_range_progress_is_clamped_for_rendering() {
        let mut update = successful_update();
        update.progress_percentage = 180;

        let view = view_state_after(&update);
        assert_eq!(view.progress, 100);
    }

    #[test]
    fn applying_the_same_response_twice_does_not_drift() {
        let update = successful_update();
        let first = view_state_after(&update);
        let second = view_state_after(&update);
        assert_eq!(first, second);
    }

    #[test]
    fn schedule_hint_flows_through() {
        let mut update = successful_update();
        update.is_achieved = false;
        update.progress_percentage = 40;
        update.is_on_track = Some(false);

        let view = view_state_after(&update);
        assert_eq!(view.on_track, Some(false));
        assert!(!view.achieved);
    }
}
