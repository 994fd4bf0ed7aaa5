use shared::GoalListResponse;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq, Default)]
pub struct GoalsState {
    pub response: Option<GoalListResponse>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Hook for loading the savings goals and their summary totals.
///
/// Fetches on mount; the returned callback re-fetches on demand (after a
/// card mutates a goal). A refresh keeps the previous response visible
/// while the new one is in flight so mounted cards are not disturbed.
#[hook]
pub fn use_goals(api_client: ApiClient) -> (UseStateHandle<GoalsState>, Callback<()>) {
    let goals_state = use_state(GoalsState::default);

    let refresh = {
        let goals_state = goals_state.clone();
        let api_client = api_client.clone();

        Callback::from(move |_: ()| {
            let goals_state = goals_state.clone();
            let api_client = api_client.clone();

            spawn_local(async move {
                Logger::debug_with_component("use-goals", "refreshing goal list");
                goals_state.set(GoalsState {
                    response: (*goals_state).response.clone(),
                    loading: true,
                    error: None,
                });

                match api_client.list_goals().await {
                    Ok(response) => {
                        goals_state.set(GoalsState {
                            response: Some(response),
                            loading: false,
                            error: None,
                        });
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "use-goals",
                            &format!("failed to load goals: {:?}", e),
                        );
                        goals_state.set(GoalsState {
                            response: (*goals_state).response.clone(),
                            loading: false,
                            error: Some(e.to_string()),
                        });
                    }
                }
            });
        })
    };

    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    (goals_state, refresh)
}
