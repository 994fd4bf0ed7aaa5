mod components;
mod hooks;
mod services;

use yew::prelude::*;

use components::{GoalCard, GoalSummary, InstallButton, OfflineIndicator};
use hooks::use_goals;
use services::animation::AnimationTokens;
use services::api::ApiClient;
use services::install_prompt::InstallPrompt;

#[function_component(App)]
fn app() -> Html {
    // Page-lifetime collaborators, created once and injected downward.
    let api_client = use_state(ApiClient::new);
    let tokens = use_state(AnimationTokens::new);
    let install_prompt = use_state(InstallPrompt::new);

    let (goals, refresh) = use_goals((*api_client).clone());

    html! {
        <>
            <OfflineIndicator />

            <header class="header">
                <div class="container">
                    <h1>{"FinAssistant"}</h1>
                    <InstallButton prompt={(*install_prompt).clone()} />
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <h2>{"Мои цели сбережений"}</h2>

                    {if let Some(error) = goals.error.as_ref() {
                        html! {
                            <div class="form-message error" role="alert">
                                {error}
                            </div>
                        }
                    } else { html! {} }}

                    {if goals.loading && goals.response.is_none() {
                        html! { <div class="loading">{"Загрузка целей..."}</div> }
                    } else if let Some(response) = goals.response.as_ref() {
                        html! {
                            <>
                                <GoalSummary
                                    total_saved={response.total_saved}
                                    total_target={response.total_target}
                                    overall_progress={response.overall_progress}
                                />

                                <section class="goals-section">
                                    {for response.goals.iter().map(|goal| html! {
                                        <GoalCard
                                            key={goal.id.clone()}
                                            goal={goal.clone()}
                                            api_client={(*api_client).clone()}
                                            tokens={(*tokens).clone()}
                                            on_refresh={refresh.clone()}
                                        />
                                    })}
                                </section>
                            </>
                        }
                    } else { html! {} }}
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
