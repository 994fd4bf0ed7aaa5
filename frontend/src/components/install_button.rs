use yew::prelude::*;

use crate::hooks::use_install_prompt;
use crate::services::install_prompt::InstallPrompt;

#[derive(Properties, PartialEq)]
pub struct InstallButtonProps {
    pub prompt: InstallPrompt,
}

/// Install-the-app button; rendered only while a deferred prompt is held.
#[function_component(InstallButton)]
pub fn install_button(props: &InstallButtonProps) -> Html {
    let available = use_install_prompt(props.prompt.clone());

    let on_click = {
        let prompt = props.prompt.clone();
        let available = available.clone();
        Callback::from(move |_: MouseEvent| {
            prompt.show();
            available.set(false);
        })
    };

    if !*available {
        return html! {};
    }

    html! {
        <button type="button" class="btn btn-secondary install-btn" onclick={on_click}>
            {"Установить приложение"}
        </button>
    }
}
