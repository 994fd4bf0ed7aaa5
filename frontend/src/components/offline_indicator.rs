use yew::prelude::*;

use crate::hooks::use_online_status;

/// Banner shown while the browser reports no connectivity.
#[function_component(OfflineIndicator)]
pub fn offline_indicator() -> Html {
    let online = use_online_status();

    if online {
        return html! {};
    }

    html! {
        <div class="offline-indicator" role="status">
            {"Нет подключения к интернету. Данные могут быть устаревшими."}
        </div>
    }
}
