use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

/// Hook tracking the browser's connectivity.
///
/// Seeds from `navigator.onLine`, then follows the window `online` and
/// `offline` events. Listeners are removed on unmount.
#[hook]
pub fn use_online_status() -> bool {
    let online = use_state(|| window().map(|w| w.navigator().on_line()).unwrap_or(true));

    {
        let online = online.clone();

        use_effect_with((), move |_| {
            let window = window().expect("should have window");

            let handle_online = {
                let online = online.clone();
                Closure::wrap(Box::new(move |_: web_sys::Event| {
                    online.set(true);
                }) as Box<dyn FnMut(_)>)
            };

            let handle_offline = {
                let online = online.clone();
                Closure::wrap(Box::new(move |_: web_sys::Event| {
                    online.set(false);
                }) as Box<dyn FnMut(_)>)
            };

            let _ = window
                .add_event_listener_with_callback("online", handle_online.as_ref().unchecked_ref());
            let _ = window.add_event_listener_with_callback(
                "offline",
                handle_offline.as_ref().unchecked_ref(),
            );

            move || {
                let _ = window.remove_event_listener_with_callback(
                    "online",
                    handle_online.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "offline",
                    handle_offline.as_ref().unchecked_ref(),
                );
            }
        });
    }

    *online
}
