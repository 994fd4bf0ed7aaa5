use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use crate::services::install_prompt::InstallPrompt;
use crate::services::logging::Logger;

/// Hook wiring the install-prompt holder to the browser.
///
/// Captures `beforeinstallprompt` into the holder (preventing the
/// mini-infobar) and clears it again on `appinstalled`. Returns the
/// availability flag as a state handle so the install button can drop it
/// after showing the dialog.
#[hook]
pub fn use_install_prompt(prompt: InstallPrompt) -> UseStateHandle<bool> {
    let available = use_state(|| prompt.is_available());

    {
        let available = available.clone();

        use_effect_with(prompt, move |prompt| {
            let window = window().expect("should have window");

            let handle_before_install = {
                let prompt = prompt.clone();
                let available = available.clone();
                Closure::wrap(Box::new(move |event: web_sys::Event| {
                    // Keep the browser's own banner away; stash for later.
                    event.prevent_default();
                    prompt.capture(event);
                    available.set(true);
                }) as Box<dyn FnMut(_)>)
            };

            let handle_installed = {
                let prompt = prompt.clone();
                let available = available.clone();
                Closure::wrap(Box::new(move |_: web_sys::Event| {
                    Logger::info_with_component("install-prompt", "application installed");
                    prompt.clear();
                    available.set(false);
                }) as Box<dyn FnMut(_)>)
            };

            let _ = window.add_event_listener_with_callback(
                "beforeinstallprompt",
                handle_before_install.as_ref().unchecked_ref(),
            );
            let _ = window.add_event_listener_with_callback(
                "appinstalled",
                handle_installed.as_ref().unchecked_ref(),
            );

            move || {
                let _ = window.remove_event_listener_with_callback(
                    "beforeinstallprompt",
                    handle_before_install.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "appinstalled",
                    handle_installed.as_ref().unchecked_ref(),
                );
            }
        });
    }

    available
}
