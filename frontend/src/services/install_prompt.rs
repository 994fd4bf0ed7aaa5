use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Event;

use crate::services::logging::Logger;

/// Page-lifetime holder for the deferred install prompt event.
///
/// `beforeinstallprompt` fires once, early, and the event has to be
/// stashed so it can be replayed when the user actually asks to install.
/// The holder is shared by cloning (`Rc` inside) and injected where
/// needed instead of living in a global.
#[derive(Clone, Default)]
pub struct InstallPrompt {
    deferred: Rc<RefCell<Option<Event>>>,
}

impl InstallPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stash a captured `beforeinstallprompt` event.
    pub fn capture(&self, event: Event) {
        *self.deferred.borrow_mut() = Some(event);
    }

    pub fn is_available(&self) -> bool {
        self.deferred.borrow().is_some()
    }

    /// Drop the stored event without showing anything (after
    /// `appinstalled`, or when the browser revokes installability).
    pub fn clear(&self) {
        self.deferred.borrow_mut().take();
    }

    /// Show the browser install dialog and consume the stored event.
    ///
    /// `BeforeInstallPromptEvent` has no web-sys binding, so `prompt()`
    /// is looked up and invoked reflectively.
    pub fn show(&self) {
        let event = match self.deferred.borrow_mut().take() {
            Some(event) => event,
            None => return,
        };

        let target: &JsValue = event.as_ref();
        let prompt = match Reflect::get(target, &JsValue::from_str("prompt")) {
            Ok(prompt) => prompt,
            Err(e) => {
                Logger::warn_with_component(
                    "install-prompt",
                    &format!("prompt() lookup failed: {:?}", e),
                );
                return;
            }
        };

        match prompt.dyn_into::<Function>() {
            Ok(prompt) => {
                if let Err(e) = prompt.call0(target) {
                    Logger::warn_with_component(
                        "install-prompt",
                        &format!("prompt() call failed: {:?}", e),
                    );
                }
            }
            Err(_) => {
                Logger::warn_with_component("install-prompt", "stored event has no prompt()");
            }
        }
    }
}

impl PartialEq for InstallPrompt {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.deferred, &other.deferred)
    }
}

// Requires a real DOM event, so browser-only.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn holder_captures_and_clears() {
        let prompt = InstallPrompt::new();
        assert!(!prompt.is_available());

        let event = Event::new("beforeinstallprompt").unwrap();
        prompt.capture(event);
        assert!(prompt.is_available());

        prompt.clear();
        assert!(!prompt.is_available());
    }

    #[wasm_bindgen_test]
    fn clones_share_the_same_deferred_event() {
        let prompt = InstallPrompt::new();
        let other = prompt.clone();

        let event = Event::new("beforeinstallprompt").unwrap();
        prompt.capture(event);
        assert!(other.is_available());

        other.show(); // plain Event has no prompt(); consumed anyway
        assert!(!prompt.is_available());
    }
}
