use wasm_bindgen::JsValue;
use web_sys::window;

/// Vibration pattern played when a goal is achieved.
pub const CELEBRATION_PATTERN: [u32; 5] = [100, 50, 100, 50, 100];

/// How long the one-shot celebration styling stays on a card.
pub const CELEBRATION_DURATION_MS: u32 = 500;

/// Play a vibration pattern. Silently a no-op where the platform has no
/// Vibration API (desktop browsers, iOS Safari).
pub fn vibrate_pattern(pattern: &[u32]) {
    let navigator = match window() {
        Some(window) => window.navigator(),
        None => return,
    };
    if !supports_vibration(navigator.as_ref()) {
        return;
    }

    let steps = js_sys::Array::new();
    for step in pattern {
        steps.push(&JsValue::from(*step));
    }
    let _ = navigator.vibrate_with_pattern(&steps);
}

// Mirrors the `'vibrate' in navigator` check; calling the missing method
// through the binding would throw instead of returning false.
fn supports_vibration(navigator: &JsValue) -> bool {
    js_sys::Reflect::has(navigator, &JsValue::from_str("vibrate")).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celebration_pattern_matches_the_product_feel() {
        assert_eq!(CELEBRATION_PATTERN, [100, 50, 100, 50, 100]);
        assert_eq!(CELEBRATION_DURATION_MS, 500);
    }
}
