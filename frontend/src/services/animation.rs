use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Length of the count-up window.
pub const ANIMATION_DURATION_MS: u32 = 1000;

/// 60 updates per second over the window.
pub const TOTAL_FRAMES: u32 = 60;

/// Delay between frames, in whole milliseconds.
pub const FRAME_INTERVAL_MS: u32 = ANIMATION_DURATION_MS / TOTAL_FRAMES;

/// Per-goal animation tokens.
///
/// Starting a new animation bumps the goal's token; frames spawned by an
/// older loop see a stale token and stop without writing. This is what
/// makes a second update for the same goal safe while the first is still
/// animating, and what stops the loop when its card is removed.
#[derive(Clone, Default)]
pub struct AnimationTokens {
    tokens: Rc<RefCell<HashMap<String, u64>>>,
}

impl AnimationTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new animation for the goal, invalidating any running one.
    /// Returns the token the new frame loop must carry.
    pub fn begin(&self, goal_id: &str) -> u64 {
        let mut tokens = self.tokens.borrow_mut();
        let token = tokens.entry(goal_id.to_string()).or_insert(0);
        *token += 1;
        *token
    }

    /// Whether `token` is still the goal's live animation.
    pub fn is_current(&self, goal_id: &str, token: u64) -> bool {
        self.tokens.borrow().get(goal_id).copied() == Some(token)
    }

    /// Invalidate whatever animation is running for the goal.
    pub fn cancel(&self, goal_id: &str) {
        if let Some(token) = self.tokens.borrow_mut().get_mut(goal_id) {
            *token += 1;
        }
    }
}

impl PartialEq for AnimationTokens {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tokens, &other.tokens)
    }
}

/// Linear interpolation for `frame` of `total`.
///
/// Monotonic in the frame count; the final frame lands exactly on `end`
/// rather than trusting floating point to get there.
pub fn frame_value(start: f64, end: f64, frame: u32, total: u32) -> f64 {
    if frame >= total {
        return end;
    }
    start + (end - start) * f64::from(frame) / f64::from(total)
}

/// Drive a displayed amount from `start` to `end` over the fixed window,
/// writing each frame through `write` while the token stays live.
pub fn animate_amount(
    tokens: AnimationTokens,
    goal_id: String,
    token: u64,
    start: f64,
    end: f64,
    write: impl Fn(f64) + 'static,
) {
    spawn_local(async move {
        for frame in 1..=TOTAL_FRAMES {
            TimeoutFuture::new(FRAME_INTERVAL_MS).await;
            if !tokens.is_current(&goal_id, token) {
                return;
            }
            write(frame_value(start, end, frame, TOTAL_FRAMES));
        }
    });
}
