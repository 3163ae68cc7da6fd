//! The splash screen: holds briefly after the intro animation, then moves
//! to home.

use std::sync::Arc;
use std::time::Duration;
use uniflow_mvi::{Controller, Engine};

/// Default hold before navigating away.
const DEFAULT_HOLD: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplashState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplashEvent {
    AnimationEnded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplashNav {
    GoToHome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplashEffect {
    Navigation(SplashNav),
}

pub struct SplashController {
    engine: Arc<Engine<SplashState, SplashEffect>>,
    hold: Duration,
}

impl SplashController {
    #[must_use]
    pub fn new() -> Self {
        Self::with_hold(DEFAULT_HOLD)
    }

    /// Overrides the hold duration. Tests use a near-zero hold.
    #[must_use]
    pub fn with_hold(hold: Duration) -> Self {
        Self {
            engine: Arc::new(Engine::new(SplashState)),
            hold,
        }
    }
}

impl Default for SplashController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for SplashController {
    type State = SplashState;
    type Event = SplashEvent;
    type Effect = SplashEffect;

    fn engine(&self) -> &Engine<Self::State, Self::Effect> {
        &self.engine
    }

    fn on_event(&self, event: SplashEvent) {
        match event {
            SplashEvent::AnimationEnded => {
                let engine = Arc::clone(&self.engine);
                let hold = self.hold;
                self.engine.spawn(async move {
                    tokio::time::sleep(hold).await;
                    engine.set_effect(|| SplashEffect::Navigation(SplashNav::GoToHome));
                });
            }
        }
    }
}
