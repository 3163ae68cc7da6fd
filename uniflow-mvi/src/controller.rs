//! The contract a screen controller fulfills.

use crate::Engine;
use tokio::sync::mpsc;
use tokio_stream::wrappers::WatchStream;

/// A screen controller: a state/effect [`Engine`] plus an event handler.
///
/// `on_event` must accept every variant of the event type; controllers
/// reduce state and emit effects but never expose mutation any other way.
pub trait Controller {
    type State: Clone + Send + Sync + 'static;
    type Event;
    type Effect: Send + 'static;

    /// The engine backing this controller.
    fn engine(&self) -> &Engine<Self::State, Self::Effect>;

    /// Handles one user intent.
    fn on_event(&self, event: Self::Event);

    /// The current state.
    fn state(&self) -> Self::State {
        self.engine().state()
    }

    /// Replay-latest state stream.
    fn observe(&self) -> WatchStream<Self::State> {
        self.engine().observe()
    }

    /// Takes the one-shot effect receiver. `None` after the first call.
    fn effects(&self) -> Option<mpsc::Receiver<Self::Effect>> {
        self.engine().effects()
    }

    /// Tears the controller down: aborts its tasks and silences it.
    fn dispose(&self) {
        self.engine().dispose();
    }
}
