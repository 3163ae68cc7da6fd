//! Application lifecycle state machine.
//!
//! One machine per process. It owns the single mutable state cell governing
//! start-up, pause/resume and teardown, publishes committed states through a
//! watch channel, and rejects every transition the table does not allow.
//!
//! # Example
//!
//! ```
//! use uniflow_lifecycle::{AppLifecycle, LifecycleState};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> uniflow_types::CoreResult<()> {
//! let lifecycle = AppLifecycle::default();
//! lifecycle.initialize().await?;
//! lifecycle.start().await?;
//! assert_eq!(lifecycle.state(), LifecycleState::Running);
//! lifecycle.destroy().await;
//! assert_eq!(lifecycle.state(), LifecycleState::Destroyed);
//! # Ok(())
//! # }
//! ```

mod machine;
mod state;

pub use machine::{AppLifecycle, LifecycleConfig, WarmupFn};
pub use state::LifecycleState;
