//! The user-detail screen.

use std::sync::Arc;
use uniflow_domain::GetUsersUseCase;
use uniflow_model::User;
use uniflow_mvi::{Controller, Engine};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDetailState {
    pub user: Option<User>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserDetailEvent {
    Load(String),
    BackClicked,
    EditClicked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserDetailNav {
    GoBack,
    GoToProfile { user_id: String, edit: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserDetailEffect {
    Navigation(UserDetailNav),
    ShowError(String),
}

/// Shows one user, loaded by id from the current collection snapshot.
pub struct UserDetailController {
    engine: Arc<Engine<UserDetailState, UserDetailEffect>>,
    get_users: GetUsersUseCase,
}

impl UserDetailController {
    /// Builds the controller and loads `user_id` immediately.
    #[must_use]
    pub fn new(user_id: impl Into<String>, get_users: GetUsersUseCase) -> Self {
        let controller = Self {
            engine: Arc::new(Engine::new(UserDetailState {
                is_loading: true,
                ..UserDetailState::default()
            })),
            get_users,
        };
        controller.load_user(&user_id.into());
        controller
    }

    fn load_user(&self, user_id: &str) {
        match self.get_users.get_user_by_id(user_id) {
            Some(user) => {
                self.engine.set_state(|state| UserDetailState {
                    user: Some(user),
                    is_loading: false,
                    ..state.clone()
                });
            }
            None => {
                self.engine.set_state(|state| UserDetailState {
                    is_loading: false,
                    error: Some("user not found".into()),
                    ..state.clone()
                });
                self.engine
                    .set_effect(|| UserDetailEffect::ShowError("user not found".into()));
            }
        }
    }
}

impl Controller for UserDetailController {
    type State = UserDetailState;
    type Event = UserDetailEvent;
    type Effect = UserDetailEffect;

    fn engine(&self) -> &Engine<Self::State, Self::Effect> {
        &self.engine
    }

    fn on_event(&self, event: UserDetailEvent) {
        match event {
            UserDetailEvent::Load(user_id) => {
                self.engine.set_state(|state| UserDetailState {
                    is_loading: true,
                    ..state.clone()
                });
                self.load_user(&user_id);
            }
            UserDetailEvent::BackClicked => {
                self.engine
                    .set_effect(|| UserDetailEffect::Navigation(UserDetailNav::GoBack));
            }
            UserDetailEvent::EditClicked => {
                // Only a loaded user can be edited.
                if let Some(user) = self.engine.state().user {
                    self.engine.set_effect(|| {
                        UserDetailEffect::Navigation(UserDetailNav::GoToProfile {
                            user_id: user.id,
                            edit: true,
                        })
                    });
                }
            }
        }
    }
}
