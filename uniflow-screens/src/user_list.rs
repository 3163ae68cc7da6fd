//! The user-list screen: searchable list of active users, user creation,
//! and the complete-profiles view.

use futures::StreamExt;
use futures::stream::BoxStream;
use std::sync::{Arc, Mutex};
use tokio::task::AbortHandle;
use tracing::debug;
use uniflow_domain::{AddUserUseCase, GetUsersUseCase};
use uniflow_model::User;
use uniflow_mvi::{Controller, Engine};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserListState {
    pub users: Vec<User>,
    pub query: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserListEvent {
    Refresh,
    SearchChanged(String),
    AddUser { name: String, email: String },
    LoadCompleteProfiles,
    UserClicked(User),
    BackClicked,
    ErrorCleared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserListNav {
    GoBack,
    GoToUserDetail { user_id: String, user_name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserListEffect {
    Navigation(UserListNav),
    ShowToast(String),
    ShowError(String),
}

/// Drives [`UserListState`] from the user streams and the validated write
/// path.
///
/// Each (re)load subscribes to the matching use-case stream and follows it
/// until superseded by a newer query or the controller is disposed. The
/// previous subscription is aborted first, so at most one feeds the state.
/// A failed add folds into `state.error` plus a `ShowError` effect;
/// `ErrorCleared` resets the error without re-running anything.
pub struct UserListController {
    engine: Arc<Engine<UserListState, UserListEffect>>,
    get_users: GetUsersUseCase,
    add_user: AddUserUseCase,
    load: Mutex<Option<AbortHandle>>,
}

impl UserListController {
    /// Builds the controller and starts the initial, unfiltered load.
    #[must_use]
    pub fn new(get_users: GetUsersUseCase, add_user: AddUserUseCase) -> Self {
        let controller = Self {
            engine: Arc::new(Engine::new(UserListState {
                is_loading: true,
                ..UserListState::default()
            })),
            get_users,
            add_user,
            load: Mutex::new(None),
        };
        controller.load_users(String::new());
        controller
    }

    fn load_users(&self, query: String) {
        debug!(query = %query, "subscribing user list");
        let get_users = self.get_users.clone();
        let stream = if query.is_empty() {
            get_users.invoke().boxed()
        } else {
            get_users.search_by_name(query).boxed()
        };
        self.subscribe(stream);
    }

    fn load_complete_profiles(&self) {
        debug!("subscribing complete profiles");
        self.subscribe(self.get_users.complete_profiles().boxed());
    }

    fn subscribe(&self, mut stream: BoxStream<'static, Vec<User>>) {
        let engine = Arc::clone(&self.engine);
        let handle = self.engine.spawn(async move {
            while let Some(users) = stream.next().await {
                engine.set_state(|state| UserListState {
                    users,
                    is_loading: false,
                    error: None,
                    ..state.clone()
                });
            }
        });

        let previous = match self.load.lock() {
            Ok(mut slot) => slot.replace(handle),
            Err(poisoned) => poisoned.into_inner().replace(handle),
        };
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    fn add_user(&self, name: String, email: String) {
        let engine = Arc::clone(&self.engine);
        let add_user = self.add_user.clone();

        self.engine.set_state(|state| UserListState {
            is_loading: true,
            ..state.clone()
        });
        self.engine.spawn(async move {
            match add_user.invoke(User::new(name, email)).await {
                Ok(stored) => {
                    debug!(id = %stored.id, "user added from screen");
                    // The live subscription picks the new user up on commit;
                    // no reload needed.
                    engine.set_state(|state| UserListState {
                        is_loading: false,
                        error: None,
                        ..state.clone()
                    });
                    engine.set_effect(|| UserListEffect::ShowToast("user added".into()));
                }
                Err(err) => {
                    let message = err.to_string();
                    engine.set_state(|state| UserListState {
                        is_loading: false,
                        error: Some(message.clone()),
                        ..state.clone()
                    });
                    engine.set_effect(|| UserListEffect::ShowError(message));
                }
            }
        });
    }
}

impl Controller for UserListController {
    type State = UserListState;
    type Event = UserListEvent;
    type Effect = UserListEffect;

    fn engine(&self) -> &Engine<Self::State, Self::Effect> {
        &self.engine
    }

    fn on_event(&self, event: UserListEvent) {
        match event {
            UserListEvent::Refresh => {
                let query = self.engine.state().query;
                self.engine.set_state(|state| UserListState {
                    is_loading: true,
                    ..state.clone()
                });
                self.load_users(query);
            }
            UserListEvent::SearchChanged(query) => {
                self.engine.set_state(|state| UserListState {
                    query: query.clone(),
                    is_loading: true,
                    ..state.clone()
                });
                self.load_users(query);
            }
            UserListEvent::AddUser { name, email } => {
                self.add_user(name, email);
            }
            UserListEvent::LoadCompleteProfiles => {
                self.engine.set_state(|state| UserListState {
                    is_loading: true,
                    ..state.clone()
                });
                self.load_complete_profiles();
            }
            UserListEvent::UserClicked(user) => {
                self.engine.set_effect(|| {
                    UserListEffect::Navigation(UserListNav::GoToUserDetail {
                        user_id: user.id,
                        user_name: user.name,
                    })
                });
            }
            UserListEvent::BackClicked => {
                self.engine
                    .set_effect(|| UserListEffect::Navigation(UserListNav::GoBack));
            }
            UserListEvent::ErrorCleared => {
                self.engine.set_state(|state| UserListState {
                    error: None,
                    ..state.clone()
                });
            }
        }
    }
}
