//! The home screen: navigation hub plus a collection refresh.

use std::sync::Arc;
use uniflow_domain::GetUsersUseCase;
use uniflow_mvi::{Controller, Engine};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HomeState {
    pub is_loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeEvent {
    Refresh,
    UserListClicked,
    SettingsClicked,
    ProfileClicked(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeNav {
    GoToUserList,
    GoToSettings,
    GoToProfile { user_id: String, edit: bool },
}

/// Refresh cannot fail outward (the repository folds fetch faults into an
/// empty emission), so navigation is the only effect this screen emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeEffect {
    Navigation(HomeNav),
}

pub struct HomeController {
    engine: Arc<Engine<HomeState, HomeEffect>>,
    get_users: GetUsersUseCase,
}

impl HomeController {
    #[must_use]
    pub fn new(get_users: GetUsersUseCase) -> Self {
        Self {
            engine: Arc::new(Engine::new(HomeState::default())),
            get_users,
        }
    }

    fn refresh(&self) {
        let engine = Arc::clone(&self.engine);
        let get_users = self.get_users.clone();

        self.engine.set_state(|_| HomeState { is_loading: true });
        self.engine.spawn(async move {
            get_users.refresh().await;
            engine.set_state(|_| HomeState { is_loading: false });
        });
    }
}

impl Controller for HomeController {
    type State = HomeState;
    type Event = HomeEvent;
    type Effect = HomeEffect;

    fn engine(&self) -> &Engine<Self::State, Self::Effect> {
        &self.engine
    }

    fn on_event(&self, event: HomeEvent) {
        match event {
            HomeEvent::Refresh => self.refresh(),
            HomeEvent::UserListClicked => {
                self.engine
                    .set_effect(|| HomeEffect::Navigation(HomeNav::GoToUserList));
            }
            HomeEvent::SettingsClicked => {
                self.engine
                    .set_effect(|| HomeEffect::Navigation(HomeNav::GoToSettings));
            }
            HomeEvent::ProfileClicked(user_id) => {
                self.engine.set_effect(|| {
                    HomeEffect::Navigation(HomeNav::GoToProfile {
                        user_id,
                        edit: false,
                    })
                });
            }
        }
    }
}
