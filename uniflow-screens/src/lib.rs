//! Screen contracts and their controllers.
//!
//! Each screen is a contract — a state struct, an event enum, and an effect
//! enum with nested navigation variants — plus a controller that owns an
//! [`uniflow_mvi::Engine`] and the use cases it needs. Controllers reduce
//! state in response to events and emit navigation and error effects; they
//! never execute navigation themselves.

pub mod home;
pub mod settings;
pub mod splash;
pub mod user_detail;
pub mod user_list;

pub use home::{HomeController, HomeEffect, HomeEvent, HomeNav, HomeState};
pub use settings::{
    InMemorySettingsStore, LanguageCode, Settings, SettingsStore, ThemeMode,
};
pub use splash::{SplashController, SplashEffect, SplashEvent, SplashNav, SplashState};
pub use user_detail::{
    UserDetailController, UserDetailEffect, UserDetailEvent, UserDetailNav, UserDetailState,
};
pub use user_list::{
    UserListController, UserListEffect, UserListEvent, UserListNav, UserListState,
};
