//! The composition root.
//!
//! [`AppContainer`] builds the object graph once — data source, repository,
//! use cases, settings, lifecycle — and hands out controllers on demand.
//! Construction is explicit; there is no service locator.

use std::sync::Arc;
use tracing::info;
use uniflow_domain::{AddUserUseCase, GetUsersUseCase};
use uniflow_lifecycle::{AppLifecycle, LifecycleConfig};
use uniflow_model::User;
use uniflow_repository::{DataSource, InMemoryDataSource, Repository};
use uniflow_screens::{
    HomeController, InMemorySettingsStore, Settings, SettingsStore, SplashController,
    UserDetailController, UserListController,
};
use uniflow_types::CoreResult;

/// Installs the process-wide tracing subscriber, filtered by `RUST_LOG`.
///
/// Call once, from the outermost binary. Returns quietly if a subscriber
/// is already installed.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}

/// Owns every long-lived object in the core and wires controllers to them.
pub struct AppContainer {
    lifecycle: Arc<AppLifecycle>,
    repository: Arc<Repository<User>>,
    get_users: GetUsersUseCase,
    add_user: AddUserUseCase,
    settings: Settings,
}

impl AppContainer {
    /// An in-memory container: empty data source, map-backed settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(InMemoryDataSource::<User>::new()),
            Arc::new(InMemorySettingsStore::new()),
        )
    }

    /// Builds the graph over the given platform collaborators.
    #[must_use]
    pub fn with_parts(source: Arc<dyn DataSource<User>>, store: Arc<dyn SettingsStore>) -> Self {
        let repository = Arc::new(Repository::new(source));
        Self {
            lifecycle: Arc::new(AppLifecycle::new(LifecycleConfig::default())),
            get_users: GetUsersUseCase::new(Arc::clone(&repository)),
            add_user: AddUserUseCase::new(Arc::clone(&repository)),
            repository,
            settings: Settings::new(store),
        }
    }

    /// Brings the core up: lifecycle to `Running`, collection pulled from
    /// the data source.
    pub async fn start(&self) -> CoreResult<()> {
        self.lifecycle.initialize().await?;
        self.lifecycle.start().await?;
        self.repository.refresh().await;
        info!("app container started");
        Ok(())
    }

    /// Tears the core down. Idempotent.
    pub async fn stop(&self) {
        self.lifecycle.destroy().await;
        info!("app container stopped");
    }

    #[must_use]
    pub fn lifecycle(&self) -> Arc<AppLifecycle> {
        Arc::clone(&self.lifecycle)
    }

    #[must_use]
    pub fn repository(&self) -> Arc<Repository<User>> {
        Arc::clone(&self.repository)
    }

    #[must_use]
    pub fn get_users(&self) -> GetUsersUseCase {
        self.get_users.clone()
    }

    #[must_use]
    pub fn add_user(&self) -> AddUserUseCase {
        self.add_user.clone()
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings.clone()
    }

    // ── Controller factories ─────────────────────────────────────

    #[must_use]
    pub fn user_list_controller(&self) -> UserListController {
        UserListController::new(self.get_users.clone(), self.add_user.clone())
    }

    #[must_use]
    pub fn user_detail_controller(&self, user_id: impl Into<String>) -> UserDetailController {
        UserDetailController::new(user_id, self.get_users.clone())
    }

    #[must_use]
    pub fn home_controller(&self) -> HomeController {
        HomeController::new(self.get_users.clone())
    }

    #[must_use]
    pub fn splash_controller(&self) -> SplashController {
        SplashController::new()
    }
}

impl Default for AppContainer {
    fn default() -> Self {
        Self::new()
    }
}
