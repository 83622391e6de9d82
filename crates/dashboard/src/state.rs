use crate::{
    config::Config,
    di::{DependenciesInject, DependenciesInjectDeps},
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Hashing, JwtConfig},
    model::{NavigationRegistry, RouteAccessTable},
    service::EdgeGuard,
    utils::{GuardMetrics, Metrics},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub edge_guard: Arc<EdgeGuard>,
    pub navigation: NavigationRegistry,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Arc<Mutex<Metrics>>,
    pub guard_metrics: GuardMetrics,
    pub secure_cookie: bool,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let hash = Arc::new(Hashing::with_cost(config.bcrypt_cost)) as DynHashing;
        let registry = Arc::new(Mutex::new(Registry::default()));
        let metrics = Arc::new(Mutex::new(Metrics::new()));
        let guard_metrics = GuardMetrics::new();

        let table = RouteAccessTable::from_config(&config.route_access)
            .context("Failed to build route access table")?;
        info!("Route access table covers {} segments", table.len());

        let navigation = NavigationRegistry::default();
        navigation
            .validate()
            .context("Navigation registry is inconsistent")?;

        let di_container = DependenciesInject::new(DependenciesInjectDeps {
            hash,
            jwt: jwt_config,
            demo_password: config.demo_password.clone(),
            metrics: metrics.clone(),
            registry: registry.clone(),
        })
        .await
        .context("Failed to initialize dependency injection container")?;

        guard_metrics.register(&mut *registry.lock().await);

        Ok(Self {
            di_container,
            edge_guard: Arc::new(EdgeGuard::new(Arc::new(table))),
            navigation,
            registry,
            metrics,
            guard_metrics,
            secure_cookie: config.secure_cookie,
        })
    }
}
