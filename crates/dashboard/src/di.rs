use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynAuthService, DynHashing, DynJwtService},
    config::AccountDirectory,
    service::{AuthService, AuthServiceDeps},
    utils::Metrics,
};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"DynAuthService")
            .finish()
    }
}

pub struct DependenciesInjectDeps {
    pub hash: DynHashing,
    pub jwt: DynJwtService,
    pub demo_password: String,
    pub metrics: Arc<Mutex<Metrics>>,
    pub registry: Arc<Mutex<Registry>>,
}

impl DependenciesInject {
    pub async fn new(deps: DependenciesInjectDeps) -> Result<Self> {
        let DependenciesInjectDeps {
            hash,
            jwt,
            demo_password,
            metrics,
            registry,
        } = deps;

        let directory = AccountDirectory::demo(hash.as_ref(), &demo_password)
            .await
            .context("Failed to seed account directory")?;

        let auth_service: DynAuthService = Arc::new(
            AuthService::new(AuthServiceDeps {
                hash,
                jwt,
                directory: Arc::new(directory),
                metrics,
                registry,
            })
            .await,
        );

        Ok(Self { auth_service })
    }
}
