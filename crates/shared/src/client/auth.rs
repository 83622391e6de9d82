use crate::{
    abstract_trait::{DynAuthService, DynClientStorage, DynNavigator},
    client::LOGIN_ROUTE,
    domain::requests::LoginRequest,
    errors::ServiceError,
    model::{REMEMBER_ME_KEY, Session, TOKEN_KEY, USER_KEY},
    service::{DEFAULT_LANDING, resolve_storage},
};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};

/// Browser-side auth hook: keeps the token and user in web storage and moves
/// the router after login and logout.
pub struct ClientAuth {
    api: DynAuthService,
    local: DynClientStorage,
    session: DynClientStorage,
    navigator: DynNavigator,
    loading: AtomicBool,
}

impl ClientAuth {
    pub fn new(
        api: DynAuthService,
        local: DynClientStorage,
        session: DynClientStorage,
        navigator: DynNavigator,
    ) -> Self {
        Self {
            api,
            local,
            session,
            navigator,
            loading: AtomicBool::new(true),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Reads the persisted session and ends the initial loading phase.
    pub fn restore(&self) -> Option<Session> {
        let session = resolve_storage(self.local.as_ref());
        self.loading.store(false, Ordering::SeqCst);
        session
    }

    /// Current session without touching the loading flag.
    pub fn snapshot(&self) -> Option<Session> {
        resolve_storage(self.local.as_ref())
    }

    pub async fn login(&self, input: &LoginRequest) -> Result<Session, ServiceError> {
        self.loading.store(true, Ordering::SeqCst);
        let result = self.api.login(input).await;
        self.loading.store(false, Ordering::SeqCst);

        let response = result?;
        let data = response.data;

        let user = serde_json::to_string(&data.user)
            .map_err(|e| ServiceError::Internal(format!("failed to encode user: {e}")))?;

        self.local.set_item(TOKEN_KEY, &data.token);
        self.local.set_item(USER_KEY, &user);
        if let Some(remember_me) = input.remember_me {
            self.local
                .set_item(REMEMBER_ME_KEY, if remember_me { "true" } else { "false" });
        }

        info!(role = %data.user.role, "Signed in as {}", data.user.username);
        self.navigator.push(DEFAULT_LANDING);

        Ok(Session::from_stored(data.user, data.token))
    }

    /// Ends the session. Local state is torn down and the router lands on the
    /// login page whether or not the remote call succeeds.
    pub async fn logout(&self) {
        let token = self.local.get_item(TOKEN_KEY);

        self.loading.store(true, Ordering::SeqCst);
        let result = self.api.logout(token.as_deref()).await;
        self.loading.store(false, Ordering::SeqCst);

        match result {
            Ok(_) => {
                self.local.remove_item(TOKEN_KEY);
                self.local.remove_item(USER_KEY);
                self.local.remove_item(REMEMBER_ME_KEY);
                self.session.clear();
                info!("Signed out");
            }
            Err(e) => {
                error!("Logout request failed, clearing all client storage: {e}");
                self.local.clear();
                self.session.clear();
            }
        }

        if self.snapshot().is_some() {
            warn!("Session still readable after logout");
        }

        self.navigator.push(LOGIN_ROUTE);
    }
}
