//! Protected-route state machine.
//!
//! ```text
//! resolving ──no session──────────────▶ unauthenticated  (navigate to login)
//!     │ ────session, wrong role───────▶ forbidden        (access-denied view)
//!     └─────otherwise─────────────────▶ authorized       (render content)
//! ```
//!
//! The state is recomputed only when one of its inputs changes. Navigation to
//! the login route happens on entering `unauthenticated`, not on every
//! re-evaluation.

use crate::{
    abstract_trait::DynNavigator,
    model::{Role, Session},
};
use tracing::{debug, info};

pub const LOGIN_ROUTE: &str = "/auth/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Resolving,
    Unauthenticated,
    Forbidden,
    Authorized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardInput {
    pub session: Option<Session>,
    pub loading: bool,
    pub required_role: Option<Role>,
}

pub fn evaluate(input: &GuardInput) -> GuardState {
    if input.loading {
        return GuardState::Resolving;
    }

    match (&input.session, input.required_role) {
        (None, _) => GuardState::Unauthenticated,
        (Some(session), Some(required)) if session.role != required => GuardState::Forbidden,
        _ => GuardState::Authorized,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Render<T> {
    Loading,
    Nothing,
    AccessDenied,
    Content(T),
}

pub struct ProtectedRoute {
    navigator: DynNavigator,
    input: GuardInput,
    state: GuardState,
}

impl ProtectedRoute {
    pub fn new(navigator: DynNavigator, required_role: Option<Role>) -> Self {
        Self {
            navigator,
            input: GuardInput {
                session: None,
                loading: true,
                required_role,
            },
            state: GuardState::Resolving,
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn input(&self) -> &GuardInput {
        &self.input
    }

    pub fn update(&mut self, session: Option<Session>, loading: bool) -> GuardState {
        let input = GuardInput {
            session,
            loading,
            required_role: self.input.required_role,
        };
        self.apply(input)
    }

    pub fn set_required_role(&mut self, required_role: Option<Role>) -> GuardState {
        let input = GuardInput {
            required_role,
            ..self.input.clone()
        };
        self.apply(input)
    }

    fn apply(&mut self, input: GuardInput) -> GuardState {
        if input == self.input {
            return self.state;
        }

        let next = evaluate(&input);

        if next != self.state {
            debug!(from = ?self.state, to = ?next, "protected route transition");
        }

        if next == GuardState::Unauthenticated && self.state != GuardState::Unauthenticated {
            info!("No session, redirecting to {LOGIN_ROUTE}");
            self.navigator.push(LOGIN_ROUTE);
        }

        self.input = input;
        self.state = next;
        next
    }

    pub fn render<T>(&self, content: impl FnOnce() -> T) -> Render<T> {
        match self.state {
            GuardState::Resolving => Render::Loading,
            GuardState::Unauthenticated => Render::Nothing,
            GuardState::Forbidden => Render::AccessDenied,
            GuardState::Authorized => Render::Content(content()),
        }
    }
}
