//! Per-request route check that runs before a page renders.
//!
//! The guard only ever passes a request through or redirects it to the
//! landing page; it never fails. A request without a usable session is left
//! for the client guard (or the public page) to deal with.

use crate::{
    model::{RouteAccessTable, Session, first_segment, is_public_segment},
    service::resolve_cookie,
    utils::GuardOutcome,
};
use std::sync::Arc;

pub const DEFAULT_LANDING: &str = "/dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeDecision {
    /// No session could be resolved.
    Anonymous,
    /// Public segment, not subject to the table.
    Public,
    /// The role may open the segment.
    Pass,
    Redirect { location: String },
}

impl EdgeDecision {
    pub fn outcome(&self) -> GuardOutcome {
        match self {
            EdgeDecision::Anonymous => GuardOutcome::Anonymous,
            EdgeDecision::Public => GuardOutcome::Public,
            EdgeDecision::Pass => GuardOutcome::Pass,
            EdgeDecision::Redirect { .. } => GuardOutcome::Redirect,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, EdgeDecision::Redirect { .. })
    }
}

#[derive(Debug, Clone)]
pub struct EdgeGuard {
    table: Arc<RouteAccessTable>,
    landing: String,
}

impl EdgeGuard {
    pub fn new(table: Arc<RouteAccessTable>) -> Self {
        Self::with_landing(table, DEFAULT_LANDING)
    }

    pub fn with_landing(table: Arc<RouteAccessTable>, landing: &str) -> Self {
        Self {
            table,
            landing: landing.to_string(),
        }
    }

    pub fn table(&self) -> &RouteAccessTable {
        &self.table
    }

    /// Decides from the raw `session` cookie value.
    pub fn decide(&self, cookie: Option<&str>, path: &str) -> EdgeDecision {
        self.decide_for(resolve_cookie(cookie).as_ref(), path)
    }

    pub fn decide_for(&self, session: Option<&Session>, path: &str) -> EdgeDecision {
        let Some(session) = session else {
            return EdgeDecision::Anonymous;
        };

        let segment = first_segment(path);
        if is_public_segment(segment) {
            return EdgeDecision::Public;
        }

        // the landing page is never redirected to itself
        if segment == first_segment(&self.landing) {
            return EdgeDecision::Pass;
        }

        if self.table.allows(session.role, segment) {
            EdgeDecision::Pass
        } else {
            EdgeDecision::Redirect {
                location: self.landing.clone(),
            }
        }
    }
}
