//! Ephemeral per-navigation request.

use chrono::{DateTime, Utc};
use serde::Serialize;

use routewarden_core::{NavigationId, RoutePath};
use routewarden_routes::RouteRequirement;
use routewarden_session::Session;

use crate::decision::{decide, Decision};
use crate::policy::GuardPolicy;

/// Everything the guard needs for one transition attempt.
///
/// Created by the adapter immediately before a transition, consumed
/// synchronously, discarded once the decision is applied. The id and
/// timestamp exist for log correlation only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationRequest {
    pub id: NavigationId,
    pub target: RoutePath,
    pub requirement: RouteRequirement,
    pub session: Session,
    pub occurred_at: DateTime<Utc>,
}

impl NavigationRequest {
    pub fn new(target: RoutePath, requirement: RouteRequirement, session: Session) -> Self {
        Self {
            id: NavigationId::new(),
            target,
            requirement,
            session,
            occurred_at: Utc::now(),
        }
    }

    /// Decide this request under the given policy.
    pub fn decide(&self, policy: &GuardPolicy) -> Decision {
        decide(policy, &self.target, &self.requirement, &self.session)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_decision_matches_free_function() {
        let policy = GuardPolicy::standard();
        let target = RoutePath::new("/dashboard").unwrap();
        let req = NavigationRequest::new(
            target.clone(),
            RouteRequirement::authenticated(),
            Session::anonymous(),
        );
        assert_eq!(
            req.decide(&policy),
            decide(&policy, &target, &req.requirement, &req.session)
        );
    }
}
