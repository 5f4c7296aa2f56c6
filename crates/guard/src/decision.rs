//! The decision procedure.

use serde::{Deserialize, Serialize};

use routewarden_core::RoutePath;
use routewarden_routes::RouteRequirement;
use routewarden_session::Session;

use crate::policy::GuardPolicy;

/// Outcome of one navigation decision.
///
/// Adjacently tagged: internal tagging cannot carry a newtype variant whose
/// payload serializes as a bare string, as `RoutePath` does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", content = "path", rename_all = "snake_case")]
pub enum Decision {
    /// The transition proceeds unmodified.
    Allow,
    /// The transition is replaced by one to the given path.
    RedirectTo(RoutePath),
}

impl Decision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn redirect_target(&self) -> Option<&RoutePath> {
        match self {
            Decision::Allow => None,
            Decision::RedirectTo(path) => Some(path),
        }
    }
}

/// Decide one navigation attempt.
///
/// Pure and synchronous: no IO, no panics, no suspension, same inputs give
/// the same decision. Evaluation order is load-bearing:
///
/// 1. auth required + no credential → redirect to the login path. Terminal,
///    so an unauthenticated user is never told "wrong role".
/// 2. allow-list present + session role not a member → redirect to the
///    landing path. Terminal.
/// 3. otherwise → allow.
///
/// A redirect whose target is the path being decided would re-enter itself
/// forever; in that case the transition is allowed instead.
///
/// Note the interplay with role defaulting: a corrupted stored role reads as
/// tier 0, so any allow-list omitting 0 excludes corrupted sessions by
/// construction. That is deliberate least-privilege, not an accident.
pub fn decide(
    policy: &GuardPolicy,
    target: &RoutePath,
    requirement: &RouteRequirement,
    session: &Session,
) -> Decision {
    if requirement.requires_auth() && !session.is_authenticated() {
        return redirect_unless_self(target, policy.login_path());
    }

    if let Some(allowed) = requirement.allowed_roles() {
        if !allowed.contains(&session.role) {
            return redirect_unless_self(target, policy.landing_path());
        }
    }

    Decision::Allow
}

fn redirect_unless_self(target: &RoutePath, redirect: &RoutePath) -> Decision {
    if target == redirect {
        Decision::Allow
    } else {
        Decision::RedirectTo(redirect.clone())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use routewarden_core::Role;

    fn path(s: &str) -> RoutePath {
        RoutePath::new(s).unwrap()
    }

    fn policy() -> GuardPolicy {
        GuardPolicy::standard()
    }

    #[test]
    fn public_route_is_always_allowed() {
        let req = RouteRequirement::public();
        for session in [
            Session::anonymous(),
            Session::authenticated("tok", Role::new(2)),
        ] {
            let d = decide(&policy(), &path("/login"), &req, &session);
            assert!(d.is_allow());
        }
    }

    #[test]
    fn missing_credential_redirects_to_login() {
        let req = RouteRequirement::authenticated();
        let d = decide(&policy(), &path("/dashboard"), &req, &Session::anonymous());
        assert_eq!(d, Decision::RedirectTo(path("/login")));
    }

    #[test]
    fn auth_is_checked_before_role() {
        // no credential AND wrong role: the login redirect must win
        let req = RouteRequirement::roles([Role::new(2)]);
        let session = Session { credential: None, role: Role::new(7) };
        let d = decide(&policy(), &path("/health-items"), &req, &session);
        assert_eq!(d, Decision::RedirectTo(path("/login")));
    }

    #[test]
    fn wrong_role_redirects_to_landing() {
        let req = RouteRequirement::roles([Role::new(2), Role::new(3)]);
        let session = Session::authenticated("tok", Role::new(1));
        let d = decide(&policy(), &path("/health-items"), &req, &session);
        assert_eq!(d, Decision::RedirectTo(path("/dashboard")));
    }

    #[test]
    fn member_role_is_allowed() {
        let req = RouteRequirement::roles([Role::new(2), Role::new(3)]);
        let session = Session::authenticated("tok", Role::new(2));
        assert!(decide(&policy(), &path("/health-items"), &req, &session).is_allow());
    }

    #[test]
    fn auth_only_route_ignores_role() {
        let req = RouteRequirement::authenticated();
        let session = Session::authenticated("tok", Role::ANONYMOUS);
        assert!(decide(&policy(), &path("/plan-items"), &req, &session).is_allow());
    }

    #[test]
    fn corrupted_role_is_excluded_from_allow_lists_omitting_zero() {
        let req = RouteRequirement::roles([Role::new(2), Role::new(3)]);
        let session = Session::authenticated("tok", Role::ANONYMOUS);
        let d = decide(&policy(), &path("/health-items"), &req, &session);
        assert_eq!(d, Decision::RedirectTo(path("/dashboard")));
    }

    #[test]
    fn redirect_never_targets_itself() {
        // a misconfigured landing route that excludes the session's role
        // must not bounce the session off its own redirect target
        let req = RouteRequirement::roles([Role::new(2)]);
        let session = Session::authenticated("tok", Role::new(1));
        let d = decide(&policy(), &path("/dashboard"), &req, &session);
        assert!(d.is_allow());

        // same for the login route requiring auth
        let req = RouteRequirement::authenticated();
        let d = decide(&policy(), &path("/login"), &req, &Session::anonymous());
        assert!(d.is_allow());
    }

    #[test]
    fn decisions_survive_serialization() {
        // the redirect variant carries a bare-string payload, which only an
        // adjacently tagged representation can hold
        for decision in [Decision::Allow, Decision::RedirectTo(path("/login"))] {
            let json = serde_json::to_string(&decision).unwrap();
            let back: Decision = serde_json::from_str(&json).unwrap();
            assert_eq!(back, decision);
        }

        let json = serde_json::to_string(&Decision::RedirectTo(path("/login"))).unwrap();
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&json).unwrap(),
            serde_json::json!({ "decision": "redirect_to", "path": "/login" })
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use routewarden_routes::RouteRequirement;
        use std::collections::BTreeSet;

        fn arb_session() -> impl Strategy<Value = Session> {
            (proptest::option::of("[a-z0-9]{1,16}"), any::<u8>()).prop_map(|(tok, tier)| Session {
                credential: tok.map(routewarden_core::Credential::new),
                role: Role::new(tier),
            })
        }

        fn arb_requirement() -> impl Strategy<Value = RouteRequirement> {
            (any::<bool>(), proptest::option::of(proptest::collection::btree_set(any::<u8>(), 0..6)))
                .prop_map(|(auth, roles)| match roles {
                    Some(set) if !set.is_empty() => {
                        RouteRequirement::roles(set.into_iter().map(Role::new))
                    }
                    _ if auth => RouteRequirement::authenticated(),
                    _ => RouteRequirement::public(),
                })
        }

        proptest! {
            /// Same snapshot in, same decision out: the guard has no hidden state.
            #[test]
            fn decide_is_idempotent(session in arb_session(), req in arb_requirement()) {
                let policy = GuardPolicy::standard();
                let target = RoutePath::new("/plan-items").unwrap();
                let first = decide(&policy, &target, &req, &session);
                let second = decide(&policy, &target, &req, &session);
                prop_assert_eq!(first, second);
            }

            /// With a credential held, the decision reduces to role membership.
            #[test]
            fn membership_decides_for_authenticated_sessions(
                tier in any::<u8>(),
                roles in proptest::collection::btree_set(any::<u8>(), 1..6),
            ) {
                let policy = GuardPolicy::standard();
                let target = RoutePath::new("/health-items").unwrap();
                let allowed: BTreeSet<Role> = roles.iter().copied().map(Role::new).collect();
                let req = RouteRequirement::roles(allowed.clone());
                let session = Session::authenticated("tok", Role::new(tier));

                let d = decide(&policy, &target, &req, &session);
                if allowed.contains(&Role::new(tier)) {
                    prop_assert!(d.is_allow());
                } else {
                    prop_assert_eq!(d, Decision::RedirectTo(policy.landing_path().clone()));
                }
            }

            /// No credential on an auth route always lands on the login path,
            /// whatever the role says.
            #[test]
            fn missing_credential_always_goes_to_login(
                tier in any::<u8>(),
                roles in proptest::option::of(proptest::collection::btree_set(any::<u8>(), 1..6)),
            ) {
                let policy = GuardPolicy::standard();
                let target = RoutePath::new("/dashboard").unwrap();
                let req = match roles {
                    Some(set) => RouteRequirement::roles(set.into_iter().map(Role::new)),
                    None => RouteRequirement::authenticated(),
                };
                let session = Session { credential: None, role: Role::new(tier) };
                let d = decide(&policy, &target, &req, &session);
                prop_assert_eq!(d, Decision::RedirectTo(policy.login_path().clone()));
            }
        }
    }
}
