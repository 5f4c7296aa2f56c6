//! Redirect targets for denied navigations.

use serde::{Deserialize, Serialize};

use routewarden_core::{DomainError, DomainResult, RoutePath};

/// Where the guard sends navigations it does not allow.
///
/// `login_path` receives unauthenticated sessions; `landing_path` receives
/// authenticated sessions whose role is not in the destination's allow-list.
/// Both targets must themselves be public or auth-default routes in the
/// hosting table, otherwise redirects could chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardPolicy {
    login_path: RoutePath,
    landing_path: RoutePath,
}

impl GuardPolicy {
    /// A policy with distinct redirect targets.
    ///
    /// The two paths must differ: a shared target would make the wrong-role
    /// redirect land on the login route and strand authenticated users.
    pub fn new(login_path: RoutePath, landing_path: RoutePath) -> DomainResult<Self> {
        if login_path == landing_path {
            return Err(DomainError::validation(format!(
                "login and landing paths must differ (both '{login_path}')"
            )));
        }
        Ok(Self { login_path, landing_path })
    }

    /// The conventional `/login` + `/dashboard` pair.
    pub fn standard() -> Self {
        Self {
            login_path: RoutePath::new_static("/login"),
            landing_path: RoutePath::new_static("/dashboard"),
        }
    }

    pub fn login_path(&self) -> &RoutePath {
        &self.login_path
    }

    pub fn landing_path(&self) -> &RoutePath {
        &self.landing_path
    }
}

impl Default for GuardPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_targets_are_rejected() {
        let p = RoutePath::new("/login").unwrap();
        assert!(GuardPolicy::new(p.clone(), p).is_err());
    }

    #[test]
    fn standard_pair_is_valid() {
        let policy = GuardPolicy::standard();
        assert_eq!(policy.login_path().as_str(), "/login");
        assert_eq!(policy.landing_path().as_str(), "/dashboard");
    }
}
