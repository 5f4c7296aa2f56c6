//! Per-route access requirements.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use routewarden_core::Role;

/// Normalized access-control metadata for one route.
///
/// Invariant: `allowed_roles` is `Some` only when non-empty, and then
/// `requires_auth` is true — a role check without authentication is
/// meaningless and unrepresentable here. Constructors and [`RawRequirement`]
/// normalization both enforce this; fields stay private so nothing past the
/// loading boundary can break it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRequirement {
    requires_auth: bool,
    allowed_roles: Option<BTreeSet<Role>>,
}

impl RouteRequirement {
    /// No requirements at all: anyone may navigate here.
    pub fn public() -> Self {
        Self { requires_auth: false, allowed_roles: None }
    }

    /// Requires a credential, any role.
    pub fn authenticated() -> Self {
        Self { requires_auth: true, allowed_roles: None }
    }

    /// Requires a credential *and* one of the given roles.
    ///
    /// An empty role list collapses to [`RouteRequirement::authenticated`].
    pub fn roles(allowed: impl IntoIterator<Item = Role>) -> Self {
        let set: BTreeSet<Role> = allowed.into_iter().collect();
        Self {
            requires_auth: true,
            allowed_roles: if set.is_empty() { None } else { Some(set) },
        }
    }

    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    pub fn allowed_roles(&self) -> Option<&BTreeSet<Role>> {
        self.allowed_roles.as_ref()
    }
}

impl Default for RouteRequirement {
    fn default() -> Self {
        Self::public()
    }
}

/// The declarative shape as routes declare it (`requiresAuth`,
/// `allowedRoles`), before normalization.
///
/// `allowed_roles` is kept as raw JSON on purpose: a malformed list must
/// degrade at load time instead of failing deserialization of the whole
/// table (and thereby navigation).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRequirement {
    #[serde(default)]
    pub requires_auth: Option<bool>,
    #[serde(default)]
    pub allowed_roles: Option<Value>,
}

impl RawRequirement {
    /// Normalize into an invariant-holding [`RouteRequirement`].
    ///
    /// Degradations (never errors):
    /// - `allowedRoles` that is not a list of integer roles → no role
    ///   restriction, warn-logged with the offending route.
    /// - non-empty role list with `requiresAuth` absent/false →
    ///   `requires_auth` forced true.
    pub fn normalize(self, route: &str) -> RouteRequirement {
        let roles = match self.allowed_roles {
            None => None,
            Some(value) => match decode_role_list(&value) {
                Some(set) => Some(set),
                None => {
                    tracing::warn!(
                        route,
                        shape = %value,
                        "allowedRoles is not a recognizable role list, treating as unrestricted"
                    );
                    None
                }
            },
        };

        match roles {
            Some(set) if !set.is_empty() => RouteRequirement {
                requires_auth: true,
                allowed_roles: Some(set),
            },
            _ => RouteRequirement {
                requires_auth: self.requires_auth.unwrap_or(false),
                allowed_roles: None,
            },
        }
    }
}

/// `Some` only if every member is an integer fitting a role tier.
fn decode_role_list(value: &Value) -> Option<BTreeSet<Role>> {
    let items = value.as_array()?;
    items
        .iter()
        .map(|item| {
            let n = item.as_u64()?;
            u8::try_from(n).ok().map(Role::new)
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(v: Value) -> RawRequirement {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn absent_fields_normalize_to_public() {
        let req = raw(json!({})).normalize("/login");
        assert!(!req.requires_auth());
        assert!(req.allowed_roles().is_none());
    }

    #[test]
    fn role_list_implies_requires_auth() {
        let req = raw(json!({ "allowedRoles": [2, 3] })).normalize("/health-items");
        assert!(req.requires_auth());
        let roles = req.allowed_roles().unwrap();
        assert!(roles.contains(&Role::new(2)) && roles.contains(&Role::new(3)));
    }

    #[test]
    fn empty_role_list_collapses_to_auth_flag_only() {
        let req = raw(json!({ "requiresAuth": true, "allowedRoles": [] })).normalize("/dashboard");
        assert!(req.requires_auth());
        assert!(req.allowed_roles().is_none());
    }

    #[test]
    fn unrecognizable_role_list_degrades_to_unrestricted() {
        for bad in [
            json!({ "requiresAuth": true, "allowedRoles": "admin" }),
            json!({ "requiresAuth": true, "allowedRoles": { "admin": true } }),
            json!({ "requiresAuth": true, "allowedRoles": [2, "three"] }),
            json!({ "requiresAuth": true, "allowedRoles": [2, -1] }),
            json!({ "requiresAuth": true, "allowedRoles": [2, 1.5] }),
            json!({ "requiresAuth": true, "allowedRoles": [2, 400] }),
        ] {
            let req = raw(bad).normalize("/health-items");
            assert!(req.requires_auth(), "auth flag must survive degradation");
            assert!(req.allowed_roles().is_none(), "bad list must degrade to unrestricted");
        }
    }

    #[test]
    fn roles_constructor_holds_the_invariant() {
        let req = RouteRequirement::roles([Role::new(2)]);
        assert!(req.requires_auth());
        assert_eq!(RouteRequirement::roles([]), RouteRequirement::authenticated());
    }
}
