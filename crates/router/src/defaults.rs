//! The stock portal route table.

use routewarden_core::{DomainResult, Role};
use routewarden_routes::{RouteDef, RoutePattern, RouteRequirement, RouteTable};

/// The route table the hosting portal ships with.
///
/// `/health-items` is restricted to the admin (2) and institution (3) tiers;
/// the member tier and sessions with corrupted role data (tier 0) are
/// deliberately outside that list. Everything else past login is
/// auth-only.
pub fn default_routes() -> DomainResult<RouteTable> {
    let defs = [
        ("/login", "login", RouteRequirement::public()),
        ("/register", "register", RouteRequirement::public()),
        ("/dashboard", "dashboard", RouteRequirement::authenticated()),
        ("/institutions", "institutions", RouteRequirement::authenticated()),
        (
            "/institutions/:id",
            "institution-detail",
            RouteRequirement::authenticated(),
        ),
        ("/plan-items", "plan-items", RouteRequirement::authenticated()),
        (
            "/health-items",
            "health-items",
            RouteRequirement::roles([Role::new(2), Role::new(3)]),
        ),
    ];

    RouteTable::new(
        defs.into_iter()
            .map(|(path, name, requirement)| {
                Ok(RouteDef::new(RoutePattern::new(path)?, requirement).named(name))
            })
            .collect::<DomainResult<Vec<_>>>()?,
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
