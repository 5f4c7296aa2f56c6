//! The route table: patterns, requirements, resolution.

use serde::Deserialize;

use routewarden_core::{DomainError, DomainResult, RoutePath};

use crate::pattern::RoutePattern;
use crate::requirement::{RawRequirement, RouteRequirement};

/// One navigable destination and its access requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDef {
    pattern: RoutePattern,
    name: Option<String>,
    requirement: RouteRequirement,
}

impl RouteDef {
    pub fn new(pattern: RoutePattern, requirement: RouteRequirement) -> Self {
        Self { pattern, name: None, requirement }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn requirement(&self) -> &RouteRequirement {
        &self.requirement
    }
}

/// Immutable set of route definitions, built once at startup.
///
/// Construction validates the table (duplicate patterns are a configuration
/// bug and fail fast); per-route requirement shapes were already normalized
/// and can no longer be malformed here.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    defs: Vec<RouteDef>,
}

/// Declarative route shape for JSON-loaded tables.
#[derive(Debug, Deserialize)]
struct RawRouteDef {
    path: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    meta: Option<RawRequirement>,
}

impl RouteTable {
    pub fn new(defs: impl IntoIterator<Item = RouteDef>) -> DomainResult<Self> {
        let defs: Vec<RouteDef> = defs.into_iter().collect();
        for (i, def) in defs.iter().enumerate() {
            if defs[..i].iter().any(|d| d.pattern == def.pattern) {
                return Err(DomainError::duplicate_route(def.pattern.as_str()));
            }
        }
        Ok(Self { defs })
    }

    /// Load a table from its declarative JSON form.
    ///
    /// Shape per route: `{ "path": "/x", "name"?: ..., "meta"?:
    /// { "requiresAuth"?: bool, "allowedRoles"?: [int] } }`.
    /// A missing or malformed `meta` degrades per requirement normalization;
    /// a malformed `path` or a duplicate is a hard load error.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let raw: Vec<RawRouteDef> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("route table JSON: {e}")))?;

        let defs = raw
            .into_iter()
            .map(|r| {
                let pattern = RoutePattern::new(r.path)?;
                let requirement = r
                    .meta
                    .unwrap_or_default()
                    .normalize(pattern.as_str());
                let mut def = RouteDef::new(pattern, requirement);
                if let Some(name) = r.name {
                    def = def.named(name);
                }
                Ok(def)
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Self::new(defs)
    }

    /// Resolve a concrete path to its route definition.
    ///
    /// An exact static match wins over a parameterized one, so `/plans/new`
    /// can coexist with `/plans/:id`. Unknown paths resolve to `None`; the
    /// host router owns its own not-found handling.
    pub fn resolve(&self, path: &RoutePath) -> Option<&RouteDef> {
        self.defs
            .iter()
            .filter(|d| d.pattern.matches(path))
            .max_by_key(|d| d.pattern.is_static())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDef> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
