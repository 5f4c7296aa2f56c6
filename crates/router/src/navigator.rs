//! Per-navigation orchestration.

use std::cell::Cell;

use serde::{Deserialize, Serialize};

use routewarden_core::RoutePath;
use routewarden_guard::{Decision, GuardPolicy, NavigationRequest};
use routewarden_routes::{RouteRequirement, RouteTable};
use routewarden_session::{Session, SessionRead};

/// What the host router is told to do with a transition.
///
/// Adjacently tagged: internal tagging cannot carry a newtype variant whose
/// payload serializes as a bare string, as `RoutePath` does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "path", rename_all = "snake_case")]
pub enum HookOutcome {
    /// Commit the transition as requested.
    Proceed,
    /// Commit a transition to this path instead.
    ProceedTo(RoutePath),
    /// Discard the transition; a newer navigation superseded it.
    Abort,
}

impl HookOutcome {
    fn from_decision(decision: Decision) -> Self {
        match decision {
            Decision::Allow => HookOutcome::Proceed,
            Decision::RedirectTo(path) => HookOutcome::ProceedTo(path),
        }
    }
}

/// Ticket for one navigation attempt, used to detect supersession.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NavigationSeq(u64);

/// Drives the guard for a hosting router.
///
/// Owns the route table, the session read capability, and the redirect
/// policy. Single-threaded cooperative by design (the guard runs on the UI's
/// event loop), hence `Cell` rather than any lock for the sequence counter.
#[derive(Debug)]
pub struct Navigator<S> {
    table: RouteTable,
    sessions: S,
    policy: GuardPolicy,
    current: Cell<u64>,
}

impl<S: SessionRead> Navigator<S> {
    pub fn new(table: RouteTable, sessions: S, policy: GuardPolicy) -> Self {
        Self { table, sessions, policy, current: Cell::new(0) }
    }

    pub fn policy(&self) -> &GuardPolicy {
        &self.policy
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Register a new navigation attempt, superseding any in-flight one.
    pub fn begin(&self) -> NavigationSeq {
        let seq = self.current.get() + 1;
        self.current.set(seq);
        NavigationSeq(seq)
    }

    /// Whether a ticket still names the most recent navigation.
    pub fn is_current(&self, seq: NavigationSeq) -> bool {
        self.current.get() == seq.0
    }

    /// Turn a decided outcome loose only if its navigation is still current.
    ///
    /// A superseded navigation's side effects must be discarded: the host
    /// gets `Abort` and applies nothing.
    pub fn conclude(&self, seq: NavigationSeq, decision: Decision) -> HookOutcome {
        if !self.is_current(seq) {
            tracing::debug!(seq = seq.0, "navigation superseded, discarding decision");
            return HookOutcome::Abort;
        }
        HookOutcome::from_decision(decision)
    }

    /// Decide one target against a fresh session snapshot.
    ///
    /// Unknown paths carry no requirement and are treated as public; the
    /// host router owns its own not-found handling.
    pub fn decide(&self, to: &RoutePath) -> Decision {
        let requirement = self
            .table
            .resolve(to)
            .map(|def| def.requirement().clone())
            .unwrap_or_else(RouteRequirement::public);
        let session = Session::capture(&self.sessions);
        let request = NavigationRequest::new(to.clone(), requirement, session);
        let decision = request.decide(&self.policy);
        tracing::debug!(
            navigation = %request.id,
            to = %request.target,
            authenticated = request.session.is_authenticated(),
            role = %request.session.role,
            ?decision,
            "navigation decided"
        );
        decision
    }

    /// The per-navigation hook: begin, decide, conclude.
    ///
    /// Exactly one outcome per call. `from` participates in logging only;
    /// the decision depends solely on the destination and the session.
    pub fn handle(&self, to: &RoutePath, from: Option<&RoutePath>) -> HookOutcome {
        let seq = self.begin();
        let _span = tracing::debug_span!(
            "navigation",
            to = %to,
            from = from.map(|f| f.as_str()).unwrap_or("-"),
        )
        .entered();
        let decision = self.decide(to);
        self.conclude(seq, decision)
    }

    /// Follow redirects to the final committed path.
    ///
    /// Each redirect target is re-decided, exactly as the host router would
    /// re-enter the hook. Terminates because the guard never redirects a
    /// request to the path it already targets; the hop cap is a backstop
    /// against a future policy/table combination violating that.
    pub fn settle(&self, to: &RoutePath) -> RoutePath {
        let mut current = to.clone();
        for _ in 0..4 {
            match self.decide(&current) {
                Decision::Allow => return current,
                Decision::RedirectTo(next) => current = next,
            }
        }
        tracing::warn!(to = %to, stuck_at = %current, "redirect chain did not settle");
        current
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
