//! Client-side session state and the revalidation debounce policy.

use crate::models::User;

/// What the client believes about the session. Persisted to localStorage
/// and rehydrated at startup; the server remains the source of truth.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub is_authenticated: bool,
    pub user: Option<User>,
}

impl AuthSnapshot {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: User) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
        }
    }
}

// ============================================================================
// Revalidation policy
// ============================================================================

/// Debounces session revalidation: instead of re-checking the server on
/// every route change, revalidate once every `every` visits. The running
/// counter is persisted so it survives reloads.
#[derive(Clone, Copy, Debug)]
pub struct RevalidatePolicy {
    every: u32,
}

/// Decision for one recorded visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitOutcome {
    /// Threshold reached; revalidate now and reset the counter to zero.
    Revalidate,
    /// Not yet; persist the new counter value.
    Defer(u32),
}

impl RevalidatePolicy {
    pub const fn new(every: u32) -> Self {
        Self { every }
    }

    pub fn record_visit(self, visits_so_far: u32) -> VisitOutcome {
        let visits = visits_so_far + 1;
        if visits >= self.every {
            VisitOutcome::Revalidate
        } else {
            VisitOutcome::Defer(visits)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_transitions() {
        let anon = AuthSnapshot::anonymous();
        assert!(!anon.is_authenticated);
        assert!(anon.user.is_none());

        let authed = AuthSnapshot::authenticated(User {
            username: "alice".to_string(),
        });
        assert!(authed.is_authenticated);
        assert_eq!(authed.user.as_ref().unwrap().username, "alice");
    }

    #[test]
    fn test_revalidate_every_third_visit() {
        let policy = RevalidatePolicy::new(3);
        assert_eq!(policy.record_visit(0), VisitOutcome::Defer(1));
        assert_eq!(policy.record_visit(1), VisitOutcome::Defer(2));
        assert_eq!(policy.record_visit(2), VisitOutcome::Revalidate);
        // Counter reset by the caller after a revalidation
        assert_eq!(policy.record_visit(0), VisitOutcome::Defer(1));
    }

    #[test]
    fn test_revalidate_every_visit() {
        let policy = RevalidatePolicy::new(1);
        assert_eq!(policy.record_visit(0), VisitOutcome::Revalidate);
        assert_eq!(policy.record_visit(7), VisitOutcome::Revalidate);
    }
}
