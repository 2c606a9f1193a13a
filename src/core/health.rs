//! Backend liveness state machine.
//!
//! The app starts in `Checking`, runs one bounded health probe, and settles
//! into `Alive` or `Dead`. Dependent calls consult the last-known state
//! instead of re-probing; a dead backend swaps the UI to the maintenance
//! view until the next probe.

/// Last-known backend reachability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendHealth {
    /// Initial probe still in flight.
    #[default]
    Checking,
    Alive,
    Dead,
}

impl BackendHealth {
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// Whether dependent calls may hit the network without re-probing.
    pub fn allows_requests(self) -> bool {
        matches!(self, Self::Alive)
    }
}

/// Result of one health probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// 2xx response.
    Up,
    /// Non-2xx response.
    HttpError(u16),
    /// Aborted by the timeout signal.
    TimedOut,
    /// Fetch rejected before a response arrived.
    NetworkError(String),
}

impl ProbeOutcome {
    /// Fold the probe result into a health state. Only a 2xx counts as
    /// alive; anything else suspends data fetching.
    pub fn into_health(self) -> BackendHealth {
        match self {
            Self::Up => BackendHealth::Alive,
            Self::HttpError(_) | Self::TimedOut | Self::NetworkError(_) => BackendHealth::Dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_folding() {
        assert_eq!(ProbeOutcome::Up.into_health(), BackendHealth::Alive);
        assert_eq!(ProbeOutcome::HttpError(503).into_health(), BackendHealth::Dead);
        assert_eq!(ProbeOutcome::TimedOut.into_health(), BackendHealth::Dead);
        assert_eq!(
            ProbeOutcome::NetworkError("failed to fetch".to_string()).into_health(),
            BackendHealth::Dead
        );
    }

    #[test]
    fn test_request_gating() {
        assert!(BackendHealth::Alive.allows_requests());
        assert!(!BackendHealth::Checking.allows_requests());
        assert!(!BackendHealth::Dead.allows_requests());
    }
}
