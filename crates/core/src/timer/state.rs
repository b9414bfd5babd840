//! Timer state machine and call options

/// Operating state of a timer.
///
/// Two states, either reachable from the other. While `Stopped`, time
/// queries report the configured stopped return value and every trigger
/// query reports `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    #[default]
    Running,
    Stopped,
}

impl TimerState {
    /// The opposite state.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            TimerState::Running => TimerState::Stopped,
            TimerState::Stopped => TimerState::Running,
        }
    }

    #[inline]
    pub const fn is_running(self) -> bool {
        matches!(self, TimerState::Running)
    }
}

/// Whether an operation restarts the interval from now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOption {
    WithReset,
    NoReset,
}

impl ResetOption {
    #[inline]
    pub const fn resets(self) -> bool {
        matches!(self, ResetOption::WithReset)
    }
}

/// How the periodic trigger treats intervals that passed unobserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissedCycles {
    /// Only the most recent boundary matters; surplus intervals are dropped.
    #[default]
    Discard,
    /// Every missed interval is reported as one `true` on successive polls.
    ReportAll,
}
