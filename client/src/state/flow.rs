//! Input → Loading → Result view-state machine for prototype flows.
//!
//! DESIGN
//! ======
//! The machine is plain data so pages can hold it in an `RwSignal` and tests
//! can drive it without a browser. The loading delay is a deliberate minimum
//! display time, not real work: `submit` hands back a `LoadingTicket` and the
//! page fires `complete` with it when the timer elapses. Tickets belong to
//! one loading cycle, so a timer that outlives its cycle (after `cancel` or a
//! new submission) is ignored instead of jumping a fresh flow to `Result`.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

/// Minimum time the loading state stays on screen.
pub const LOADING_DELAY_MS: u32 = 2000;

/// Payload-free view of the active state, for styling and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowPhase {
    #[default]
    Input,
    Loading,
    Result,
}

impl FlowPhase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Loading => "loading",
            Self::Result => "result",
        }
    }
}

/// Active state plus its payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowState<T> {
    Input,
    Loading { results: Vec<T> },
    Result { results: Vec<T> },
}

/// Cancellation token for one pending Loading → Result transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadingTicket {
    cycle: u64,
    pub delay_ms: u32,
}

/// The state machine. Exactly one state is active at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewFlow<T> {
    state: FlowState<T>,
    cycle: u64,
}

impl<T> Default for ViewFlow<T> {
    fn default() -> Self {
        Self { state: FlowState::Input, cycle: 0 }
    }
}

impl<T> ViewFlow<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &FlowState<T> {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> FlowPhase {
        match self.state {
            FlowState::Input => FlowPhase::Input,
            FlowState::Loading { .. } => FlowPhase::Loading,
            FlowState::Result { .. } => FlowPhase::Result,
        }
    }

    /// Payload carried by the current cycle; empty in `Input`.
    #[must_use]
    pub fn results(&self) -> &[T] {
        match &self.state {
            FlowState::Input => &[],
            FlowState::Loading { results } | FlowState::Result { results } => results,
        }
    }

    /// Input → Loading with `results` as the cycle payload.
    ///
    /// Ignored (returns `None`) when `results` is empty or the flow is not in
    /// `Input`; a repeated completion event mid-flow does not restart it.
    pub fn submit(&mut self, results: Vec<T>) -> Option<LoadingTicket> {
        if results.is_empty() || self.phase() != FlowPhase::Input {
            return None;
        }
        self.cycle += 1;
        self.state = FlowState::Loading { results };
        Some(LoadingTicket { cycle: self.cycle, delay_ms: LOADING_DELAY_MS })
    }

    /// Loading → Result when `ticket` belongs to the current cycle.
    pub fn complete(&mut self, ticket: LoadingTicket) -> bool {
        if ticket.cycle != self.cycle {
            return false;
        }
        match std::mem::replace(&mut self.state, FlowState::Input) {
            FlowState::Loading { results } => {
                self.state = FlowState::Result { results };
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Result → Input, dropping the payload.
    pub fn back(&mut self) -> bool {
        if self.phase() != FlowPhase::Result {
            return false;
        }
        self.state = FlowState::Input;
        true
    }

    /// Abort a pending Loading → Result transition and return to `Input`.
    ///
    /// Any outstanding ticket for the aborted cycle becomes stale.
    pub fn cancel(&mut self) -> bool {
        if self.phase() != FlowPhase::Loading {
            return false;
        }
        self.cycle += 1;
        self.state = FlowState::Input;
        true
    }
}

/// Fire `complete` on `flow` once `ticket.delay_ms` has elapsed.
///
/// The timer holds no reference to the page; if the signal has been disposed
/// by the time it fires, nothing happens.
#[cfg(feature = "hydrate")]
pub fn schedule_completion<T>(flow: leptos::prelude::RwSignal<ViewFlow<T>>, ticket: LoadingTicket)
where
    T: Send + Sync + 'static,
{
    use leptos::prelude::Update;

    gloo_timers::callback::Timeout::new(ticket.delay_ms, move || {
        if flow.try_update(|f| f.complete(ticket)) == Some(true) {
            leptos::logging::log!("flow: loading complete");
        }
    })
    .forget();
}
