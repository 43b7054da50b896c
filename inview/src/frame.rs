/// A single-slot pending recomputation.
///
/// Scheduling while a request is already pending replaces (cancels) it, so any burst of triggers
/// between two display refreshes collapses into one recomputation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct PendingFrame {
    requested: bool,
}

impl PendingFrame {
    /// Schedules a request, replacing one that has not run yet.
    pub(crate) fn schedule(&mut self) {
        self.requested = true;
    }

    /// Takes the pending request, either to run it or to drop it. Returns `true` if there was
    /// one.
    pub(crate) fn take(&mut self) -> bool {
        core::mem::take(&mut self.requested)
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.requested
    }
}
