//! The request-lifecycle record tracked by every store.

/// Tri-flag lifecycle of a store's in-flight request: `Idle → Loading →
/// {Succeeded, Failed}`.
///
/// One logical lifecycle lives per store instance. Overlapping calls are
/// neither rejected nor queued; they race, and the last settlement wins.
/// `success` belongs to mutations only — read operations never touch it, so
/// a view waiting on "saved" is not confused by a background refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestLifecycle {
    /// A request is in flight.
    pub loading: bool,
    /// Message of the last failure, cleared when the next operation starts.
    pub error: Option<String>,
    /// The last mutation succeeded.
    pub success: bool,
}

impl RequestLifecycle {
    pub(crate) fn begin_read(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub(crate) fn begin_mutation(&mut self) {
        self.loading = true;
        self.error = None;
        self.success = false;
    }

    pub(crate) fn settle_read_ok(&mut self) {
        self.loading = false;
    }

    pub(crate) fn settle_mutation_ok(&mut self) {
        self.loading = false;
        self.success = true;
    }

    pub(crate) fn settle_read_err(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub(crate) fn settle_mutation_err(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
        self.success = false;
    }
}
