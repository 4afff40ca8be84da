//! Keeps only the newest answer of a series of overlapping requests.

/// Sequence number handed out by [`LatestRequest::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Tracks the most recent request of one view and whether the view is
/// still mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestRequest {
    issued: u64,
    open: bool,
}

impl Default for LatestRequest {
    fn default() -> Self {
        LatestRequest {
            issued: 0,
            open: true,
        }
    }
}

impl LatestRequest {
    /// Starts a request, superseding every earlier one.
    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    /// True when the response for `ticket` may still be applied.
    pub fn accepts(&self, ticket: RequestTicket) -> bool {
        self.open && ticket.0 == self.issued
    }

    /// The view went away; nothing is accepted after this.
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_supersedes_older() {
        let mut latest = LatestRequest::default();
        let first = latest.begin();
        let second = latest.begin();

        assert!(!latest.accepts(first));
        assert!(latest.accepts(second));
    }

    #[test]
    fn nothing_lands_after_close() {
        let mut latest = LatestRequest::default();
        let ticket = latest.begin();
        latest.close();

        assert!(!latest.accepts(ticket));
        let late = latest.begin();
        assert!(!latest.accepts(late));
    }
}
