//! Step accounting for one scaffold run.

/// Monotonic step counter.
///
/// One step per generated file: the service, its interface, and a markup +
/// script pair per view. A file that already exists still consumes its step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressState {
    current: u32,
    total: u32,
}

impl ProgressState {
    /// Steps for a request with `view_count` views: `2 * view_count + 2`.
    pub fn for_views(view_count: usize) -> Self {
        let views = u32::try_from(view_count).unwrap_or(u32::MAX);
        Self {
            current: 0,
            total: views.saturating_mul(2).saturating_add(2),
        }
    }

    /// Move to the next step and return its 1-based number.
    pub fn advance(&mut self) -> u32 {
        self.current = (self.current + 1).min(self.total);
        self.current
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_complete(&self) -> bool {
        self.current == self.total
    }
}
