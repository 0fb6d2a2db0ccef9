use std::time::Duration;

/// Diagnostics recorded for one generation pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
    pub elapsed: Duration,
    pub pixel_count: u64,
    /// Sum of the escape values of every pixel. Unlike `elapsed` this is
    /// deterministic for a given frame.
    pub total_iterations: u64,
}

impl GenerationStats {
    #[must_use]
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}
