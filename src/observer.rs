use crate::grid::Grid;
use std::ops::ControlFlow;

/// Receives a notification after every cell state change made by a search.
///
/// This is the only point at which a search hands control back to its caller. Returning
/// [ControlFlow::Break] cancels the search, which then reports
/// [FailureReason::Cancelled](crate::FailureReason::Cancelled).
pub trait StepObserver {
    fn on_step(&mut self, grid: &Grid) -> ControlFlow<()>;
}

impl<F> StepObserver for F
where
    F: FnMut(&Grid) -> ControlFlow<()>,
{
    fn on_step(&mut self, grid: &Grid) -> ControlFlow<()> {
        self(grid)
    }
}

/// Observer that ignores every step.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl StepObserver for Silent {
    fn on_step(&mut self, _: &Grid) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// Watchdog that lets a fixed number of steps through and cancels on the next one.
#[derive(Clone, Copy, Debug)]
pub struct StepLimit {
    pub remaining: usize,
}

impl StepLimit {
    pub fn new(steps: usize) -> StepLimit {
        StepLimit { remaining: steps }
    }
}

impl StepObserver for StepLimit {
    fn on_step(&mut self, _: &Grid) -> ControlFlow<()> {
        match self.remaining.checked_sub(1) {
            Some(remaining) => {
                self.remaining = remaining;
                ControlFlow::Continue(())
            }
            None => ControlFlow::Break(()),
        }
    }
}
