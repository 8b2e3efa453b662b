//! Step-chain builder with enumerated termination.
//!
//! Accumulates an ordered sequence of named steps and reports them to a
//! callback when the chain terminates. Two termination modes exist:
//!
//! - the caller invokes [`StepChain::finish`] ([`Termination::Finalized`])
//! - a pushed step name is in the configured stop set
//!   ([`Termination::StopKey`]), in which case the callback fires immediately
//!   and [`StepChain::push`] yields its value
//!
//! The stop key itself is included in the step sequence the callback sees.

use std::collections::HashSet;

/// Why the chain terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// `finish()` was called on the builder.
    Finalized,
    /// A pushed step name was in the stop-key set.
    StopKey,
}

/// Builder accumulating named steps until a terminal condition.
pub struct StepChain<R, F>
where
    F: FnMut(&[String], Termination) -> R,
{
    steps: Vec<String>,
    stop_keys: HashSet<String>,
    callback: F,
}

impl<R, F> StepChain<R, F>
where
    F: FnMut(&[String], Termination) -> R,
{
    pub fn new(callback: F) -> Self {
        Self {
            steps: Vec::new(),
            stop_keys: HashSet::new(),
            callback,
        }
    }

    /// Configure the step names that terminate the chain on push.
    #[must_use]
    pub fn with_stop_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Seed the chain with an initial step.
    #[must_use]
    pub fn with_initial_step(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Steps accumulated so far, in push order.
    #[must_use]
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Append a step. If the name is a stop key the callback fires with
    /// [`Termination::StopKey`] and its value is returned; otherwise the
    /// chain stays open and `None` is returned.
    pub fn push(&mut self, step: impl Into<String>) -> Option<R> {
        let step = step.into();
        let stop = self.stop_keys.contains(&step);
        self.steps.push(step);
        if stop {
            Some((self.callback)(&self.steps, Termination::StopKey))
        } else {
            None
        }
    }

    /// Terminate the chain explicitly, firing the callback with
    /// [`Termination::Finalized`].
    pub fn finish(mut self) -> R {
        (self.callback)(&self.steps, Termination::Finalized)
    }
}
