use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use futures::{FutureExt as _, channel::oneshot};

use crate::color_space::DeviceColor;

/// The result of an eyedropper session.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleOutcome {
    /// The user picked a color from the screen.
    Sampled(DeviceColor),
    /// The user dismissed the eyedropper.
    Cancelled,
}

impl SampleOutcome {
    pub fn color(&self) -> Option<&DeviceColor> {
        match self {
            SampleOutcome::Sampled(color) => Some(color),
            SampleOutcome::Cancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, SampleOutcome::Cancelled)
    }
}

/// Invoked exactly once when the eyedropper closes, from any thread.
pub type SampleCallback = Box<dyn FnOnce(SampleOutcome) + Send + 'static>;

/// A platform screen sampler.
///
/// Implementations present their own UI and report back through
/// `on_complete`. Dropping the callback without calling it counts as a
/// cancellation.
pub trait ColorSampler {
    fn show(&self, on_complete: SampleCallback);
}

impl<F> ColorSampler for F
where
    F: Fn(SampleCallback),
{
    fn show(&self, on_complete: SampleCallback) {
        self(on_complete)
    }
}

/// Resolves with the outcome of a [`sample`] session.
#[must_use = "futures do nothing unless polled"]
pub struct SampleFuture {
    rx: oneshot::Receiver<SampleOutcome>,
}

impl Future for SampleFuture {
    type Output = SampleOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.rx.poll_unpin(cx).map(|result| match result {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::debug!("color sampler dropped its callback");
                SampleOutcome::Cancelled
            }
        })
    }
}

/// Show `sampler` and wait for the user to pick a color.
pub fn sample<S>(sampler: &S) -> SampleFuture
where
    S: ColorSampler + ?Sized,
{
    let (tx, rx) = oneshot::channel();
    sampler.show(Box::new(move |outcome| {
        // The receiver may already be gone, nobody is waiting then.
        _ = tx.send(outcome);
    }));
    SampleFuture { rx }
}
