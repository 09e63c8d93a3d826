use std::future::Future;
use std::time::Duration;

/// Suspension points of the UI thread.
#[allow(async_fn_in_trait)]
pub trait Scheduler {
    /// Resolve after the next rendering frame.
    async fn next_frame(&self);
    async fn sleep(&self, duration: Duration);
    /// Run `task` on the UI thread without waiting for it.
    fn spawn(&self, task: impl Future<Output = ()> + 'static);
}
