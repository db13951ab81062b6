use futures_util::future::LocalBoxFuture;

/// Runs fire-and-forget work on the current thread's executor.
///
/// Detached tasks are never awaited by their caller; failures are logged
/// inside the task (see [`detach!`](crate::detach)).
pub trait Spawner {
    fn spawn_detached(&self, task: LocalBoxFuture<'static, ()>);
}
