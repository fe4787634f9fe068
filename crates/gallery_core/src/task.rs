//! Awaitable handles for background work

use crate::AppError;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// A unit of work running on the blocking pool
///
/// `join` yields the task's own result; a panicking worker surfaces as
/// [`AppError::Task`] instead of unwinding into the caller.
#[derive(Debug)]
#[must_use = "dropping a TaskHandle detaches the task; its completion event is still emitted"]
pub struct TaskHandle<T> {
    inner: JoinHandle<Result<T, AppError>>,
}

impl<T: Send + 'static> TaskHandle<T> {
    /// Run `work` on the runtime's blocking pool
    pub fn spawn_blocking<F>(runtime: &Handle, work: F) -> Self
    where
        F: FnOnce() -> Result<T, AppError> + Send + 'static,
    {
        Self {
            inner: runtime.spawn_blocking(work),
        }
    }

    /// Wait for the task and return its result
    pub async fn join(self) -> Result<T, AppError> {
        match self.inner.await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Background task failed: {}", e);
                Err(AppError::from(e))
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_join_returns_task_result() {
        let handle = TaskHandle::spawn_blocking(&Handle::current(), || Ok(21 * 2));
        assert_eq!(handle.join().await.unwrap(), 42);

        let handle: TaskHandle<()> = TaskHandle::spawn_blocking(&Handle::current(), || {
            Err(AppError::Validation("bad".into()))
        });
        assert!(matches!(handle.join().await, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_panic_becomes_task_error() {
        let handle: TaskHandle<()> =
            TaskHandle::spawn_blocking(&Handle::current(), || panic!("worker blew up"));
        assert!(matches!(handle.join().await, Err(AppError::Task(_))));
    }
}
