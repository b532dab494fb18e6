//! Per-view cancellation scope
//!
//! Each view owns a `ViewScope`. Fetches run through [`ViewScope::run`];
//! once the scope is cancelled (explicitly, by its parent, or by being
//! dropped) pending fetches resolve to `Cancelled` and their results are
//! thrown away.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::error::{PfmError, PfmResult};

#[derive(Debug, Default)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope that is cancelled together with `parent`
    pub fn with_parent(parent: &CancellationToken) -> Self {
        Self {
            token: parent.child_token(),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Run `fut` unless the scope is cancelled first
    pub async fn run<T, F>(&self, fut: F) -> PfmResult<T>
    where
        F: Future<Output = PfmResult<T>>,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(PfmError::Cancelled),
            result = fut => {
                // A result that lands after cancellation is discarded
                if self.token.is_cancelled() {
                    Err(PfmError::Cancelled)
                } else {
                    result
                }
            }
        }
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_run_passes_result_through() {
        let scope = ViewScope::new();
        let value = scope.run(async { Ok::<_, PfmError>(42) }).await.unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_cancelled_scope_discards_result() {
        let scope = ViewScope::new();
        scope.cancel();

        let result = scope.run(async { Ok::<_, PfmError>("late") }).await;
        assert!(matches!(result, Err(PfmError::Cancelled)));
    }

    #[tokio::test]
    async fn test_parent_cancellation_reaches_pending_fetch() {
        let root = CancellationToken::new();
        let scope = ViewScope::with_parent(&root);

        let pending = scope.run(async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok::<_, PfmError>(())
        });

        let canceller = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            root.cancel();
        };

        let (result, ()) = tokio::join!(pending, canceller);
        assert!(matches!(result, Err(PfmError::Cancelled)));
        assert!(scope.is_cancelled());
    }

    #[test]
    fn test_drop_cancels_token() {
        let scope = ViewScope::new();
        let token = scope.token().clone();

        drop(scope);
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_cancelling_child_leaves_parent_alone() {
        let root = CancellationToken::new();
        let scope = ViewScope::with_parent(&root);

        scope.cancel();
        assert!(!root.is_cancelled());
    }
}
