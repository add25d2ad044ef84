use std::sync::Arc;

use tokio::sync::Mutex;

/// Handle to one account for concurrent callers.
///
/// Each account gets its own lock, and a closure passed to [`SharedAccount::with`]
/// runs while holding it, so a balance check and the update that follows it
/// cannot interleave with another caller. Clones refer to the same account.
#[derive(Debug)]
pub struct SharedAccount<A> {
    inner: Arc<Mutex<A>>,
}

impl<A> Clone for SharedAccount<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> SharedAccount<A> {
    pub fn new(account: A) -> Self {
        Self {
            inner: Arc::new(Mutex::new(account)),
        }
    }

    pub async fn with<R>(&self, f: impl FnOnce(&mut A) -> R) -> R {
        let mut guard = self.inner.lock().await;
        f(&mut *guard)
    }
}
