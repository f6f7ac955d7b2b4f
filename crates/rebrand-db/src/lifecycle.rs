use std::future::Future;

use thiserror::Error;
use tokio::sync::Mutex;

/// An external connection that must be released exactly once.
pub trait ResourceHandle: Send + Sync + 'static {
    fn close(&self) -> impl Future<Output = ()> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Open,
    Closed,
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifecycleState::Uninitialized => write!(f, "uninitialized"),
            LifecycleState::Open => write!(f, "open"),
            LifecycleState::Closed => write!(f, "closed"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("resource handle is already open")]
    AlreadyOpen,
    #[error("resource handle has been closed and cannot be reopened")]
    Closed,
}

enum Slot<H> {
    Uninitialized,
    Open(H),
    Closed,
}

/// Owns a [`ResourceHandle`] across `Uninitialized -> Open -> Closed`.
///
/// Each transition happens at most once and `Closed` is terminal, so
/// [`ResourceLifecycle::shutdown`] can be called from several places without
/// releasing the handle twice.
pub struct ResourceLifecycle<H> {
    slot: Mutex<Slot<H>>,
}

impl<H: ResourceHandle> Default for ResourceLifecycle<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ResourceHandle> ResourceLifecycle<H> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(Slot::Uninitialized),
        }
    }

    /// Store `handle` and move to `Open`.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::AlreadyOpen`] if a handle is already held, or
    /// [`LifecycleError::Closed`] after shutdown.
    pub async fn open(&self, handle: H) -> Result<(), LifecycleError> {
        let mut slot = self.slot.lock().await;
        match *slot {
            Slot::Uninitialized => {
                *slot = Slot::Open(handle);
                Ok(())
            }
            Slot::Open(_) => Err(LifecycleError::AlreadyOpen),
            Slot::Closed => Err(LifecycleError::Closed),
        }
    }

    pub async fn state(&self) -> LifecycleState {
        match *self.slot.lock().await {
            Slot::Uninitialized => LifecycleState::Uninitialized,
            Slot::Open(_) => LifecycleState::Open,
            Slot::Closed => LifecycleState::Closed,
        }
    }

    /// A clone of the open handle, or `None` outside the `Open` state.
    ///
    /// No route reads the store today; this is the accessor for handlers
    /// that start querying it.
    pub async fn handle(&self) -> Option<H>
    where
        H: Clone,
    {
        match &*self.slot.lock().await {
            Slot::Open(handle) => Some(handle.clone()),
            Slot::Uninitialized | Slot::Closed => None,
        }
    }

    /// Move to `Closed`, releasing the handle if one is open.
    ///
    /// Returns `true` only for the call that performed the release. Later
    /// calls, and shutdown of a never-opened lifecycle, are no-ops.
    pub async fn shutdown(&self) -> bool {
        let previous = {
            let mut slot = self.slot.lock().await;
            std::mem::replace(&mut *slot, Slot::Closed)
        };

        match previous {
            Slot::Open(handle) => {
                handle.close().await;
                tracing::info!("resource handle released");
                true
            }
            Slot::Uninitialized => {
                tracing::debug!("shutdown before resource handle was opened");
                false
            }
            Slot::Closed => false,
        }
    }
}
