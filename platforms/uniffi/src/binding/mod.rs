use loan_core::LoanCore;
use tokio::sync::{RwLock, RwLockReadGuard};

use crate::error::BindingError;

pub mod auth;
pub mod events;
pub mod loan;
pub mod notification;
pub mod user;
pub mod verification;
pub mod workflow;

#[derive(uniffi::Object)]
pub struct LoanCoreBinding {
    inner: RwLock<Option<LoanCore>>,
}

#[uniffi::export(async_runtime = "tokio")]
impl LoanCoreBinding {
    /// Stops both screens and releases the core, the stored session is kept.
    #[uniffi::method]
    pub async fn uninitialize(&self) -> Result<(), BindingError> {
        let mut guard = self.inner.write().await;
        let core = guard.take().ok_or(BindingError::Uninitialized)?;

        core.workflow.deactivate();
        core.loan_list.deactivate();
        Ok(())
    }
}

impl LoanCoreBinding {
    pub(crate) fn new(core: LoanCore) -> Self {
        Self {
            inner: RwLock::new(Some(core)),
        }
    }

    pub(crate) async fn use_core(&self) -> Result<RwLockReadGuard<'_, LoanCore>, BindingError> {
        let guard = self.inner.read().await;
        RwLockReadGuard::try_map(guard, |core| core.as_ref())
            .map_err(|_| BindingError::Uninitialized)
    }
}
