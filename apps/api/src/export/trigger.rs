//! Per-affordance "export in progress" state.
#![allow(dead_code)]
//!
//! Each download control owns one `ExportTrigger`. Starting an export takes an `ExportGuard`;
//! while the guard lives, a second start on the same trigger is refused. Separate triggers
//! (e.g. cover-letter PDF and resume PDF) never interact.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::export::ExportError;

#[derive(Debug, Default)]
pub struct ExportTrigger {
    in_progress: AtomicBool,
}

impl ExportTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_progress(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }

    /// Marks the trigger busy until the returned guard is dropped.
    pub fn try_begin(&self) -> Result<ExportGuard<'_>, ExportError> {
        self.in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ExportError::AlreadyInProgress)?;
        Ok(ExportGuard {
            flag: &self.in_progress,
        })
    }
}

/// Re-arms its trigger on drop, whether the export succeeded or failed.
#[derive(Debug)]
pub struct ExportGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for ExportGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
