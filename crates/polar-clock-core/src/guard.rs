//! Run-once latch for the startup sequence.
//!
//! The flags are captured once per page load. Hosts keep a single
//! `static StartGuard` and acquire it before reading the environment.

use crate::error::BootstrapError;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct StartGuard {
    taken: AtomicBool,
}

impl StartGuard {
    pub const fn new() -> Self {
        Self {
            taken: AtomicBool::new(false),
        }
    }

    /// Succeeds for the first caller only. A failed startup still holds the
    /// latch; there is no retry.
    pub fn try_acquire(&self) -> Result<(), BootstrapError> {
        if self.taken.swap(true, Ordering::SeqCst) {
            return Err(BootstrapError::AlreadyStarted);
        }
        Ok(())
    }

    pub fn is_taken(&self) -> bool {
        self.taken.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_acquire_wins() {
        let guard = StartGuard::new();
        assert!(!guard.is_taken());
        assert_eq!(guard.try_acquire(), Ok(()));
        assert!(guard.is_taken());
    }

    #[test]
    fn second_acquire_is_already_started() {
        let guard = StartGuard::new();
        guard.try_acquire().unwrap();

        let err = guard.try_acquire().unwrap_err();
        assert_eq!(err, BootstrapError::AlreadyStarted);
        assert_eq!(err.code(), "E008");
        // Stays latched.
        assert_eq!(guard.try_acquire(), Err(BootstrapError::AlreadyStarted));
    }

    #[test]
    fn static_guard_latches_across_threads() {
        static GUARD: StartGuard = StartGuard::new();
        let winners = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| GUARD.try_acquire().is_ok()))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap_or(false))
                .filter(|won| *won)
                .count()
        });
        assert_eq!(winners, 1);
    }
}
