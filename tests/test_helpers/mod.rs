//! Scoped environment overrides for configuration tests.

use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Applies environment overrides for its lifetime and restores the prior
/// values on drop. A process-wide mutex serialises tests that touch the
/// environment.
pub struct ScopedEnv {
    saved: Vec<(OsString, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    /// Sets (`Some`) or unsets (`None`) each named variable.
    pub fn apply(overrides: &[(&str, Option<&str>)]) -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let mut saved = Vec::with_capacity(overrides.len());
        for (key, value) in overrides {
            saved.push((OsString::from(key), env::var_os(key)));
            // SAFETY: ENV_LOCK serialises all environment mutation in tests.
            unsafe {
                match value {
                    Some(new_value) => env::set_var(key, new_value),
                    None => env::remove_var(key),
                }
            }
        }

        Self { saved, _lock: lock }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..) {
            // SAFETY: the guard still holds ENV_LOCK.
            unsafe {
                match value {
                    Some(previous) => env::set_var(&key, previous),
                    None => env::remove_var(&key),
                }
            }
        }
    }
}
