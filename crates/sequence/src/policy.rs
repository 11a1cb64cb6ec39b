//! Process-wide error reporting policy.
//!
//! The policy is installed at most once, before traversals start. Reading it
//! never installs anything: until [`configure`] succeeds, [`config`] returns
//! [`Config::default`].

use std::panic::{self, Location, UnwindSafe};

use once_cell::sync::OnceCell;

use crate::error::{Error, Violation};

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Log the violation and terminate the process.
    #[default]
    Abort,
    /// Log the violation and unwind with a [`Violation`] payload.
    Panic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Config {
    pub policy: Policy,
    /// Run redundant bounds checks on unchecked access paths.
    pub debug_checks: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: Policy::Abort,
            debug_checks: cfg!(debug_assertions),
        }
    }
}

impl Config {
    pub const fn with_policy(self, policy: Policy) -> Self {
        Self { policy, ..self }
    }

    pub const fn with_debug_checks(self, debug_checks: bool) -> Self {
        Self {
            debug_checks,
            ..self
        }
    }

    #[cold]
    #[track_caller]
    pub fn report(&self, error: Error) -> ! {
        let location = Location::caller();
        tracing::error!(
            error = %error,
            file = location.file(),
            line = location.line(),
            "sequence contract violation"
        );
        match self.policy {
            Policy::Abort => {
                eprintln!("{}", Violation::new(error, location));
                std::process::abort()
            }
            Policy::Panic => panic::panic_any(Violation::new(error, location)),
        }
    }
}

/// Install the process-wide configuration.
///
/// Returns the already installed configuration if one exists.
pub fn configure(config: Config) -> Result<(), Config> {
    CONFIG.set(config).map_err(|_| *CONFIG.get().unwrap_or(&config))?;
    tracing::debug!(?config, "sequence error policy installed");
    Ok(())
}

pub fn config() -> Config {
    CONFIG.get().copied().unwrap_or_default()
}

/// Run `f`, converting a [`Violation`] unwind into `Err`.
///
/// Panics that do not carry a [`Violation`] keep unwinding.
pub fn catch<F, R>(f: F) -> Result<R, Violation>
where
    F: FnOnce() -> R + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<Violation>() {
            Ok(violation) => Err(*violation),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

#[cfg(test)]
pub(crate) fn use_panic_policy() {
    let wanted = Config::default().with_policy(Policy::Panic);
    if let Err(current) = configure(wanted) {
        assert_eq!(current.policy, Policy::Panic);
    }
}
