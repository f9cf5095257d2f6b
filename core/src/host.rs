//! host.rs
//! Cooperation with an embedding runtime that serializes its own work behind a lock.
//!
//! A binding layer implements [`HostLock`] so codec calls run with the host lock
//! released. Semantics of the call are unchanged; it still blocks the caller.

pub trait HostLock: Send + Sync {
    /// Run `work` with host-level exclusivity released, reacquiring it afterwards.
    fn unlocked(&self, work: &mut dyn FnMut());
}

/// No host runtime: work runs inline.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoHost;

impl HostLock for NoHost {
    fn unlocked(&self, work: &mut dyn FnMut()) {
        work()
    }
}

/// Run `f` through `host` and hand back its result.
pub fn run_unlocked<T>(host: &dyn HostLock, f: impl FnOnce() -> T) -> Option<T> {
    let mut f = Some(f);
    let mut out = None;
    host.unlocked(&mut || {
        if let Some(f) = f.take() {
            out = Some(f());
        }
    });
    out
}
