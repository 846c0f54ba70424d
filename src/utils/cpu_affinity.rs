//! Pins the measuring thread to one CPU core for the duration of a guard.
//!
//! Only Linux supports real pinning (through `libc`). Elsewhere the guard
//! is a no-op and reports itself as unpinned.

#[cfg(target_os = "linux")]
mod platform {
    use std::mem;

    /// Returns the previous affinity mask on success.
    pub fn pin_current() -> Option<(usize, libc::cpu_set_t)> {
        // SAFETY: cpu_set_t is plain data; the libc calls only read or write
        // the set we pass with its exact size.
        unsafe {
            let cpu = libc::sched_getcpu();
            if cpu < 0 {
                return None;
            }

            let mut previous: libc::cpu_set_t = mem::zeroed();
            if libc::sched_getaffinity(0, mem::size_of::<libc::cpu_set_t>(), &mut previous) != 0 {
                return None;
            }

            let mut pinned: libc::cpu_set_t = mem::zeroed();
            libc::CPU_ZERO(&mut pinned);
            libc::CPU_SET(cpu as usize, &mut pinned);
            if libc::sched_setaffinity(0, mem::size_of::<libc::cpu_set_t>(), &pinned) != 0 {
                return None;
            }

            Some((cpu as usize, previous))
        }
    }

    pub fn restore(previous: &libc::cpu_set_t) -> bool {
        // SAFETY: see pin_current.
        unsafe { libc::sched_setaffinity(0, mem::size_of::<libc::cpu_set_t>(), previous) == 0 }
    }

    pub type Saved = libc::cpu_set_t;
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub type Saved = ();

    pub fn pin_current() -> Option<(usize, Saved)> {
        None
    }

    pub fn restore(_previous: &Saved) -> bool {
        true
    }
}

/// RAII guard: pins the current thread to the core it runs on, restores the
/// original affinity mask on drop.
pub struct CpuPinGuard {
    pinned: Option<(usize, platform::Saved)>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        let pinned = platform::pin_current();
        if pinned.is_none() {
            tracing::trace!("CPU pinning unavailable, timing unpinned");
        }
        Self { pinned }
    }

    /// Core the thread is pinned to, if pinning succeeded.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned.as_ref().map(|(core, _)| *core)
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let Some((_, previous)) = self.pinned.take() {
            platform::restore(&previous);
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
