//! Body scroll/interaction lock held while an overlay is open.
//!
//! An overlay acquires a [`PageLock`] when it mounts and drops it on cleanup;
//! `Drop` restores the body styles even if the overlay unmounts through an
//! error path. Locks nest and are counted per mode: a body property is
//! cleared once no live lock of any mode that sets it remains.
//!
//! TRADE-OFFS
//! ==========
//! Style mutation is browser-only; SSR and native tests only track depth.

#[cfg(test)]
#[path = "page_lock_test.rs"]
mod page_lock_test;

use std::cell::Cell;

thread_local! {
    static COUNTS: Cell<LockCounts> = const { Cell::new(LockCounts { scroll: 0, interaction: 0 }) };
}

/// What an overlay blocks on the page underneath it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockMode {
    /// Stop background scrolling (lightbox).
    Scroll,
    /// Stop scrolling and pointer interaction (auth modal). The overlay
    /// itself must opt back in with `pointer-events: auto`.
    Interaction,
}

impl LockMode {
    pub const ALL: [Self; 2] = [Self::Scroll, Self::Interaction];

    /// Body style properties set while locked.
    #[must_use]
    pub fn body_styles(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Scroll => &[("overflow", "hidden")],
            Self::Interaction => &[("overflow", "hidden"), ("pointer-events", "none")],
        }
    }
}

/// Every property any mode touches.
const LOCKED_PROPERTIES: [&str; 2] = ["overflow", "pointer-events"];

/// Live locks per mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct LockCounts {
    scroll: usize,
    interaction: usize,
}

impl LockCounts {
    fn get(self, mode: LockMode) -> usize {
        match mode {
            LockMode::Scroll => self.scroll,
            LockMode::Interaction => self.interaction,
        }
    }

    fn slot(&mut self, mode: LockMode) -> &mut usize {
        match mode {
            LockMode::Scroll => &mut self.scroll,
            LockMode::Interaction => &mut self.interaction,
        }
    }

    fn total(self) -> usize {
        self.scroll + self.interaction
    }

    /// Whether some live lock still sets `prop`.
    fn holds(self, prop: &str) -> bool {
        LockMode::ALL
            .iter()
            .any(|mode| self.get(*mode) > 0 && mode.body_styles().iter().any(|(p, _)| *p == prop))
    }
}

fn update_counts(f: impl FnOnce(&mut LockCounts)) -> LockCounts {
    COUNTS.with(|c| {
        let mut counts = c.get();
        f(&mut counts);
        c.set(counts);
        counts
    })
}

/// RAII guard for the body lock.
#[derive(Debug)]
pub struct PageLock {
    mode: LockMode,
}

impl PageLock {
    #[must_use]
    pub fn acquire(mode: LockMode) -> Self {
        update_counts(|c| *c.slot(mode) += 1);
        for (prop, value) in mode.body_styles() {
            set_body_style(prop, value);
        }
        Self { mode }
    }

    #[must_use]
    pub fn mode(&self) -> LockMode {
        self.mode
    }
}

impl Drop for PageLock {
    fn drop(&mut self) {
        let mode = self.mode;
        let remaining = update_counts(|c| {
            let slot = c.slot(mode);
            *slot = slot.saturating_sub(1);
        });
        for prop in LOCKED_PROPERTIES {
            if !remaining.holds(prop) {
                set_body_style(prop, "");
            }
        }
    }
}

/// Number of live locks on this thread.
#[must_use]
pub fn active_locks() -> usize {
    COUNTS.with(Cell::get).total()
}

/// Body properties currently held by at least one live lock.
#[must_use]
pub fn held_properties() -> Vec<&'static str> {
    let counts = COUNTS.with(Cell::get);
    LOCKED_PROPERTIES.into_iter().filter(|prop| counts.holds(prop)).collect()
}

fn set_body_style(prop: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let _ = body.style().set_property(prop, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (prop, value);
    }
}
