//! Per-thread record of which widgets asked for layout or paint.
//!
//! Everything runs on the UI thread, so pending requests live in a
//! thread-local that the host drains once per frame.

use std::cell::RefCell;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct ChangeFlags: u8 {
        /// Size or position may change
        const NEEDS_LAYOUT = 1 << 0;
        /// Only appearance changed
        const NEEDS_PAINT = 1 << 1;
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WidgetId(u64);

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Default)]
struct Pending {
    flags: ChangeFlags,
    widgets: HashSet<WidgetId>,
}

thread_local! {
    static PENDING: RefCell<Pending> = RefCell::new(Pending::default());
}

impl WidgetId {
    pub fn next() -> Self {
        WidgetId(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Ask for layout on the next frame. Layout implies paint.
    pub fn request_layout(self) {
        self.request(ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT);
    }

    pub fn request_paint(self) {
        self.request(ChangeFlags::NEEDS_PAINT);
    }

    /// Whether this widget asked for anything since the last drain
    pub fn is_dirty(self) -> bool {
        PENDING.with(|pending| pending.borrow().widgets.contains(&self))
    }

    fn request(self, flags: ChangeFlags) {
        PENDING.with(|pending| {
            let mut pending = pending.borrow_mut();
            pending.flags |= flags;
            pending.widgets.insert(self);
        });
    }
}

/// Flags requested since the last drain, without clearing them
pub fn pending_flags() -> ChangeFlags {
    PENDING.with(|pending| pending.borrow().flags)
}

/// Drain every pending request and return the combined flags.
pub fn take_change_flags() -> ChangeFlags {
    PENDING.with(|pending| {
        let Pending { flags, widgets } = std::mem::take(&mut *pending.borrow_mut());
        log::trace!("Draining {:?} for {} widgets", flags, widgets.len());
        flags
    })
}
