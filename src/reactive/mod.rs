pub mod invalidation;

pub use invalidation::{pending_flags, take_change_flags, ChangeFlags, WidgetId};
