pub mod scaling;
pub mod widget;

pub use scaling::{
    ClipPath, DerivedGeometry, LayoutParams, NoopOutline, Outline, OutlineError,
    OutlineProvider, OutlineSurface, RadiusState, ScalingContainer, ScalingEvent,
    ScalingGeometry, ScalingListener, ScalingState, Settings,
};
pub use widget::{Color, Margins, Rect, Widget};
