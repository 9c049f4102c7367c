use std::f32::consts::PI;

/// Easing applied to the linear progress of a run.
///
/// ```
/// use pillbox::animation::TimingFunction;
///
/// assert_eq!(TimingFunction::Linear.evaluate(0.25), 0.25);
/// assert!(TimingFunction::EaseInOut.evaluate(0.25) < 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimingFunction {
    Linear,
    /// Half-cosine curve: slow start, fast middle, slow finish
    #[default]
    EaseInOut,
}

impl TimingFunction {
    /// Map `t` in `[0, 1]` to an eased fraction in `[0, 1]`.
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseInOut => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}
