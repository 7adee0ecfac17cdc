use core::ops::RangeInclusive;

use crate::paint::Color;

use super::Circle;

/// Active stamping tool.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Tool {
    #[default]
    Point,
    Triangle,
    Circle,
}

/// Bounds applied by [`StyleState`] setters.
///
/// Fields are free-form; [`StyleState::with_limits`] normalizes them first.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleLimits {
    pub size: RangeInclusive<f32>,
    pub segments: RangeInclusive<u32>,
    /// Quantization step for color channels.
    pub color_step: f32,
}

impl Default for StyleLimits {
    fn default() -> Self {
        Self {
            size: 1.0..=100.0,
            segments: 3..=100,
            color_step: 0.1,
        }
    }
}

impl StyleLimits {
    /// Returns limits every setter can clamp to without panicking and that only admit
    /// valid shapes.
    ///
    /// - non-finite or non-positive size bounds fall back to the default bound
    /// - inverted ranges are swapped
    /// - the segment range is raised to start at [`Circle::MIN_SEGMENTS`]
    /// - a non-finite or negative color step falls back to the default step
    pub fn normalized(self) -> Self {
        let fallback = Self::default();

        let size_bound = |v: f32, default: f32| if v.is_finite() && v > 0.0 { v } else { default };
        let lo = size_bound(*self.size.start(), *fallback.size.start());
        let hi = size_bound(*self.size.end(), *fallback.size.end());
        let size = if lo <= hi { lo..=hi } else { hi..=lo };

        let (lo, hi) = self.segments.into_inner();
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let lo = lo.max(Circle::MIN_SEGMENTS);
        let segments = lo..=hi.max(lo);

        let color_step = if self.color_step.is_finite() && self.color_step >= 0.0 {
            self.color_step
        } else {
            fallback.color_step
        };

        Self { size, segments, color_step }
    }
}

/// Color channel selector for [`StyleState::adjust_channel`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// The settings read when a shape is stamped.
///
/// Values are copied into each new shape; changing the style never affects shapes
/// already placed. Setters clamp to [`StyleLimits`], so a `StyleState` always produces
/// valid shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleState {
    tool: Tool,
    /// Straight RGBA, each channel in [0, 1].
    rgba: [f32; 4],
    size: f32,
    segments: u32,
    limits: StyleLimits,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            tool: Tool::Point,
            rgba: [1.0, 0.0, 0.0, 1.0],
            size: 10.0,
            segments: 12,
            limits: StyleLimits::default(),
        }
    }
}

impl StyleState {
    /// Default style clamped to `limits`, after [`StyleLimits::normalized`].
    pub fn with_limits(limits: StyleLimits) -> Self {
        let mut s = Self { limits: limits.normalized(), ..Self::default() };
        s.set_size(s.size);
        s.set_segments(s.segments);
        s
    }

    #[inline]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Straight RGBA.
    #[inline]
    pub fn rgba(&self) -> [f32; 4] {
        self.rgba
    }

    /// Fill color for new shapes.
    #[inline]
    pub fn color(&self) -> Color {
        Color::from_straight_array(self.rgba)
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Sets one channel, clamped to [0, 1] and snapped to the color step.
    pub fn set_channel(&mut self, channel: Channel, value: f32) {
        let step = self.limits.color_step;
        let v = if step > 0.0 { (value / step).round() * step } else { value };
        self.rgba[channel as usize] = v.clamp(0.0, 1.0);
    }

    /// Moves one channel by `steps` color steps.
    pub fn adjust_channel(&mut self, channel: Channel, steps: i32) {
        let current = self.rgba[channel as usize];
        self.set_channel(channel, current + steps as f32 * self.limits.color_step);
    }

    pub fn channel(&self, channel: Channel) -> f32 {
        self.rgba[channel as usize]
    }

    pub fn set_size(&mut self, size: f32) {
        if size.is_finite() {
            self.size = size.clamp(*self.limits.size.start(), *self.limits.size.end());
        }
    }

    pub fn adjust_size(&mut self, delta: f32) {
        self.set_size(self.size + delta);
    }

    pub fn set_segments(&mut self, segments: u32) {
        self.segments = segments.clamp(*self.limits.segments.start(), *self.limits.segments.end());
    }

    pub fn adjust_segments(&mut self, delta: i32) {
        self.set_segments(self.segments.saturating_add_signed(delta));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_startup_controls() {
        let s = StyleState::default();
        assert_eq!(s.tool(), Tool::Point);
        assert_eq!(s.rgba(), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(s.size(), 10.0);
        assert_eq!(s.segments(), 12);
    }

    #[test]
    fn channel_steps_snap_to_tenths() {
        let mut s = StyleState::default();
        for _ in 0..3 {
            s.adjust_channel(Channel::Green, 1);
        }
        assert!((s.channel(Channel::Green) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn channels_clamp_to_unit_range() {
        let mut s = StyleState::default();
        s.adjust_channel(Channel::Red, 5);
        assert_eq!(s.channel(Channel::Red), 1.0);
        s.adjust_channel(Channel::Blue, -5);
        assert_eq!(s.channel(Channel::Blue), 0.0);
    }

    #[test]
    fn segments_never_drop_below_three() {
        let mut s = StyleState::default();
        s.set_segments(0);
        assert_eq!(s.segments(), 3);
        s.adjust_segments(-10);
        assert_eq!(s.segments(), 3);
    }

    #[test]
    fn size_clamps_and_ignores_nan() {
        let mut s = StyleState::default();
        s.set_size(1000.0);
        assert_eq!(s.size(), 100.0);
        s.set_size(f32::NAN);
        assert_eq!(s.size(), 100.0);
        s.adjust_size(-500.0);
        assert_eq!(s.size(), 1.0);
    }

    #[test]
    fn custom_limits_clamp_existing_defaults() {
        let s = StyleState::with_limits(StyleLimits { size: 20.0..=40.0, ..StyleLimits::default() });
        assert_eq!(s.size(), 20.0);
    }

    // ── limit normalization ───────────────────────────────────────────────

    #[test]
    fn inverted_limits_are_swapped() {
        let mut s = StyleState::with_limits(StyleLimits {
            size: 50.0..=10.0,
            segments: 40..=20,
            ..StyleLimits::default()
        });
        assert_eq!(s.size(), 10.0);
        assert_eq!(s.segments(), 20);

        s.set_size(80.0);
        s.set_segments(99);
        assert_eq!(s.size(), 50.0);
        assert_eq!(s.segments(), 40);
    }

    #[test]
    fn non_finite_size_bounds_fall_back() {
        let mut s = StyleState::with_limits(StyleLimits {
            size: 5.0..=f32::NAN,
            color_step: f32::INFINITY,
            ..StyleLimits::default()
        });
        s.set_size(1000.0);
        assert_eq!(s.size(), 100.0);
        s.set_size(-3.0);
        assert_eq!(s.size(), 5.0);
        s.adjust_channel(Channel::Green, 2);
        assert!((s.channel(Channel::Green) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn segment_floor_keeps_circles_valid() {
        let mut s = StyleState::with_limits(StyleLimits { segments: 0..=100, ..StyleLimits::default() });
        s.set_segments(1);
        assert_eq!(s.segments(), Circle::MIN_SEGMENTS);
        assert!(Circle::new(crate::coords::Vec2::zero(), s.color(), s.size(), s.segments()).is_ok());

        let tiny = StyleLimits { segments: 0..=1, ..StyleLimits::default() }.normalized();
        assert_eq!(tiny.segments, 3..=3);
    }

    #[test]
    fn non_positive_size_floor_falls_back() {
        let limits = StyleLimits { size: 0.0..=30.0, ..StyleLimits::default() }.normalized();
        assert_eq!(limits.size, 1.0..=30.0);
    }
}
