//! Count-up animation for dashboard counters.

/// Default count-up duration.
pub const DEFAULT_DURATION_MS: f64 = 700.0;

/// Ease-in-out quadratic over `t` in `[0, 1]`.
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Animation from 0 to `target` over `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    pub target: u64,
    pub duration_ms: f64,
}

/// One animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Value to display.
    pub value: u64,
    /// No more frames needed.
    pub done: bool,
}

impl CounterAnimation {
    /// Animation with the default duration.
    pub fn new(target: u64) -> Self {
        CounterAnimation {
            target,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    /// Frame `elapsed_ms` after the start.
    pub fn frame_at(&self, elapsed_ms: f64) -> Frame {
        if self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms {
            return Frame {
                value: self.target,
                done: true,
            };
        }
        let progress = (elapsed_ms / self.duration_ms).max(0.0);
        let value = (self.target as f64 * ease_in_out_quad(progress)).round() as u64;
        Frame {
            value: value.min(self.target),
            done: false,
        }
    }
}

/// `1234567` → `1,234,567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert_eq!(ease_in_out_quad(-3.0), 0.0);
        assert_eq!(ease_in_out_quad(7.0), 1.0);
        assert!(ease_in_out_quad(0.25) < 0.25);
        assert!(ease_in_out_quad(0.75) > 0.75);
    }

    #[test]
    fn frames_rise_monotonically_and_settle_on_target() {
        let animation = CounterAnimation::new(1000);
        let mut last = 0;
        for step in 0..=14 {
            let frame = animation.frame_at(step as f64 * 50.0);
            assert!(frame.value >= last);
            last = frame.value;
        }
        assert_eq!(
            animation.frame_at(700.0),
            Frame {
                value: 1000,
                done: true
            }
        );
        assert!(!animation.frame_at(0.0).done);
        assert_eq!(animation.frame_at(0.0).value, 0);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let animation = CounterAnimation {
            target: 42,
            duration_ms: 0.0,
        };
        assert_eq!(animation.frame_at(0.0).value, 42);
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
