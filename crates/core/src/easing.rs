/// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing curve.
///
/// Endpoints are fixed at `(0, 0)` and `(1, 1)`; `x1`/`x2` must lie in `[0, 1]`
/// so the curve is a function of time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// The CSS `ease` keyword.
    pub const EASE: Self = Self { x1: 0.25, y1: 0.1, x2: 0.25, y2: 1.0 };
    pub const LINEAR: Self = Self { x1: 0.0, y1: 0.0, x2: 1.0, y2: 1.0 };

    /// Eased progress for linear time `t` in `[0, 1]`.
    pub fn at(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let s = self.solve_x(t);
        bezier(s, self.y1, self.y2)
    }

    /// Curve parameter whose x-coordinate equals `x`.
    fn solve_x(&self, x: f64) -> f64 {
        const EPS: f64 = 1e-7;

        // Newton first; it converges in a handful of steps away from flat spots.
        let mut s = x;
        for _ in 0..8 {
            let err = bezier(s, self.x1, self.x2) - x;
            if err.abs() < EPS {
                return s;
            }
            let d = bezier_slope(s, self.x1, self.x2);
            if d.abs() < 1e-6 {
                break;
            }
            s -= err / d;
        }

        // Bisection fallback; x(s) is monotone on [0, 1].
        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        for _ in 0..64 {
            let v = bezier(s, self.x1, self.x2);
            if (v - x).abs() < EPS {
                break;
            }
            if v < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::EASE
    }
}

/// One coordinate of a unit cubic Bézier with control values `p1`, `p2`.
#[inline]
fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

#[inline]
fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        let ease = CubicBezier::EASE;
        assert_eq!(ease.at(0.0), 0.0);
        assert_eq!(ease.at(1.0), 1.0);
        assert_eq!(ease.at(-4.0), 0.0);
        assert_eq!(ease.at(7.0), 1.0);
    }

    #[test]
    fn ease_is_monotone() {
        let ease = CubicBezier::EASE;
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease.at(f64::from(i) / 100.0);
            assert!(v >= prev - 1e-9, "dropped at step {i}: {v} < {prev}");
            prev = v;
        }
    }

    #[test]
    fn ease_runs_ahead_of_linear_at_midpoint() {
        // `ease` reaches roughly 80% of the way by half time.
        let mid = CubicBezier::EASE.at(0.5);
        assert!(mid > 0.75 && mid < 0.85, "mid = {mid}");
    }

    #[test]
    fn linear_is_identity() {
        let lin = CubicBezier::LINEAR;
        for t in [0.1, 0.25, 0.5, 0.9] {
            assert!((lin.at(t) - t).abs() < 1e-6);
        }
    }
}
