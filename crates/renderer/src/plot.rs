//! Axis and curve geometry shared by the charts.
//!
//! Pure functions over plain numbers so they can be tested without a canvas.

use randvar_core::chart::Axis;

/// Resolved value range plus tick positions for the y-axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    pub min:   f64,
    pub max:   f64,
    pub ticks: Vec<f64>,
}

impl Scale {
    /// Fit `axis` to `values`, honouring fixed bounds and step when present.
    pub fn fit(axis: &Axis, values: &[f64]) -> Self {
        let data_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = axis.min;

        let step = match axis.step {
            Some(step) if step > 0.0 => step,
            _ => {
                let span = axis.max.unwrap_or(data_max.max(min + 1.0)) - min;
                let step = nice_step(span, 5);
                if axis.integer_ticks { step.max(1.0).round() } else { step }
            }
        };

        let max = match axis.max {
            Some(max) => max,
            None => {
                let top = data_max.max(min + step);
                min + ((top - min) / step).ceil() * step
            }
        };

        let mut ticks = Vec::new();
        let mut i = 0u32;
        loop {
            let t = min + f64::from(i) * step;
            if t > max + step * 1e-6 {
                break;
            }
            ticks.push(t);
            i += 1;
        }

        Self { min, max, ticks }
    }

    /// Map a value to `[0, 1]` within the scale.
    pub fn unit(&self, value: f64) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// A 1-2-5 step giving roughly `target` intervals over `span`.
pub fn nice_step(span: f64, target: u32) -> f64 {
    if span <= 0.0 || !span.is_finite() {
        return 1.0;
    }
    let raw = span / f64::from(target.max(1));
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Draw every `n`th category label so at most `max_labels` appear.
pub fn label_stride(count: usize, max_labels: Option<usize>) -> usize {
    match max_labels {
        Some(max) if max > 0 && count > max => count.div_ceil(max),
        _ => 1,
    }
}

/// Bézier control points for a smoothed polyline, one pair per segment.
///
/// Same construction as a tension-controlled cardinal spline: each interior
/// point gets tangents along its neighbours, scaled by the relative segment
/// lengths.
pub fn spline_controls(points: &[(f32, f32)], tension: f32) -> Vec<((f32, f32), (f32, f32))> {
    if points.len() < 2 {
        return Vec::new();
    }

    // (previous-side, next-side) control point for every vertex.
    let ctrl: Vec<((f32, f32), (f32, f32))> = (0..points.len())
        .map(|i| {
            let cur = points[i];
            let prev = points[i.saturating_sub(1)];
            let next = points[(i + 1).min(points.len() - 1)];

            let d01 = dist(prev, cur);
            let d12 = dist(cur, next);
            let total = d01 + d12;
            let (s01, s12) = if total > 0.0 { (d01 / total, d12 / total) } else { (0.0, 0.0) };

            let fa = tension * s01;
            let fb = tension * s12;
            let dx = next.0 - prev.0;
            let dy = next.1 - prev.1;

            ((cur.0 - fa * dx, cur.1 - fa * dy), (cur.0 + fb * dx, cur.1 + fb * dy))
        })
        .collect();

    (0..points.len() - 1).map(|i| (ctrl[i].1, ctrl[i + 1].0)).collect()
}

fn dist(a: (f32, f32), b: (f32, f32)) -> f32 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_unit_axis() {
        let axis = Axis { min: 0.0, max: Some(1.0), step: Some(0.2), ..Axis::default() };
        let scale = Scale::fit(&axis, &[0.3, 0.9]);
        assert_eq!(scale.ticks.len(), 6);
        assert_eq!(scale.max, 1.0);
        assert!((scale.unit(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn integer_axis_covers_the_data() {
        let axis = Axis { integer_ticks: true, ..Axis::default() };
        let scale = Scale::fit(&axis, &[0.0, 2.0, 0.0, 0.0, 1.0, 0.0]);
        assert!(scale.max >= 2.0);
        assert!(scale.ticks.iter().all(|t| t.fract() == 0.0));
        assert_eq!(scale.ticks.first().copied(), Some(0.0));
    }

    #[test]
    fn empty_data_still_has_a_range() {
        let scale = Scale::fit(&Axis { integer_ticks: true, ..Axis::default() }, &[]);
        assert!(scale.max > scale.min);
        assert_eq!(scale.unit(0.0), 0.0);
    }

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(10.0, 5), 2.0);
        assert_eq!(nice_step(100.0, 5), 20.0);
        assert_eq!(nice_step(3.0, 5), 1.0);
        assert_eq!(nice_step(0.0, 5), 1.0);
    }

    #[test]
    fn label_stride_limits_labels() {
        assert_eq!(label_stride(50, Some(10)), 5);
        assert_eq!(label_stride(6, Some(10)), 1);
        assert_eq!(label_stride(51, Some(10)), 6);
        assert_eq!(label_stride(51, None), 1);
    }

    #[test]
    fn spline_with_zero_tension_is_straight() {
        let pts = [(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)];
        let ctrl = spline_controls(&pts, 0.0);
        assert_eq!(ctrl.len(), 2);
        assert_eq!(ctrl[0], ((0.0, 0.0), (1.0, 1.0)));
        assert_eq!(ctrl[1], ((1.0, 1.0), (2.0, 0.0)));
    }

    #[test]
    fn spline_needs_two_points() {
        assert!(spline_controls(&[(3.0, 3.0)], 0.4).is_empty());
    }
}
