/// A single sampled value that can take part in a running mean.
pub trait Outcome: Copy + std::fmt::Debug {
    fn value(self) -> f64;
}

/// Face of a fair six-sided die, always in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiceOutcome(u8);

impl DiceOutcome {
    pub const FACES: u8 = 6;

    /// Returns `None` for anything outside `1..=6`.
    pub fn new(face: u8) -> Option<Self> {
        (1..=Self::FACES).contains(&face).then_some(Self(face))
    }

    /// Nearest valid face for an arbitrary integer.
    pub fn clamped(face: i64) -> Self {
        Self(face.clamp(1, i64::from(Self::FACES)) as u8)
    }

    #[inline]
    pub fn face(self) -> u8 {
        self.0
    }

    /// Zero-based bucket index into a frequency table.
    #[inline]
    pub fn bucket(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl Outcome for DiceOutcome {
    fn value(self) -> f64 {
        f64::from(self.0)
    }
}

/// Position of the spinner pointer as a fraction of a full turn, in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SpinnerOutcome(f64);

impl SpinnerOutcome {
    /// Largest representable value strictly below 1.
    const MAX: f64 = 1.0 - f64::EPSILON / 2.0;

    /// Returns `None` for NaN or anything outside `[0, 1)`.
    pub fn new(value: f64) -> Option<Self> {
        (0.0..1.0).contains(&value).then_some(Self(value))
    }

    /// Nearest in-domain value; NaN maps to 0.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, Self::MAX))
    }

    /// Pointer angle in degrees, in `[0, 360)`.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.0 * 360.0
    }
}

impl Outcome for SpinnerOutcome {
    fn value(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dice_rejects_out_of_domain() {
        assert!(DiceOutcome::new(0).is_none());
        assert!(DiceOutcome::new(7).is_none());
        assert_eq!(DiceOutcome::new(4).map(DiceOutcome::face), Some(4));
    }

    #[test]
    fn dice_clamps_into_domain() {
        assert_eq!(DiceOutcome::clamped(-3).face(), 1);
        assert_eq!(DiceOutcome::clamped(42).face(), 6);
        assert_eq!(DiceOutcome::clamped(3).bucket(), 2);
    }

    #[test]
    fn spinner_excludes_one() {
        assert!(SpinnerOutcome::new(1.0).is_none());
        assert!(SpinnerOutcome::new(f64::NAN).is_none());
        assert!(SpinnerOutcome::clamped(1.0).value() < 1.0);
        assert_eq!(SpinnerOutcome::clamped(f64::NAN).value(), 0.0);
    }

    #[test]
    fn spinner_degrees() {
        let quarter = SpinnerOutcome::new(0.25).unwrap();
        assert!((quarter.degrees() - 90.0).abs() < 1e-9);
    }
}
