use core::ops::{Add, Neg, Sub};

use super::SECONDS_PER_DAY;

/// Signed duration with one-second resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSpan {
    seconds: i32,
}

impl TimeSpan {
    pub const fn new(seconds: i32) -> Self {
        Self { seconds }
    }

    /// E.g. three hours and forty-five minutes: `TimeSpan::from_components(0, 3, 45, 0)`.
    pub const fn from_components(days: i16, hours: i8, minutes: i8, seconds: i8) -> Self {
        Self {
            seconds: (days as i32)
                .wrapping_mul(SECONDS_PER_DAY)
                .wrapping_add(hours as i32 * 3600)
                .wrapping_add(minutes as i32 * 60)
                .wrapping_add(seconds as i32),
        }
    }

    pub const fn days(&self) -> i16 {
        (self.seconds / SECONDS_PER_DAY) as i16
    }

    pub const fn hours(&self) -> i8 {
        (self.seconds / 3600 % 24) as i8
    }

    pub const fn minutes(&self) -> i8 {
        (self.seconds / 60 % 60) as i8
    }

    pub const fn seconds(&self) -> i8 {
        (self.seconds % 60) as i8
    }

    pub const fn total_seconds(&self) -> i32 {
        self.seconds
    }
}

impl Add for TimeSpan {
    type Output = TimeSpan;

    fn add(self, right: TimeSpan) -> TimeSpan {
        TimeSpan::new(self.seconds.wrapping_add(right.seconds))
    }
}

impl Sub for TimeSpan {
    type Output = TimeSpan;

    fn sub(self, right: TimeSpan) -> TimeSpan {
        TimeSpan::new(self.seconds.wrapping_sub(right.seconds))
    }
}

impl Neg for TimeSpan {
    type Output = TimeSpan;

    fn neg(self) -> TimeSpan {
        TimeSpan::new(self.seconds.wrapping_neg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_combine() {
        let span = TimeSpan::from_components(1, 2, 3, 4);
        assert_eq!(span.total_seconds(), 86_400 + 7_200 + 180 + 4);
        assert_eq!(span.days(), 1);
        assert_eq!(span.hours(), 2);
        assert_eq!(span.minutes(), 3);
        assert_eq!(span.seconds(), 4);
    }

    #[test]
    fn negative_components_follow_sign() {
        let span = -TimeSpan::from_components(0, 3, 45, 10);
        assert_eq!(span.total_seconds(), -(3 * 3600 + 45 * 60 + 10));
        assert_eq!(span.days(), 0);
        assert_eq!(span.hours(), -3);
        assert_eq!(span.minutes(), -45);
        assert_eq!(span.seconds(), -10);
    }

    #[test]
    fn mixed_signs_are_summed() {
        let span = TimeSpan::from_components(0, 1, -30, 0);
        assert_eq!(span.total_seconds(), 1800);
    }

    #[test]
    fn long_spans_wrap() {
        // 30000 days is past i32 seconds
        let span = TimeSpan::from_components(30_000, 0, 0, 0);
        assert_eq!(span.total_seconds(), (30_000i64 * 86_400 - (1i64 << 32)) as i32);
        assert_eq!(span.total_seconds(), -1_702_967_296);

        let span = TimeSpan::from_components(i16::MIN, -1, -1, -1);
        assert_eq!(
            span.total_seconds(),
            (i16::MIN as i64 * 86_400 - 3661 + (1i64 << 32)) as i32
        );
    }

    #[test]
    fn add_and_sub() {
        let a = TimeSpan::new(90);
        let b = TimeSpan::from_components(0, 0, 1, 0);
        assert_eq!((a + b).total_seconds(), 150);
        assert_eq!((a - b).total_seconds(), 30);
        assert_eq!((b - a).total_seconds(), -30);
    }
}
