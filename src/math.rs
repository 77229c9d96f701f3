use std::ops::{Add, Mul, Sub};

/// `a + (b - a) * factor`; a first-order step of `a` towards `b`.
#[inline(always)]
pub fn lerp<T>(a: T, b: T, factor: T) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    a + (b - a) * factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp() {
        assert_relative_eq!(lerp(0.9, 0.92, 0.2), 0.904, epsilon = 1e-6);
        assert_relative_eq!(lerp(10.0, 0.0, 0.5), 5.0);
        assert_eq!(lerp(3.0, 7.0, 0.0), 3.0);
        assert_eq!(lerp(3.0, 7.0, 1.0), 7.0);
    }

    #[test]
    fn test_lerp_never_overshoots() {
        let mut x = 0.0;
        for _ in 0..100 {
            let next = lerp(x, 1.0, 0.3);
            assert!(next >= x && next <= 1.0);
            x = next;
        }
        assert_relative_eq!(x, 1.0, epsilon = 1e-6);
    }
}
