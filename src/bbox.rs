use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

use crate::math;

/// Left-top-right-bottom box in frame pixels, serialized as `[x1, y1, x2, y2]`.
///
/// No ordering of the corners is enforced: degenerate boxes (`x1 >= x2`)
/// are carried through unchanged.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct BBox([f32; 4]);

impl From<BBox> for [f32; 4] {
    fn from(bbox: BBox) -> Self {
        bbox.0
    }
}

impl From<[f32; 4]> for BBox {
    fn from(slice: [f32; 4]) -> Self {
        BBox(slice)
    }
}

impl BBox {
    #[inline]
    pub fn ltrb(x1: f32, x2: f32, x3: f32, x4: f32) -> Self {
        BBox([x1, x2, x3, x4])
    }

    #[inline(always)]
    pub fn left(&self) -> f32 {
        self.0[0]
    }

    #[inline(always)]
    pub fn top(&self) -> f32 {
        self.0[1]
    }

    #[inline(always)]
    pub fn right(&self) -> f32 {
        self.0[2]
    }

    #[inline(always)]
    pub fn bottom(&self) -> f32 {
        self.0[3]
    }

    #[inline(always)]
    pub fn width(&self) -> f32 {
        self.0[2] - self.0[0]
    }

    #[inline(always)]
    pub fn height(&self) -> f32 {
        self.0[3] - self.0[1]
    }

    #[inline]
    pub fn center(&self) -> na::Point2<f32> {
        na::Point2::new((self.0[0] + self.0[2]) / 2.0, (self.0[1] + self.0[3]) / 2.0)
    }

    /// Euclidean distance between the centers of two boxes.
    #[inline]
    pub fn center_distance(&self, other: &BBox) -> f32 {
        na::distance(&self.center(), &other.center())
    }

    /// Moves every coordinate `factor` of the way towards `next`.
    #[inline]
    pub fn lerp(&self, next: &BBox, factor: f32) -> Self {
        BBox([
            math::lerp(self.0[0], next.0[0], factor),
            math::lerp(self.0[1], next.0[1], factor),
            math::lerp(self.0[2], next.0[2], factor),
            math::lerp(self.0[3], next.0[3], factor),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_center_and_size() {
        let bbox = BBox::ltrb(100.0, 50.0, 200.0, 250.0);

        assert_eq!(bbox.center(), na::Point2::new(150.0, 150.0));
        assert_eq!(bbox.width(), 100.0);
        assert_eq!(bbox.height(), 200.0);
    }

    #[test]
    fn test_center_distance() {
        let a = BBox::ltrb(0.0, 0.0, 20.0, 20.0);
        let b = BBox::ltrb(30.0, 40.0, 50.0, 60.0);

        assert_relative_eq!(a.center_distance(&b), 50.0);
        assert_relative_eq!(b.center_distance(&a), 50.0);
    }

    #[test]
    fn test_lerp_moves_fraction_of_delta() {
        let a = BBox::ltrb(100.0, 100.0, 200.0, 200.0);
        let b = BBox::ltrb(110.0, 90.0, 200.0, 300.0);
        let c = a.lerp(&b, 0.3);

        assert_relative_eq!(c.left(), 103.0, epsilon = 1e-4);
        assert_relative_eq!(c.top(), 97.0, epsilon = 1e-4);
        assert_relative_eq!(c.right(), 200.0, epsilon = 1e-4);
        assert_relative_eq!(c.bottom(), 230.0, epsilon = 1e-4);
    }

    #[test]
    fn test_serialized_as_array() {
        let bbox: BBox = serde_json::from_str("[1, 2, 3.5, 4]").unwrap();
        assert_eq!(bbox, BBox::ltrb(1.0, 2.0, 3.5, 4.0));
        assert_eq!(serde_json::to_string(&bbox).unwrap(), "[1.0,2.0,3.5,4.0]");
    }

    #[test]
    fn test_degenerate_box_is_kept() {
        let bbox = BBox::from([50.0, 50.0, 10.0, 50.0]);

        assert_eq!(<[f32; 4]>::from(bbox), [50.0, 50.0, 10.0, 50.0]);
        assert_eq!(bbox.width(), -40.0);
        assert_eq!(bbox.height(), 0.0);
    }
}
