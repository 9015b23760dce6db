//! Geometric primitives accepted by the spatial hash grid.

use crate::geometry::vec3::Vec3;
use crate::mesh_error::MeshHashError;

/// A point, segment or triangle, carrying exactly 1, 2 or 3 positions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    Point(Vec3),
    Segment([Vec3; 2]),
    Triangle([Vec3; 3]),
}

impl Primitive {
    /// Number of positions carried by the primitive.
    pub fn arity(&self) -> usize {
        match self {
            Primitive::Point(_) => 1,
            Primitive::Segment(_) => 2,
            Primitive::Triangle(_) => 3,
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        match self {
            Primitive::Point(p) => std::slice::from_ref(p),
            Primitive::Segment(s) => s,
            Primitive::Triangle(t) => t,
        }
    }
}

impl From<Vec3> for Primitive {
    fn from(p: Vec3) -> Self {
        Primitive::Point(p)
    }
}

impl From<[Vec3; 2]> for Primitive {
    fn from(s: [Vec3; 2]) -> Self {
        Primitive::Segment(s)
    }
}

impl From<(Vec3, Vec3)> for Primitive {
    fn from((a, b): (Vec3, Vec3)) -> Self {
        Primitive::Segment([a, b])
    }
}

impl From<[Vec3; 3]> for Primitive {
    fn from(t: [Vec3; 3]) -> Self {
        Primitive::Triangle(t)
    }
}

impl From<(Vec3, Vec3, Vec3)> for Primitive {
    fn from((a, b, c): (Vec3, Vec3, Vec3)) -> Self {
        Primitive::Triangle([a, b, c])
    }
}

/// Dispatch on the number of positions; anything but 1, 2 or 3 is a type mismatch.
impl TryFrom<&[Vec3]> for Primitive {
    type Error = MeshHashError;

    fn try_from(positions: &[Vec3]) -> Result<Self, Self::Error> {
        match *positions {
            [p] => Ok(Primitive::Point(p)),
            [a, b] => Ok(Primitive::Segment([a, b])),
            [a, b, c] => Ok(Primitive::Triangle([a, b, c])),
            _ => Err(MeshHashError::UnsupportedPrimitive {
                arity: positions.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_by_arity() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(1.0, 0.0, 0.0);
        let c = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(Primitive::try_from(&[a][..]).unwrap(), Primitive::Point(a));
        assert_eq!(
            Primitive::try_from(&[a, b][..]).unwrap(),
            Primitive::Segment([a, b])
        );
        assert_eq!(Primitive::try_from(&[a, b, c][..]).unwrap().arity(), 3);
    }

    #[test]
    fn other_arities_are_rejected() {
        let a = Vec3::ZERO;
        let empty: &[Vec3] = &[];
        assert_eq!(
            Primitive::try_from(empty),
            Err(MeshHashError::UnsupportedPrimitive { arity: 0 })
        );
        assert_eq!(
            Primitive::try_from(&[a, a, a, a][..]),
            Err(MeshHashError::UnsupportedPrimitive { arity: 4 })
        );
    }
}
