//! Integer lattice helpers for facelet positions and face normals.

pub(crate) type Vec3 = [i8; 3];

pub(crate) fn dot(a: Vec3, b: Vec3) -> i8 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub(crate) fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Quarter turn of `v` about the unit vector `axis`, clockwise when viewed
/// from the tip of `axis` looking back at the origin.
pub(crate) fn rotate_cw(v: Vec3, axis: Vec3) -> Vec3 {
    let c = cross(axis, v);
    let d = dot(axis, v);
    [axis[0] * d - c[0], axis[1] * d - c[1], axis[2] * d - c[2]]
}

/// Index of the single non-zero component of a unit axis vector.
pub(crate) fn axis_index(axis: Vec3) -> usize {
    if axis[0] != 0 {
        0
    } else if axis[1] != 0 {
        1
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_about_up_sends_front_to_left() {
        assert_eq!(rotate_cw([0, 0, 1], [0, 1, 0]), [-1, 0, 0]);
        assert_eq!(rotate_cw([0, 1, 0], [0, 1, 0]), [0, 1, 0]);
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        let start = [1, -1, 1];
        let mut v = start;
        for _ in 0..4 {
            v = rotate_cw(v, [1, 0, 0]);
        }
        assert_eq!(v, start);
    }
}
