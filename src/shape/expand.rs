use crate::{
    error::{Result, ShapeError},
    math::{Axis, AABB},
    debug,
};

/// Bounding box of all boxes stretched over the full `x`/`z` plane of the block, keeping its real height.
pub fn expand_horizontal(boxes: &[AABB]) -> Result<AABB> {
    let bounds = AABB::bounding(boxes).ok_or(ShapeError::NoGeometry)?;
    Ok(bounds
        .fill_block(Axis::X)
        .fill_block(Axis::Z))
}

/// Bounding box of all boxes stretched over the full height of the block and across the wider horizontal axis.
/// `x` wins when both horizontal spans are equal.
pub fn expand_vertical(boxes: &[AABB]) -> Result<AABB> {
    let bounds = AABB::bounding(boxes).ok_or(ShapeError::NoGeometry)?;
    let wide_axis = wider_horizontal_axis(&bounds);
    debug!("expanding vertical plane along {:?}", wide_axis);
    Ok(bounds
        .fill_block(Axis::Y)
        .fill_block(wide_axis))
}

fn wider_horizontal_axis(bounds: &AABB) -> Axis {
    if bounds.span(Axis::X) >= bounds.span(Axis::Z) {
        Axis::X
    } else {
        Axis::Z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(from: [f64; 3], to: [f64; 3]) -> AABB {
        AABB::from_corners(from, to)
    }

    #[test]
    fn horizontal_keeps_height() {
        let result = expand_horizontal(&[b([4.0, 0.0, 4.0], [12.0, 8.0, 12.0])]).unwrap();
        assert_eq!(result, b([0.0, 0.0, 0.0], [16.0, 8.0, 16.0]));
    }

    #[test]
    fn vertical_expands_wider_x() {
        let result = expand_vertical(&[b([0.0, 0.0, 0.0], [16.0, 4.0, 8.0])]).unwrap();
        assert_eq!(result, b([0.0, 0.0, 0.0], [16.0, 16.0, 8.0]));
    }

    #[test]
    fn vertical_expands_wider_z() {
        let result = expand_vertical(&[b([6.0, 2.0, 1.0], [10.0, 4.0, 15.0])]).unwrap();
        assert_eq!(result, b([6.0, 0.0, 0.0], [10.0, 16.0, 16.0]));
    }

    #[test]
    fn vertical_tie_prefers_x() {
        let result = expand_vertical(&[b([4.0, 4.0, 2.0], [8.0, 6.0, 6.0])]).unwrap();
        assert_eq!(result, b([0.0, 0.0, 2.0], [16.0, 16.0, 6.0]));
    }

    #[test]
    fn span_is_measured_over_all_boxes() {
        // each box alone is wider on z, together they are wider on x
        let boxes = [
            b([0.0, 0.0, 6.0], [2.0, 1.0, 10.0]),
            b([14.0, 3.0, 6.0], [16.0, 5.0, 10.0]),
        ];
        assert_eq!(expand_vertical(&boxes).unwrap(), b([0.0, 0.0, 6.0], [16.0, 16.0, 10.0]));
        assert_eq!(expand_horizontal(&boxes).unwrap(), b([0.0, 0.0, 0.0], [16.0, 5.0, 16.0]));
    }

    #[test]
    fn empty_input_is_no_geometry() {
        assert!(matches!(expand_horizontal(&[]), Err(ShapeError::NoGeometry)));
        assert!(matches!(expand_vertical(&[]), Err(ShapeError::NoGeometry)));
    }
}
