use super::{Vec2, Viewport};

/// Maps a surface-local pixel position to normalized device space.
///
/// `ndc_x = (px / width) * 2 - 1`, `ndc_y = (1 - py / height) * 2 - 1`.
/// The Y axis flips because surface pixels grow downward while NDC grows upward.
///
/// Positions outside the surface map outside [-1, 1]; nothing is clamped.
#[inline]
pub fn pixel_to_ndc(px: Vec2, viewport: Viewport) -> Vec2 {
    let w = viewport.width.max(f32::MIN_POSITIVE);
    let h = viewport.height.max(f32::MIN_POSITIVE);
    Vec2::new((px.x / w) * 2.0 - 1.0, (1.0 - px.y / h) * 2.0 - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    const VP: Viewport = Viewport::new(400.0, 300.0);

    // ── pixel_to_ndc ──────────────────────────────────────────────────────

    #[test]
    fn top_left_maps_to_minus_one_plus_one() {
        assert!(approx_eq(pixel_to_ndc(Vec2::new(0.0, 0.0), VP), Vec2::new(-1.0, 1.0)));
    }

    #[test]
    fn bottom_right_maps_to_plus_one_minus_one() {
        assert!(approx_eq(pixel_to_ndc(Vec2::new(400.0, 300.0), VP), Vec2::new(1.0, -1.0)));
    }

    #[test]
    fn center_maps_to_origin() {
        assert!(approx_eq(pixel_to_ndc(Vec2::new(200.0, 150.0), VP), Vec2::zero()));
    }

    #[test]
    fn outside_surface_is_not_clamped() {
        let p = pixel_to_ndc(Vec2::new(-200.0, 600.0), VP);
        assert!(approx_eq(p, Vec2::new(-2.0, -3.0)));
    }

    #[test]
    fn quarter_points_land_halfway() {
        let p = pixel_to_ndc(Vec2::new(100.0, 75.0), VP);
        assert!(approx_eq(p, Vec2::new(-0.5, 0.5)));
    }
}
