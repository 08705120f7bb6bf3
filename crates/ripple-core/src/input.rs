use glam::Vec2;

/// Map a pointer position in surface pixels to normalized image space.
///
/// `None` when the point lies outside the surface or the surface has no area
/// (e.g. mid-resize). The surface size is read at call time only; nothing
/// already spawned is affected by a resize.
#[inline]
pub fn pointer_to_uv(px: Vec2, surface_size: Vec2) -> Option<Vec2> {
    if !(surface_size.x > 0.0 && surface_size.y > 0.0) {
        return None;
    }
    let uv = px / surface_size;
    let inside = (0.0..=1.0).contains(&uv.x) && (0.0..=1.0).contains(&uv.y);
    inside.then_some(uv)
}
