//! Euclidean neighbourhood enumeration, clipped to the grid bounds.

use biogrid_core::Coord;
use smallvec::SmallVec;

/// Call `f` once for every in-bounds cell within Euclidean `radius` of
/// `center`, the center included.
///
/// The column range is clipped to the grid first and each column's row
/// extent is `trunc(sqrt(radius² - dx²))`, clipped again, so every produced
/// coordinate is in bounds by construction. `center` must itself be in
/// bounds of a `size_x × size_y` grid.
pub fn visit_neighborhood(
    size_x: u32,
    size_y: u32,
    center: Coord,
    radius: f32,
    mut f: impl FnMut(Coord),
) {
    let sx = size_x as i32;
    let sy = size_y as i32;
    let cx = i32::from(center.x);
    let cy = i32::from(center.y);
    debug_assert!(
        cx >= 0 && cx < sx && cy >= 0 && cy < sy,
        "neighbourhood center {center} outside {size_x}x{size_y}"
    );

    let r = f64::from(radius);
    let reach = r as i32;
    for dx in -reach.min(cx)..=reach.min(sx - cx - 1) {
        let x = cx + dx;
        assert!(x >= 0 && x < sx, "neighbourhood column {x} escaped the grid");
        let extent_y = (r * r - f64::from(dx * dx)).sqrt() as i32;
        for dy in -extent_y.min(cy)..=extent_y.min(sy - cy - 1) {
            let y = cy + dy;
            assert!(y >= 0 && y < sy, "neighbourhood row {y} escaped the grid");
            f(Coord::new(x as i16, y as i16));
        }
    }
}

/// Collect the neighbourhood of [`visit_neighborhood`] into a vector.
///
/// Radii up to 3.0 fit inline without allocating.
pub fn neighborhood(size_x: u32, size_y: u32, center: Coord, radius: f32) -> SmallVec<[Coord; 32]> {
    let mut out = SmallVec::new();
    visit_neighborhood(size_x, size_y, center, radius, |c| out.push(c));
    out
}
