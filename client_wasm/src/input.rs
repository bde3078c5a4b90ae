//! Pointer input mapping

/// Convert a pointer's viewport Y into surface pixels, accounting for the
/// canvas being displayed at a different size than its backing store
pub fn surface_y(client_y: f32, rect_top: f32, rect_height: f32, surface_height: f32) -> f32 {
    let local = client_y - rect_top;
    if rect_height > 0.0 {
        local * surface_height / rect_height
    } else {
        local
    }
}
