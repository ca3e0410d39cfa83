use glam::{Vec2, Vec3};

/// projection onto the XY plane
pub fn xy(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.y)
}

/// lift onto the XY plane, at z = 0
pub fn from_xy(v: Vec2) -> Vec3 {
    v.extend(0.)
}
