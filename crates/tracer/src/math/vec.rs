pub use glam::DVec3 as Vec3;

pub trait Vec3AsNonZero: Sized {
    fn into_non_zero(self, eps: f64) -> Option<Self>;
}

impl Vec3AsNonZero for Vec3 {
    /// Returns `Some(self)` if `self` is finite and longer than `eps`
    fn into_non_zero(self, eps: f64) -> Option<Self> {
        use super::float::FloatAsExt;
        self.length_squared()
            .into_finite()
            .and_then(|l| l.into_non_zero(eps * eps))
            .and(Some(self))
    }
}

pub trait Vec3FromArrayExt {
    fn from_f64_array(arr: [f64; 3]) -> Vec3;
}

impl Vec3FromArrayExt for Vec3 {
    fn from_f64_array(arr: [f64; 3]) -> Vec3 {
        Vec3::new(arr[0], arr[1], arr[2])
    }
}
