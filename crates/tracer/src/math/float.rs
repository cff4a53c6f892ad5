pub trait FloatAsExt: Sized {
    /// Returns `Some(f)` if `f` is far enough from zero (far is given by eps) else returns None
    ///
    /// Returns None for NaN and Some(f) for +/- infty
    fn into_non_zero(self, eps: Self) -> Option<Self>;

    /// Returns `Some(f)` if `f` is finite else returns None
    ///
    /// Returns None for NaN and +/- infty
    fn into_finite(self) -> Option<Self>;

    /// Returns `Some(f)` if `f` is finite and strictly positive
    fn into_positive(self) -> Option<Self>;
}

impl FloatAsExt for f64 {
    fn into_non_zero(self, eps: Self) -> Option<f64> {
        (self.abs() > eps).then_some(self)
    }

    fn into_finite(self) -> Option<f64> {
        self.is_finite().then_some(self)
    }

    fn into_positive(self) -> Option<f64> {
        self.into_finite().filter(|f| *f > 0.0)
    }
}
