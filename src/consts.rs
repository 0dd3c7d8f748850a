/// Magnitude below which a polynomial coefficient is considered to be 0 (at which
/// point the equation it belongs to degenerates to a lower order)
pub const SMALL_COEFFICIENT: f64 = 1e-15;
