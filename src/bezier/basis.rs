///
/// The cubic bezier weighted basis function
///
#[inline]
pub fn basis(t: f64, w1: f64, w2: f64, w3: f64, w4: f64) -> f64 {
    let t_squared           = t*t;
    let t_cubed             = t_squared*t;

    let one_minus_t         = 1.0-t;
    let one_minus_t_squared = one_minus_t*one_minus_t;
    let one_minus_t_cubed   = one_minus_t_squared*one_minus_t;

    return w1*one_minus_t_cubed
        + 3.0*w2*one_minus_t_squared*t
        + 3.0*w3*one_minus_t*t_squared
        + w4*t_cubed;
}

///
/// de Casteljau's algorithm for lines
///
#[inline]
pub fn de_casteljau2(t: f64, w1: f64, w2: f64) -> f64 {
    w1*(1.0-t) + w2*t
}

///
/// de Casteljau's algorithm for quadratic curves
///
#[inline]
pub fn de_casteljau3(t: f64, w1: f64, w2: f64, w3: f64) -> f64 {
    let wn1 = de_casteljau2(t, w1, w2);
    let wn2 = de_casteljau2(t, w2, w3);

    de_casteljau2(t, wn1, wn2)
}

///
/// de Casteljau's algorithm for cubic curves
///
#[inline]
pub fn de_casteljau4(t: f64, w1: f64, w2: f64, w3: f64, w4: f64) -> f64 {
    let wn1 = de_casteljau2(t, w1, w2);
    let wn2 = de_casteljau2(t, w2, w3);
    let wn3 = de_casteljau2(t, w3, w4);

    de_casteljau3(t, wn1, wn2, wn3)
}
