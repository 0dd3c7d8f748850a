use super::basis::*;

///
/// Subdivides a cubic bezier curve at a particular point, returning the weights of
/// the two component curves
///
pub fn subdivide4(t: f64, w1: f64, w2: f64, w3: f64, w4: f64) ->
    ((f64, f64, f64, f64),
    (f64, f64, f64, f64)) {
    // Weights (from de casteljau)
    let wn1 = de_casteljau2(t, w1, w2);
    let wn2 = de_casteljau2(t, w2, w3);
    let wn3 = de_casteljau2(t, w3, w4);

    // Further refine the weights
    let wnn1 = de_casteljau2(t, wn1, wn2);
    let wnn2 = de_casteljau2(t, wn2, wn3);

    // Get the point at which the two curves join
    let p = de_casteljau2(t, wnn1, wnn2);

    // Curves are built from the weight calculations and the final points
    ((w1, wn1, wnn1, p), (p, wnn2, wn3, w4))
}
