use super::*;

use cubic_bezier::bezier::*;

#[test]
fn can_subdivide_left() {
    // Initial curve
    let (w1, w2, w3, w4) = (1.0, 2.0, 3.0, 4.0);

    // Subdivide at 33%, creating two curves
    let ((wa1, wa2, wa3, wa4), (_wb1, _wb2, _wb3, _wb4)) = subdivide4(0.33, w1, w2, w3, w4);

    // Check that the original curve corresponds to the basis function for wa
    for x in 0..100 {
        let t = (x as f64)/100.0;

        let original    = basis(t*0.33, w1, w2, w3, w4);
        let subdivision = basis(t, wa1, wa2, wa3, wa4);

        assert!(approx_equal(original, subdivision));
    }
}

#[test]
fn can_subdivide_right() {
    // Initial curve
    let (w1, w2, w3, w4) = (1.0, 2.0, 3.0, 4.0);

    // Subdivide at 33%, creating two curves
    let ((_wa1, _wa2, _wa3, _wa4), (wb1, wb2, wb3, wb4)) = subdivide4(0.33, w1, w2, w3, w4);

    // Check that the original curve corresponds to the basis function for wb
    for x in 0..100 {
        let t = (x as f64)/100.0;

        let original    = basis(0.33+(t*(1.0-0.33)), w1, w2, w3, w4);
        let subdivision = basis(t, wb1, wb2, wb3, wb4);

        assert!(approx_equal(original, subdivision));
    }
}

#[test]
fn curves_join_at_the_subdivision_point() {
    let (w1, w2, w3, w4) = (2.0, -1.0, 5.0, 3.0);

    for x in 0..=100 {
        let t = (x as f64)/100.0;

        let ((_, _, _, left_end), (right_start, _, _, _)) = subdivide4(t, w1, w2, w3, w4);
        let join = de_casteljau4(t, w1, w2, w3, w4);

        assert!(left_end == right_start);
        assert!(approx_equal(left_end, join));
    }
}

#[test]
fn subdividing_at_0_leaves_an_empty_left_curve() {
    let ((wa1, wa2, wa3, wa4), (wb1, wb2, wb3, wb4)) = subdivide4(0.0, 1.0, 2.0, 3.0, 4.0);

    assert!((wa1, wa2, wa3, wa4) == (1.0, 1.0, 1.0, 1.0));
    assert!((wb1, wb2, wb3, wb4) == (1.0, 2.0, 3.0, 4.0));
}

#[test]
fn subdividing_at_1_leaves_an_empty_right_curve() {
    let ((wa1, wa2, wa3, wa4), (wb1, wb2, wb3, wb4)) = subdivide4(1.0, 1.0, 2.0, 3.0, 4.0);

    assert!((wa1, wa2, wa3, wa4) == (1.0, 2.0, 3.0, 4.0));
    assert!((wb1, wb2, wb3, wb4) == (4.0, 4.0, 4.0, 4.0));
}
