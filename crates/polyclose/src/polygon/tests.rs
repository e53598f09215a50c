use super::view::{fit_to_viewport, ViewCfg, Zoom};
use super::*;
use crate::correct::correct_angles;
use crate::dms::Angle;
use crate::error::AngleError;
use proptest::prelude::*;

fn angles(spec: &[(i64, i64, i64)]) -> Vec<Angle> {
    spec.iter().map(|&(d, m, s)| Angle::new(d, m, s).unwrap()).collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn unit_square_walk() {
    let g = build_polygon(&angles(&[(90, 0, 0); 4])).unwrap();
    let expect = [(0.0, 0.0), (0.0, 1.0), (-1.0, 1.0), (-1.0, 0.0), (0.0, 0.0)];
    assert_eq!(g.vertices.len(), 5);
    for (v, (x, y)) in g.vertices.iter().zip(expect) {
        assert!(close(v.x, x) && close(v.y, y), "got {v:?}, want ({x}, {y})");
    }
    assert!(g.misclosure() < 1e-9);
    let b = g.bounds();
    assert!(close(b.width(), 1.0) && close(b.height(), 1.0));
    assert!(close(b.center().x, -0.5) && close(b.center().y, 0.5));
    assert_eq!(g.decimal_angles, vec![90.0; 4]);
}

#[test]
fn decimal_angles_keep_input_order() {
    let g = build_polygon(&angles(&[(100, 30, 0), (40, 15, 0), (39, 15, 0)])).unwrap();
    assert_eq!(g.decimal_angles, vec![100.5, 40.25, 39.25]);
    assert_eq!(g.sides(), 3);
    assert_eq!(g.corners().len(), 3);
}

#[test]
fn equilateral_triangle_closes() {
    let g = build_polygon(&angles(&[(60, 0, 0); 3])).unwrap();
    assert!(g.misclosure() < 1e-9);
    assert!(close(g.bounds().width(), 1.0));
    assert!(close(g.bounds().height(), 3f64.sqrt() / 2.0));
}

#[test]
fn irregular_angles_leave_a_gap_but_ring_is_closed() {
    let g = build_polygon(&angles(&[(100, 0, 0), (50, 0, 0), (30, 0, 0)])).unwrap();
    assert!(g.misclosure() > 1e-3);
    assert_eq!(g.vertices.first(), g.vertices.last());
}

#[test]
fn too_few_angles_rejected() {
    assert_eq!(
        build_polygon(&angles(&[(90, 0, 0), (90, 0, 0)])).unwrap_err(),
        AngleError::TooFewAngles(2)
    );
}

#[test]
fn viewport_fit_centres_and_scales() {
    let g = build_polygon(&angles(&[(90, 0, 0); 4])).unwrap();
    let cfg = ViewCfg::default();
    let pts = fit_to_viewport(&g, cfg).unwrap();
    // Unit square -> 280 px wide, centred in 350.
    assert!(close(cfg.scale_for(&g).unwrap(), 280.0));
    let b = Bounds2::of(&pts).unwrap();
    assert!(close(b.width(), 280.0) && close(b.height(), 280.0));
    assert!(close(b.center().x, 175.0) && close(b.center().y, 175.0));
    // y flips: the walk's second vertex (0, 1) is at the top.
    assert!(close(pts[1].y, 35.0));
}

#[test]
fn zoom_steps_and_clamps() {
    let z = Zoom::default();
    assert_eq!(z.level(), 1.0);
    assert!(close(z.zoom_in().level(), 1.2));
    let mut hi = z;
    for _ in 0..10 {
        hi = hi.zoom_in();
    }
    assert_eq!(hi.level(), 2.0);
    let mut lo = z;
    for _ in 0..10 {
        lo = lo.zoom_out();
    }
    assert_eq!(lo.level(), 0.5);
    assert_eq!(Zoom::new(9.0).level(), 2.0);
    assert_eq!(Zoom::new(f64::NAN).level(), 1.0);

    let g = build_polygon(&angles(&[(60, 0, 0); 3])).unwrap();
    let base = ViewCfg::default().scale_for(&g).unwrap();
    let zoomed = ViewCfg {
        zoom: Zoom::new(2.0),
        ..ViewCfg::default()
    }
    .scale_for(&g)
    .unwrap();
    assert!(close(zoomed, 2.0 * base));
}

#[test]
fn corrected_survey_pipeline() {
    // Field readings of a pentagon, 45" over.
    let raw = angles(&[(108, 0, 10), (107, 59, 55), (108, 0, 20), (108, 0, 5), (108, 0, 15)]);
    let r = correct_angles(&raw, 5).unwrap();
    assert_eq!(r.error_seconds, 45);
    let g = build_polygon(&r.corrected).unwrap();
    assert_eq!(g.vertices.len(), 6);
    assert!(g.misclosure() < 1e-2);
}

proptest! {
    #[test]
    fn ring_has_n_plus_one_vertices(
        spec in prop::collection::vec((0i64..360, 0i64..60, 0i64..60), 3..40)
    ) {
        let g = build_polygon(&angles(&spec)).unwrap();
        prop_assert_eq!(g.vertices.len(), spec.len() + 1);
        prop_assert_eq!(g.vertices[0], g.vertices[spec.len()]);
        prop_assert_eq!(g.decimal_angles.len(), spec.len());
        prop_assert!(g.vertices.iter().all(|v| v.x.is_finite() && v.y.is_finite()));
    }
}
