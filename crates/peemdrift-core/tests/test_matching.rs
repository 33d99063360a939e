use ndarray::{s, Array2};

use peemdrift_core::error::DriftError;
use peemdrift_core::matching::{match_template, min_max_loc, MatchMethod};

/// Smooth non-periodic pattern so every window is distinct.
fn test_pattern(h: usize, w: usize) -> Array2<f32> {
    let mut data = Array2::<f32>::zeros((h, w));
    for r in 0..h {
        for c in 0..w {
            data[[r, c]] = (0.3 * r as f32).sin() * (0.2 * c as f32).cos()
                + 0.01 * (r * w + c) as f32 / (h * w) as f32;
        }
    }
    data
}

#[test]
fn test_surface_shape() {
    let slice = test_pattern(10, 12);
    let template = test_pattern(3, 4);

    let surface = match_template(slice.view(), template.view(), MatchMethod::SqDiff).unwrap();
    assert_eq!(surface.dim(), (8, 9));
}

#[test]
fn test_full_size_template_gives_single_cell() {
    let slice = test_pattern(6, 6);
    let surface =
        match_template(slice.view(), slice.view(), MatchMethod::CorrCoeffNormed).unwrap();
    assert_eq!(surface.dim(), (1, 1));
    assert!((surface[[0, 0]] - 1.0).abs() < 1e-6);
}

#[test]
fn test_oversize_template_rejected() {
    let slice = test_pattern(8, 8);
    let template = test_pattern(8, 9);

    let err = match_template(slice.view(), template.view(), MatchMethod::SqDiff).unwrap_err();
    assert!(matches!(err, DriftError::TemplateTooLarge { .. }));
}

#[test]
fn test_exact_match_located_by_each_extremal_method() {
    let slice = test_pattern(16, 16);
    let template = slice.slice(s![4..9, 6..11]).to_owned();

    // Methods whose extremum is guaranteed at the exact-match window.
    let cases = [
        MatchMethod::SqDiff,
        MatchMethod::SqDiffNormed,
        MatchMethod::CrossCorrNormed,
        MatchMethod::CorrCoeffNormed,
    ];

    for method in cases {
        let surface = match_template(slice.view(), template.view(), method).unwrap();
        let mm = min_max_loc(surface.view());
        let loc = if method.is_minimizing() {
            mm.min_loc
        } else {
            mm.max_loc
        };
        assert_eq!(loc, (4, 6), "method {}", method);
    }
}

#[test]
fn test_sqdiff_zero_at_exact_match() {
    let slice = test_pattern(12, 12);
    let template = slice.slice(s![3..7, 2..6]).to_owned();

    let surface = match_template(slice.view(), template.view(), MatchMethod::SqDiff).unwrap();
    assert!(surface[[3, 2]].abs() < 1e-10);
}

#[test]
fn test_normed_correlation_is_one_at_exact_match() {
    let slice = test_pattern(12, 12);
    let template = slice.slice(s![5..9, 5..9]).to_owned();

    for method in [MatchMethod::CrossCorrNormed, MatchMethod::CorrCoeffNormed] {
        let surface = match_template(slice.view(), template.view(), method).unwrap();
        assert!(
            (surface[[5, 5]] - 1.0).abs() < 1e-6,
            "method {} score {}",
            method,
            surface[[5, 5]]
        );
    }
}

#[test]
fn test_cross_corr_value_matches_manual_dot_product() {
    let slice = test_pattern(6, 6);
    let template = test_pattern(2, 2);

    let surface = match_template(slice.view(), template.view(), MatchMethod::CrossCorr).unwrap();

    let mut expected = 0.0f64;
    for r in 0..2 {
        for c in 0..2 {
            expected += slice[[1 + r, 2 + c]] as f64 * template[[r, c]] as f64;
        }
    }
    assert!((surface[[1, 2]] - expected).abs() < 1e-9);
}

#[test]
fn test_corr_coeff_is_zero_mean_covariance() {
    let slice = test_pattern(6, 6);
    let template = test_pattern(3, 3);

    let surface = match_template(slice.view(), template.view(), MatchMethod::CorrCoeff).unwrap();

    let window = slice.slice(s![2..5, 1..4]);
    let t_mean: f64 = template.iter().map(|&v| v as f64).sum::<f64>() / 9.0;
    let w_mean: f64 = window.iter().map(|&v| v as f64).sum::<f64>() / 9.0;
    let expected: f64 = window
        .iter()
        .zip(template.iter())
        .map(|(&w, &t)| (t as f64 - t_mean) * (w as f64 - w_mean))
        .sum();
    assert!((surface[[2, 1]] - expected).abs() < 1e-9);
}

#[test]
fn test_degenerate_zero_window_scores() {
    // Slice is zero except where the template sits, so some windows are
    // all-zero and the normalizer vanishes there.
    let mut slice = Array2::<f32>::zeros((10, 10));
    let template = test_pattern(3, 3);
    slice.slice_mut(s![6..9, 6..9]).assign(&template);

    let sq = match_template(slice.view(), template.view(), MatchMethod::SqDiffNormed).unwrap();
    let cc = match_template(slice.view(), template.view(), MatchMethod::CrossCorrNormed).unwrap();

    // (0,0) window is all-zero.
    assert_eq!(sq[[0, 0]], 1.0);
    assert_eq!(cc[[0, 0]], 0.0);
    // The exact match still wins.
    assert_eq!(min_max_loc(sq.view()).min_loc, (6, 6));
    assert_eq!(min_max_loc(cc.view()).max_loc, (6, 6));
}

#[test]
fn test_min_max_loc_reports_both_extrema() {
    let mut surface = Array2::<f64>::zeros((4, 5));
    surface[[1, 3]] = 2.5;
    surface[[3, 0]] = -1.5;

    let mm = min_max_loc(surface.view());
    assert_eq!(mm.max_loc, (1, 3));
    assert_eq!(mm.max_val, 2.5);
    assert_eq!(mm.min_loc, (3, 0));
    assert_eq!(mm.min_val, -1.5);
}

#[test]
fn test_min_max_loc_ties_resolve_to_first_in_row_major_order() {
    let mut surface = Array2::<f64>::zeros((3, 3));
    surface[[0, 2]] = 1.0;
    surface[[2, 0]] = 1.0;

    let mm = min_max_loc(surface.view());
    assert_eq!(mm.max_loc, (0, 2));
    // All-equal minimum keeps the scan origin.
    assert_eq!(mm.min_loc, (0, 0));
}

#[test]
fn test_method_name_round_trip() {
    for method in MatchMethod::ALL {
        let parsed: MatchMethod = method.name().parse().unwrap();
        assert_eq!(parsed, method);
    }
}

#[test]
fn test_unknown_method_name_rejected() {
    let err = "TM_CCOEFF_NORMED".parse::<MatchMethod>().unwrap_err();
    assert!(matches!(err, DriftError::UnknownMethod(_)));
}

#[test]
fn test_minimizing_methods_are_the_sqdiff_family() {
    assert!(MatchMethod::SqDiff.is_minimizing());
    assert!(MatchMethod::SqDiffNormed.is_minimizing());
    assert!(!MatchMethod::CrossCorr.is_minimizing());
    assert!(!MatchMethod::CrossCorrNormed.is_minimizing());
    assert!(!MatchMethod::CorrCoeff.is_minimizing());
    assert!(!MatchMethod::CorrCoeffNormed.is_minimizing());
}
