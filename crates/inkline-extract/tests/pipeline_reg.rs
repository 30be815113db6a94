//! Extraction pipeline regression test
//!
//! Runs the full raster-to-parameters pipeline on synthetic pages with
//! known geometry and checks the produced sequences against hand-derived
//! values.
//!
//! Run with:
//! ```
//! cargo test -p inkline-extract --test pipeline_reg
//! ```

use inkline_core::RgbRaster;
use inkline_extract::{
    BorderMode, Pipeline, PipelineConfig, SamplingStrategy,
};
use inkline_test::{BLACK, bar_page, sloped_page, spread};

/// 400x100 page, full-width bar over rows 40..60. After the default
/// divide-by-4 downscale the working raster is 100x25 with the bar on
/// rows 10..15; the half-height border adds 13 white rows above and
/// below (100x51 total). Smoothing and dilation grow the 5-row bar into
/// a 9-row mask band, so the centerline sits on row 25 of the padded
/// raster.
fn reference_page() -> RgbRaster {
    bar_page(400, 100, 40, 20, BLACK).unwrap()
}

#[test]
fn flat_bar_produces_expected_sequences() {
    let analysis = Pipeline::with_defaults()
        .run_raster(&reference_page())
        .unwrap();
    assert_eq!(analysis.strokes.len(), 1);

    let stroke = &analysis.strokes[0];
    // 100-px bounding span at hop 3, remainder discarded
    assert_eq!(stroke.sample_count, 33);
    assert_eq!(stroke.start, (1.0, 25.0));
    assert_eq!(stroke.end, (97.0, 25.0));

    let p = &stroke.params;
    for (_, seq) in p.named() {
        assert_eq!(seq.len(), 33);
    }

    // Centerline row 25 of 51: pitch just above the center of the range
    for &v in &p.pitch {
        assert!((v - (1.0 - 2.0 * 25.0 / 51.0)).abs() < 1e-9);
    }
    // 9-row mask band: background is 5 rows away above and below, and
    // that beats the saturated horizontal scan
    for &v in &p.intensity {
        assert!((v - 10.0 / 30.0).abs() < 1e-9);
    }
    // 5 black rows of the 9 masked rows
    for &v in &p.density {
        assert!((v - 5.0 / 9.0).abs() < 1e-6);
    }
    // Black ink: hue, saturation, and value all collapse to zero
    for &v in &p.hue {
        assert!(v < 1e-3);
    }
    for &v in &p.saturation {
        assert!(v < 1e-3);
    }
    for &v in &p.value {
        assert!(v < 1e-3);
    }
    // Absolute x positions, strictly increasing, one per hop
    for (i, &x) in p.x_position.iter().enumerate() {
        assert!((x - (3.0 * i as f64 + 1.0)).abs() < 1e-9);
    }
}

#[test]
fn sloped_band_pitch_descends() {
    let page = sloped_page(200, 120, 20, 12, 60).unwrap();
    let pipeline = Pipeline::new(PipelineConfig {
        scale_divisor: 1,
        border: BorderMode::None,
        ..Default::default()
    })
    .unwrap();

    let analysis = pipeline.run_raster(&page).unwrap();
    assert_eq!(analysis.strokes.len(), 1);
    let p = &analysis.strokes[0].params;

    // The band descends by half the page height, so the pitch sequence
    // must drop substantially from start to end
    let first = p.pitch.first().unwrap();
    let last = p.pitch.last().unwrap();
    assert!(first - last > 0.5, "pitch did not descend: {first} -> {last}");

    for pair in p.x_position.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn rotated_window_strategy_tracks_the_slope() {
    let page = sloped_page(200, 120, 20, 12, 60).unwrap();
    let mut cfg = PipelineConfig {
        scale_divisor: 1,
        border: BorderMode::None,
        ..Default::default()
    };
    cfg.sampling.strategy = SamplingStrategy::RotatedWindow;
    let analysis = Pipeline::new(cfg).unwrap().run_raster(&page).unwrap();

    assert_eq!(analysis.strokes.len(), 1);
    let p = &analysis.strokes[0].params;
    assert!(p.pitch.first().unwrap() - p.pitch.last().unwrap() > 0.5);
}

#[test]
fn two_bars_give_two_strokes_with_distinct_pitch() {
    let mut data = bar_page(120, 90, 15, 8, BLACK).unwrap().data().to_vec();
    let lower = bar_page(120, 90, 60, 8, BLACK).unwrap();
    for (i, &v) in lower.data().iter().enumerate() {
        if v == 0 {
            data[i] = 0;
        }
    }
    let page = RgbRaster::from_vec(120, 90, data).unwrap();

    let pipeline = Pipeline::new(PipelineConfig {
        scale_divisor: 1,
        border: BorderMode::None,
        ..Default::default()
    })
    .unwrap();
    let analysis = pipeline.run_raster(&page).unwrap();
    assert_eq!(analysis.strokes.len(), 2);

    let a = spread(&analysis.strokes[0].params.pitch);
    let b = spread(&analysis.strokes[1].params.pitch);
    assert!(a < 1e-9 && b < 1e-9);

    let upper = &analysis.strokes[0].params.pitch[0];
    let lower = &analysis.strokes[1].params.pitch[0];
    assert!((upper - lower).abs() > 0.5);
}

#[test]
fn edge_stroke_centerline_stays_inside_padded_raster() {
    // Bar touching the top edge of the page; the half-height padding
    // must leave the measured centerline strictly inside the raster
    let page = bar_page(200, 80, 0, 12, BLACK).unwrap();
    let analysis = Pipeline::new(PipelineConfig {
        keep_intermediates: true,
        ..Default::default()
    })
    .unwrap()
    .run_raster(&page)
    .unwrap();

    let height = analysis.intermediates.unwrap().raster.height() as f64;
    for stroke in &analysis.strokes {
        assert!(stroke.start.1 > 0.0 && stroke.start.1 < height);
        assert!(stroke.end.1 > 0.0 && stroke.end.1 < height);
        for &pitch in &stroke.params.pitch {
            assert!((-1.0..=1.0).contains(&pitch));
        }
    }
}

#[test]
fn unpadded_edge_flush_stroke_reads_saturated() {
    // Without padding, a bar flush with the top edge has no background
    // above it: the upward scan saturates at the full radius and the
    // stroke reads thicker than its pixel extent, pushing intensity
    // past 1
    let page = bar_page(150, 100, 0, 6, BLACK).unwrap();
    let analysis = Pipeline::new(PipelineConfig {
        scale_divisor: 1,
        border: BorderMode::None,
        ..Default::default()
    })
    .unwrap()
    .run_raster(&page)
    .unwrap();

    assert_eq!(analysis.strokes.len(), 1);
    for &v in &analysis.strokes[0].params.intensity {
        assert!(v > 1.0, "edge-flush intensity not saturated: {v}");
    }
}

#[test]
fn intensity_grows_with_stroke_thickness() {
    let cfg = PipelineConfig {
        scale_divisor: 1,
        border: BorderMode::None,
        ..Default::default()
    };
    let pipeline = Pipeline::new(cfg).unwrap();

    let thin = pipeline
        .run_raster(&bar_page(150, 100, 40, 4, BLACK).unwrap())
        .unwrap();
    let thick = pipeline
        .run_raster(&bar_page(150, 100, 40, 20, BLACK).unwrap())
        .unwrap();

    let thin_i = inkline_test::mean(&thin.strokes[0].params.intensity);
    let thick_i = inkline_test::mean(&thick.strokes[0].params.intensity);
    assert!(
        thick_i > thin_i + 0.2,
        "intensity did not track thickness: {thin_i} vs {thick_i}"
    );
}

#[test]
fn runs_are_deterministic() {
    let pipeline = Pipeline::with_defaults();
    let page = reference_page();
    let a = pipeline.run_raster(&page).unwrap();
    let b = pipeline.run_raster(&page).unwrap();
    assert_eq!(a, b);
}

#[test]
fn intermediates_reflect_preprocessing() {
    let pipeline = Pipeline::new(PipelineConfig {
        keep_intermediates: true,
        ..Default::default()
    })
    .unwrap();
    let analysis = pipeline.run_raster(&reference_page()).unwrap();
    let inter = analysis.intermediates.unwrap();
    // 400x100 scaled by 4, then 13 padding rows above and below
    assert_eq!((inter.raster.width(), inter.raster.height()), (100, 51));
    assert_eq!((inter.mask.width(), inter.mask.height()), (100, 51));

    let default_run = Pipeline::with_defaults()
        .run_raster(&reference_page())
        .unwrap();
    assert!(default_run.intermediates.is_none());
}
