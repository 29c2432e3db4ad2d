//! End-to-end marquee scenarios against the recording surface
//!
//! These tests verify that:
//! - Band layout tiles the measured label
//! - The window sweeps and reverses at the expected ticks
//! - Stopped controls never tick or ask for redraws
//! - Paint failures skip the frame and release every brush

use std::time::Duration;

use spotlight_paint::{
    FillStyle, Gradient, MonospaceMeasurer, PaintCommand, PaintContext, Point, Rect, Surface,
    TextMetrics,
};
use spotlight_widgets::{layout, FrameOutcome, SpotlightControl, SpotlightStyle};

const TICK: Duration = Duration::from_millis(100);

/// 50 characters at 10px each measure exactly 500px
fn wide_style() -> SpotlightStyle {
    SpotlightStyle::new("x".repeat(50))
}

fn surface() -> PaintContext {
    PaintContext::with_measurer(MonospaceMeasurer::new(10.0, 20.0))
}

fn bounds() -> Rect {
    Rect::new(0.0, 0.0, 640.0, 60.0)
}

fn text_draws(ctx: &PaintContext) -> Vec<(Point, FillStyle, Option<Rect>)> {
    ctx.commands()
        .iter()
        .filter_map(|cmd| match cmd {
            PaintCommand::DrawText {
                origin,
                style,
                clip,
                ..
            } => Some((*origin, style.clone(), *clip)),
            _ => None,
        })
        .collect()
}

/// Render once so the control knows the label width, then start it
fn running_control(style: SpotlightStyle) -> SpotlightControl {
    let mut control = SpotlightControl::new(style);
    let mut ctx = surface();
    assert_eq!(control.render(&mut ctx, bounds()), FrameOutcome::Drawn);
    control.start();
    control.take_redraw_request();
    control
}

#[test]
fn test_bands_tile_any_width() {
    let style = SpotlightStyle::default();
    for width in [10.0_f32, 170.0, 333.3, 500.0, 1234.5] {
        let metrics = TextMetrics {
            text: style.text.clone(),
            font: style.font.clone(),
            measured_width: width,
            line_height: 20,
        };
        let segments = layout(&metrics, &style.segments, Point::new(7.0, 3.0));

        assert_eq!(segments[0].rect.x, 7.0);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].rect.right(), pair[1].rect.x);
        }
        let total: f32 = segments.iter().map(|s| s.rect.width).sum();
        assert!((total - width).abs() < width * 1e-5, "width {width}");
    }
}

#[test]
fn test_sweep_reverses_at_both_bounds() {
    let mut control = running_control(wide_style());
    assert_eq!(control.metrics().map(|m| m.measured_width), Some(500.0));

    assert_eq!(control.advance(TICK * 40), 40);
    assert_eq!(control.state().offset_x(), 400);
    assert!(control.state().is_moving_right());

    assert_eq!(control.advance(TICK), 1);
    assert_eq!(control.state().offset_x(), 390);
    assert!(!control.state().is_moving_right());

    assert_eq!(control.advance(TICK * 39), 39);
    assert_eq!(control.state().offset_x(), 0);
    assert!(!control.state().is_moving_right());

    control.advance(TICK);
    assert_eq!(control.state().offset_x(), 10);
    assert!(control.state().is_moving_right());
}

#[test]
fn test_offset_stays_within_one_step_of_bounds() {
    // 37 characters: bound = 370 - 100 = 270
    let mut control = running_control(SpotlightStyle::new("y".repeat(37)).step(7));
    for _ in 0..1_000 {
        control.advance(TICK);
        let offset = control.state().offset_x();
        assert!(offset >= 0, "offset {offset}");
        assert!(offset < 270 + 7, "offset {offset}");
    }
}

#[test]
fn test_ticks_coalesce_into_one_redraw() {
    let mut control = running_control(wide_style());
    control.advance(TICK * 5);
    assert!(control.take_redraw_request());
    assert!(!control.take_redraw_request());
}

#[test]
fn test_stopped_control_is_silent() {
    let mut control = running_control(wide_style());
    control.advance(TICK * 3);
    control.take_redraw_request();
    let before = control.state();

    control.stop();
    for _ in 0..50 {
        assert_eq!(control.advance(Duration::from_secs(1)), 0);
    }
    assert!(!control.take_redraw_request());
    assert_eq!(control.state(), before);
}

#[test]
fn test_start_twice_matches_start_once() {
    let mut once = running_control(wide_style());
    let mut twice = running_control(wide_style());
    twice.start();

    assert_eq!(once.advance(TICK * 7), twice.advance(TICK * 7));
    assert_eq!(once.state(), twice.state());
}

#[test]
fn test_window_at_rest_sits_on_padding() {
    let mut control = SpotlightControl::new(wide_style());
    let mut ctx = surface();
    control.render(&mut ctx, bounds());

    let first_window = ctx.commands().iter().find_map(|cmd| match cmd {
        PaintCommand::SetClip { rect } => Some(*rect),
        _ => None,
    });
    assert_eq!(first_window, Some(Rect::new(10.0, 10.0, 100.0, 21.0)));
}

#[test]
fn test_marquee_clips_are_window_band_intersections() {
    let mut control = SpotlightControl::new(wide_style());
    let mut ctx = surface();
    control.render(&mut ctx, bounds());

    let draws = text_draws(&ctx);
    assert_eq!(draws.len(), 5);

    // Gray track first, unclipped, at the padded origin
    let (origin, style, clip) = &draws[0];
    assert_eq!(*origin, Point::new(10.0, 10.0));
    assert_eq!(*style, FillStyle::Color(SpotlightStyle::default().track_color));
    assert_eq!(*clip, None);

    // Window [10, 110) against bands [10,110) [110,360) [360,410) [410,510)
    let widths: Vec<f32> = draws[1..]
        .iter()
        .map(|(_, _, clip)| clip.map_or(-1.0, |c| c.width))
        .collect();
    assert_eq!(widths, vec![100.0, 0.0, 0.0, 0.0]);

    // Each band's gradient spans the band itself, not the clip
    let band_style = SpotlightStyle::default();
    let band = Rect::new(110.0, 10.0, 250.0, 21.0);
    assert_eq!(
        draws[2].1,
        FillStyle::Gradient(Gradient::linear_horizontal(
            band,
            band_style.segments[1].color_from,
            band_style.segments[1].color_to,
        ))
    );
    assert!(draws[1..].iter().all(|(o, _, _)| *o == Point::new(10.0, 10.0)));
}

#[test]
fn test_window_straddling_two_bands() {
    let mut control = running_control(wide_style());
    control.advance(TICK * 6);

    let mut ctx = surface();
    control.render(&mut ctx, bounds());

    // Window [70, 170): 40px of band one, 60px of band two
    let clips: Vec<Rect> = text_draws(&ctx)[1..]
        .iter()
        .filter_map(|(_, _, clip)| *clip)
        .collect();
    assert_eq!(clips[0], Rect::new(70.0, 10.0, 40.0, 21.0));
    assert_eq!(clips[1], Rect::new(110.0, 10.0, 60.0, 21.0));
    assert!(clips[2].is_empty());
    assert!(clips[3].is_empty());
}

#[test]
fn test_brush_exhaustion_skips_frame_cleanly() {
    let mut control = SpotlightControl::new(wide_style());
    let mut starved = surface().with_brush_limit(1);

    assert_eq!(control.render(&mut starved, bounds()), FrameOutcome::Skipped);
    assert_eq!(starved.live_brushes(), 0);
    assert_eq!(starved.clip(), None);
    assert!(control.take_redraw_request());

    // One gradient at a time plus the track brush is enough
    let mut tight = surface().with_brush_limit(2);
    assert_eq!(control.render(&mut tight, bounds()), FrameOutcome::Drawn);
    assert_eq!(tight.live_brushes(), 0);
    assert_eq!(tight.brushes_allocated(), 5);
}

#[test]
fn test_preview_rows() {
    let mut control = SpotlightControl::new(wide_style().preview_rows(true));
    let mut ctx = surface();
    assert_eq!(control.render(&mut ctx, Rect::new(0.0, 0.0, 640.0, 400.0)), FrameOutcome::Drawn);

    let draws = text_draws(&ctx);
    // track, two demo bands, four full bands, track, four marquee bands
    assert_eq!(draws.len(), 12);

    let demo: Vec<Option<Rect>> = draws[1..3].iter().map(|(_, _, c)| *c).collect();
    assert_eq!(
        demo,
        vec![
            Some(Rect::new(10.0, 100.0, 100.0, 21.0)),
            Some(Rect::new(360.0, 100.0, 50.0, 21.0)),
        ]
    );

    let full: Vec<Option<Rect>> = draws[3..7].iter().map(|(_, _, c)| *c).collect();
    assert_eq!(full[1], Some(Rect::new(110.0, 200.0, 250.0, 21.0)));
    assert_eq!(full[3], Some(Rect::new(410.0, 200.0, 100.0, 21.0)));

    assert_eq!(draws[7].0, Point::new(10.0, 300.0));
    assert_eq!(draws[7].2, None);
    assert_eq!(draws[8].2, Some(Rect::new(10.0, 300.0, 100.0, 21.0)));
    assert_eq!(ctx.live_brushes(), 0);
}

#[test]
fn test_surface_trait_object() {
    let mut control = SpotlightControl::default();
    let mut ctx = surface();
    let dyn_surface: &mut dyn Surface = &mut ctx;
    assert!(control.render(dyn_surface, bounds()).is_drawn());
}
