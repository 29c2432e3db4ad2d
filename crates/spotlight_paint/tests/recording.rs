//! Integration tests for the recording surface

use spotlight_paint::{
    Color, FillStyle, Font, Gradient, MonospaceMeasurer, PaintCommand, PaintContext, Point, Rect,
    Surface, TextMetrics,
};

/// A gradient brush clipped to a band only records that band as its clip
#[test]
fn test_gradient_band_draw_is_recorded_with_clip() {
    let mut ctx = PaintContext::with_measurer(MonospaceMeasurer::new(10.0, 20.0));
    let font = Font::new("Arial Black", 50.0).bold();
    let metrics = TextMetrics::measure(ctx.measurer(), "WinFormDevelopers", &font);
    assert_eq!(metrics.measured_width, 170.0);

    let band = Rect::new(10.0, 10.0, 34.0, 21.0);
    let gradient = Gradient::linear_horizontal(
        band,
        Color::from_argb_hex(0xFF9C1031),
        Color::from_argb_hex(0xFFBE0E20),
    );

    {
        let brush = ctx.create_brush(gradient.clone().into()).unwrap();
        ctx.set_clip(band);
        ctx.draw_text(&metrics.text, &font, Point::new(10.0, 10.0), &brush)
            .unwrap();
        ctx.reset_clip();
    }

    assert_eq!(ctx.live_brushes(), 0);
    assert_eq!(
        ctx.commands(),
        &[
            PaintCommand::SetClip { rect: band },
            PaintCommand::DrawText {
                text: "WinFormDevelopers".to_string(),
                font,
                origin: Point::new(10.0, 10.0),
                style: FillStyle::Gradient(gradient),
                clip: Some(band),
            },
            PaintCommand::ResetClip,
        ]
    );
}

/// Recorded frames serialize to JSON for headless dumps
#[test]
fn test_commands_serialize_to_json() {
    let mut ctx = PaintContext::new();
    ctx.set_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
    ctx.reset_clip();

    let json = serde_json::to_value(ctx.commands()).unwrap();
    assert_eq!(json[0]["op"], "set_clip");
    assert_eq!(json[0]["rect"]["width"], 10.0);
    assert_eq!(json[1]["op"], "reset_clip");
}
