/*
 *  tests/glyph_sequences.rs
 *
 *  Call-sequence tests for the weather glyphs
 *
 *  weather-glyphs - LyMonS glyph kit
 *  (c) 2020-26 Stuart Hunter
 */

use weather_glyphs::{
    DrawCall, GlyphPart, IconRenderer, IconSize, Palette, RecordingSurface, WeatherIcon,
};

// distinct colour per part so every call can be attributed
const BASE: u8 = 1;
const PALETTE: Palette<u8> = Palette {
    cloud: 10,
    raindrop: 11,
    snowflake: 12,
    bolt: 13,
    fog: 14,
    outline: 15,
};

fn record(icon: WeatherIcon, size: IconSize, x: i32, y: i32, base: u8) -> Vec<DrawCall<u8>> {
    let mut s = RecordingSurface::new();
    IconRenderer::new(PALETTE).draw(&mut s, icon, size, x, y, base).unwrap();
    s.take()
}

fn is_drop(calls: &[DrawCall<u8>]) -> bool {
    matches!(
        calls,
        [DrawCall::Line { .. }, DrawCall::Line { .. }, DrawCall::Pixel { .. }]
    )
}

fn is_cloud(calls: &[DrawCall<u8>]) -> bool {
    matches!(
        calls,
        [
            DrawCall::FillRoundRect { .. },
            DrawCall::FillCircle { .. },
            DrawCall::FillCircle { .. },
            DrawCall::FillCircle { .. },
        ]
    ) && calls.iter().all(|c| c.color() == PALETTE.cloud)
}

#[test]
fn test_every_glyph_draws_something_deterministically() {
    for size in [IconSize::Large, IconSize::Small] {
        for icon in WeatherIcon::ALL {
            let first = record(icon, size, 5, 7, BASE);
            let second = record(icon, size, 5, 7, BASE);
            assert!(!first.is_empty(), "{size} {icon} drew nothing");
            assert_eq!(first, second, "{size} {icon} is not repeatable");
        }
    }
}

#[test]
fn test_same_surface_twice_doubles_sequence() {
    let renderer = IconRenderer::new(PALETTE);
    let mut s = RecordingSurface::new();
    renderer.draw_large(&mut s, WeatherIcon::Snow, 0, 0, BASE).unwrap();
    let once = s.len();
    renderer.draw_large(&mut s, WeatherIcon::Snow, 0, 0, BASE).unwrap();

    let calls = s.calls();
    assert_eq!(calls.len(), once * 2);
    assert_eq!(calls[..once], calls[once..]);
}

#[test]
fn test_large_rain_at_origin() {
    let calls = record(WeatherIcon::Rain, IconSize::Large, 0, 0, BASE);
    assert_eq!(calls.len(), 4 + 5 * 3);
    assert!(is_cloud(&calls[..4]));

    let drops: Vec<_> = calls[4..].chunks(3).collect();
    assert_eq!(drops.len(), 5);
    let mut tips = Vec::new();
    for d in &drops {
        assert!(is_drop(d));
        assert!(d.iter().all(|c| c.color() == PALETTE.raindrop));
        match d[0] {
            DrawCall::Line { x0, y0, .. } => tips.push((x0, y0)),
            _ => unreachable!(),
        }
    }
    assert_eq!(tips, vec![(10, 36), (18, 36), (26, 36), (34, 36), (42, 36)]);
    // dot sits one below the V
    assert_eq!(drops[0][2], DrawCall::Pixel { x: 10, y: 43, color: PALETTE.raindrop });
}

fn mark_xs(calls: &[DrawCall<u8>], per_mark: usize) -> Vec<i32> {
    calls
        .chunks(per_mark)
        .map(|m| match m[0] {
            // drop tip or the flake's horizontal stroke centre
            DrawCall::Line { x0, x1, y0, y1, .. } if y0 == y1 => (x0 + x1) / 2,
            DrawCall::Line { x0, .. } => x0,
            _ => panic!("mark must start with a line"),
        })
        .collect()
}

fn assert_even_steps(xs: &[i32], step: i32) {
    for w in xs.windows(2) {
        assert_eq!(w[1] - w[0], step);
    }
}

#[test]
fn test_rain_and_snow_counts_and_spacing() {
    let cases = [
        (WeatherIcon::Rain, IconSize::Large, 3, 5, 10, 8),
        (WeatherIcon::Rain, IconSize::Small, 3, 3, 6, 7),
        (WeatherIcon::Snow, IconSize::Large, 4, 4, 12, 9),
        (WeatherIcon::Snow, IconSize::Small, 4, 3, 6, 7),
    ];
    for (icon, size, per_mark, count, start, step) in cases {
        let calls = record(icon, size, 0, 0, BASE);
        let marks = &calls[4..];
        assert_eq!(marks.len(), per_mark * count, "{size} {icon}");
        let xs = mark_xs(marks, per_mark);
        assert_eq!(xs.len(), count);
        assert_eq!(xs[0], start, "{size} {icon}");
        assert_even_steps(&xs, step);
    }
}

#[test]
fn test_snowflake_shape() {
    let calls = record(WeatherIcon::Snow, IconSize::Large, 0, 0, BASE);
    let flake = &calls[4..8];
    assert_eq!(
        flake,
        &[
            DrawCall::Line { x0: 8, y0: 36, x1: 16, y1: 36, color: 12 },
            DrawCall::Line { x0: 12, y0: 32, x1: 12, y1: 40, color: 12 },
            DrawCall::Line { x0: 9, y0: 33, x1: 15, y1: 39, color: 12 },
            DrawCall::Line { x0: 9, y0: 39, x1: 15, y1: 33, color: 12 },
        ]
    );
}

#[test]
fn test_fog_lines() {
    let large = record(WeatherIcon::Fog, IconSize::Large, 0, 0, BASE);
    let expected: Vec<_> = (0..4)
        .map(|i| DrawCall::FastHLine { x: 0, y: 14 + i * 6, w: 52, color: PALETTE.fog })
        .collect();
    assert_eq!(large, expected);

    let small = record(WeatherIcon::Fog, IconSize::Small, 3, 4, BASE);
    let expected: Vec<_> = (0..3)
        .map(|i| DrawCall::FastHLine { x: 3, y: 12 + i * 5, w: 28, color: PALETTE.fog })
        .collect();
    assert_eq!(small, expected);
}

#[test]
fn test_thunder_is_cloud_then_bolt() {
    let calls = record(WeatherIcon::Thunder, IconSize::Large, 0, 0, BASE);
    assert_eq!(calls.len(), 7);
    assert!(is_cloud(&calls[..4]));
    assert!(calls[4..].iter().all(|c| c.color() == PALETTE.bolt));
    // bolt hangs from the lower right of the cloud
    assert_eq!(calls[4], DrawCall::Line { x0: 36, y0: 30, x1: 28, y1: 40, color: PALETTE.bolt });

    let small = record(WeatherIcon::Thunder, IconSize::Small, 0, 0, BASE);
    assert_eq!(small[4], DrawCall::Line { x0: 20, y0: 18, x1: 12, y1: 28, color: PALETTE.bolt });
}

#[test]
fn test_unknown_fallback() {
    let large = record(WeatherIcon::from(42), IconSize::Large, 0, 0, BASE);
    assert_eq!(
        large,
        vec![
            DrawCall::Rect { x: 8, y: 8, w: 32, h: 32, color: 15 },
            DrawCall::Line { x0: 8, y0: 8, x1: 40, y1: 40, color: 15 },
            DrawCall::Line { x0: 40, y0: 8, x1: 8, y1: 40, color: 15 },
        ]
    );

    let small = record(WeatherIcon::from(200), IconSize::Small, 0, 0, BASE);
    assert_eq!(small, vec![DrawCall::Rect { x: 2, y: 2, w: 20, h: 20, color: 15 }]);
}

#[test]
fn test_sun_rays_use_base_color_at_45_degrees() {
    for (size, r) in [(IconSize::Large, 12), (IconSize::Small, 6)] {
        let calls = record(WeatherIcon::Sunny, size, 0, 0, BASE);
        assert_eq!(calls.len(), 9);
        assert!(calls.iter().all(|c| c.color() == BASE));

        let DrawCall::FillCircle { x: cx, y: cy, r: disc, .. } = calls[0] else {
            panic!("sun starts with its disc");
        };
        assert_eq!(disc, r);

        for (i, ray) in calls[1..].iter().enumerate() {
            let DrawCall::Line { x0, y0, x1, y1, .. } = *ray else {
                panic!("rays are lines");
            };
            let expected = i as f32 * 45.0;
            for (px, py, len) in [(x0, y0, r + 2), (x1, y1, r + 10)] {
                let (dx, dy) = ((px - cx) as f32, (py - cy) as f32);
                let mut angle = dy.atan2(dx).to_degrees();
                if angle < -0.5 {
                    angle += 360.0;
                }
                assert!((angle - expected).abs() < 5.0, "ray {i} at {angle}");
                let dist = (dx * dx + dy * dy).sqrt();
                assert!((dist - len as f32).abs() < 1.0, "ray {i} length {dist}");
            }
        }
    }
}

#[test]
fn test_base_color_only_touches_the_sun() {
    for size in [IconSize::Large, IconSize::Small] {
        for icon in WeatherIcon::ALL.into_iter().filter(|&i| i != WeatherIcon::Sunny) {
            assert_eq!(record(icon, size, 0, 0, 1), record(icon, size, 0, 0, 99));
        }
        let sun_a = record(WeatherIcon::Sunny, size, 0, 0, 1);
        let sun_b = record(WeatherIcon::Sunny, size, 0, 0, 99);
        assert!(sun_b.iter().all(|c| c.color() == 99));
        assert_eq!(sun_a.len(), sun_b.len());
    }
}

#[test]
fn test_palette_swap_changes_only_its_part() {
    let swapped = PALETTE.with(GlyphPart::Raindrop, 77);
    let mut s = RecordingSurface::new();
    IconRenderer::new(swapped)
        .draw_large(&mut s, WeatherIcon::Rain, 0, 0, BASE)
        .unwrap();
    let calls = s.take();
    assert!(calls[..4].iter().all(|c| c.color() == PALETTE.cloud));
    assert!(calls[4..].iter().all(|c| c.color() == 77));
}

#[test]
fn test_anchor_translates_sequence() {
    for size in [IconSize::Large, IconSize::Small] {
        for icon in WeatherIcon::ALL {
            let at_origin = record(icon, size, 0, 0, BASE);
            let moved = record(icon, size, 100, 50, BASE);
            let shifted: Vec<_> = at_origin.iter().map(|c| shift(*c, 100, 50)).collect();
            assert_eq!(moved, shifted, "{size} {icon}");
        }
    }
}

fn shift(c: DrawCall<u8>, dx: i32, dy: i32) -> DrawCall<u8> {
    match c {
        DrawCall::FillCircle { x, y, r, color } => DrawCall::FillCircle { x: x + dx, y: y + dy, r, color },
        DrawCall::Line { x0, y0, x1, y1, color } => {
            DrawCall::Line { x0: x0 + dx, y0: y0 + dy, x1: x1 + dx, y1: y1 + dy, color }
        }
        DrawCall::Pixel { x, y, color } => DrawCall::Pixel { x: x + dx, y: y + dy, color },
        DrawCall::FillRoundRect { x, y, w, h, r, color } => {
            DrawCall::FillRoundRect { x: x + dx, y: y + dy, w, h, r, color }
        }
        DrawCall::FastHLine { x, y, w, color } => DrawCall::FastHLine { x: x + dx, y: y + dy, w, color },
        DrawCall::Rect { x, y, w, h, color } => DrawCall::Rect { x: x + dx, y: y + dy, w, h, color },
    }
}
