use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tintscale::css::{BoxShadow, Gradient};
use tintscale::error::PaletteError;
use tintscale::scale::{generate_hexes, generate_scale, NamingPattern, ScaleOptions};
use tintscale::state::PaletteUrlState;
use tintscale::tokens::{to_css_variables, to_json_tokens, to_svg, to_tailwind_config};
use tintscale::{contrast_ratio, rate_swatches, Color, Float, Rating, Rgb, DEFAULT_FOREGROUND};

#[test]
fn scale_invariants_hold_for_random_bases() -> Result<(), PaletteError> {
    let mut rng = StdRng::seed_from_u64(0x4f46e5);

    for _ in 0..100 {
        let base = Rgb::new(rng.random(), rng.random(), rng.random()).to_string();
        let steps = rng.random_range(1..=15);
        let shift = rng.random_range(-0.5..0.5) as Float;
        let boost: bool = rng.random();
        let options = ScaleOptions::builder()
            .steps(steps)
            .shift(shift)
            .increase_chroma_towards_dark(boost)
            .build();

        let scale = generate_scale(&base, &options)?;
        assert_eq!(scale.len(), steps);

        for pair in scale.entries().windows(2) {
            assert!(pair[0].oklch.l >= pair[1].oklch.l, "{} {:?}", base, scale);
        }

        for entry in &scale {
            assert!((0.0..=1.0).contains(&entry.oklch.l));
            assert!((0.0..=0.37).contains(&entry.oklch.c));
            assert!((0.0..=360.0).contains(&entry.oklch.h));
            assert_eq!(entry.hex, entry.rgb.to_string());
            assert_eq!(entry.hex, entry.hex.to_uppercase());

            // Delta E usually stays below 1 but is not guaranteed at gamut edges.
            let delta = Color::from(entry.oklch).distance(&Color::from(entry.rgb));
            assert!(delta < 1.0, "{} has Delta E {}", entry.hex, delta);
        }

        if boost {
            let lightest = scale.lightest().map(|entry| entry.oklch.c);
            let darkest = scale.darkest().map(|entry| entry.oklch.c);
            assert!(darkest >= lightest);
        } else {
            assert_eq!(generate_hexes(&base, steps, shift)?, scale.hexes());
        }
    }

    Ok(())
}

#[test]
fn eleven_steps_span_light_to_dark() -> Result<(), PaletteError> {
    let scale = generate_scale("#4f46e5", &ScaleOptions::default())?;
    let names: Vec<_> = scale.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(
        names,
        ["50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950"]
    );
    assert!(scale[0].oklch.l - scale[9].oklch.l > 0.2);
    assert!(scale[9].oklch.l > scale[10].oklch.l);

    let extreme = generate_scale("#4f46e5", &ScaleOptions::with_steps_and_shift(11, 1.0))?;
    assert!(extreme.iter().all(|entry| (0.0..=1.0).contains(&entry.oklch.l)));
    Ok(())
}

#[test]
fn contrast_badges_follow_thresholds() -> Result<(), PaletteError> {
    let scale = generate_scale("#808080", &ScaleOptions::default())?;
    let rated = rate_swatches(scale.entries(), DEFAULT_FOREGROUND)?;

    for swatch in &rated {
        let ratio = contrast_ratio(&swatch.hex, DEFAULT_FOREGROUND)?;
        assert_eq!(swatch.ratio, ratio);
        let expected = if ratio >= 7.0 {
            Rating::Aaa
        } else if ratio >= 4.5 {
            Rating::Aa
        } else {
            Rating::Fail
        };
        assert_eq!(swatch.rating, expected);
    }

    // Against black, lighter is better.
    assert_eq!(rated[0].rating, Rating::Aaa);
    assert_eq!(rated[10].rating, Rating::Fail);
    for pair in rated.windows(2) {
        assert!(pair[0].ratio >= pair[1].ratio);
    }
    Ok(())
}

#[test]
fn exports_cover_every_entry() -> Result<(), PaletteError> {
    let options = ScaleOptions::builder()
        .steps(10)
        .naming_pattern(NamingPattern::From50To900)
        .build();
    let scale = generate_scale("#6a8d51", &options)?;

    let css = to_css_variables("Leaf Green", scale.entries());
    assert_eq!(css.lines().count(), 12);
    assert!(css.contains("  --leaf-green-900: #"));

    let config = to_tailwind_config("leaf", scale.entries());
    assert_eq!(config.matches("\": \"#").count(), 10);

    let tokens = to_json_tokens("leaf", scale.entries());
    let leaf = tokens["tokens"]["color"]["leaf"].as_object().unwrap();
    assert_eq!(leaf.len(), 10);
    assert_eq!(leaf["500"]["$value"], scale[5].hex.as_str());

    let svg = to_svg(scale.entries());
    assert!(svg.contains("width=\"192\" height=\"48\""));
    assert_eq!(svg.matches("<rect ").count(), 10);

    let gradient = Gradient::from_palette(scale.entries());
    assert_eq!(
        gradient.to_string(),
        format!("linear-gradient(90deg, {} 0%, {} 100%)", scale[0].hex, scale[9].hex)
    );
    let shadow = BoxShadow::from_palette(scale.entries());
    assert_eq!(shadow.color, scale[5].hex);
    Ok(())
}

#[test]
fn url_state_drives_generation() -> Result<(), PaletteError> {
    let state = PaletteUrlState::from_query(
        "?baseColor=%234f46e5&count=7&shift=0.05&incDark=1&pattern=custom&names=bg,,fg",
    );
    let scale = generate_scale(&state.base_color, &state.to_scale_options())?;
    assert_eq!(scale.len(), 7);
    assert_eq!(state.names, ["bg", "fg"]);
    assert_eq!(scale[0].name, "bg");
    assert_eq!(scale[1].name, "fg");
    assert_eq!(scale[2].name, "shade-3");
    assert_eq!(scale[6].name, "shade-7");

    let restored = PaletteUrlState::from_query(&state.to_query());
    assert_eq!(restored, state);
    Ok(())
}

#[cfg(feature = "worker")]
#[test]
fn worker_matches_synchronous_generation() -> Result<(), PaletteError> {
    use tintscale::worker::{handle_message, PaletteWorker, WorkerRequest, WorkerResponse};

    let worker = PaletteWorker::spawn()?;
    for base in ["#4f46e5", "#6a8d51", "#ffca00"] {
        let response = worker.generate(WorkerRequest {
            base_hex: base.to_owned(),
            steps: 11,
            shift: 0.0,
        })?;
        assert_eq!(response.colors, generate_hexes(base, 11, 0.0)?);

        let message = format!(r#"{{"baseHex":"{}","steps":11}}"#, base);
        let reply: WorkerResponse = serde_json::from_str(&handle_message(&message)?)?;
        assert_eq!(reply, response);
    }
    Ok(())
}
