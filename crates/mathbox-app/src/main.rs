//! mathbox demo entry point.
//!
//! Builds an over-brace and an under-brace around a fraction bar, renders
//! the tree through both the retained geometry target and the recording
//! immediate renderer, checks that they agree, and prints the geometry as
//! JSON on stdout.
//!
//! Usage: `mathbox-demo [config.toml]`. The config path may also come from
//! the `MATHBOX_CONFIG` env var; without either, defaults are used.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use mathbox_layout::compare::{immediate_rects, rects_congruent, retained_rects};
use mathbox_layout::{
    DrawList, ElementRenderer, GeometryGroup, HorizontalBox, HorizontalRule, OverUnderBox,
    StrutBox, TexBox, TexEnvironment,
};
use mathbox_types::MathboxConfig;

fn load_config() -> Result<MathboxConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("MATHBOX_CONFIG").ok())
        .map(PathBuf::from);
    match path {
        Some(path) => MathboxConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(MathboxConfig::default()),
    }
}

/// A fraction bar with a scripted brace over it and a bare brace under it,
/// followed by a gap and a lowered rule.
fn build_formula(env: &TexEnvironment, kern: f64) -> Result<TexBox> {
    let bar: TexBox = HorizontalRule::new(env, 0.4, 12.0, 0.0)?.into();
    let brace = |len: f64| -> Result<TexBox> {
        Ok(HorizontalRule::new(env, len, 1.5, 0.0)?.into())
    };
    let script: TexBox = HorizontalRule::new(env, 0.8, 4.0, 0.0)?.into();

    let over: TexBox = OverUnderBox::new(bar, brace(12.0)?, Some(script), kern, true)?.into();
    let under: TexBox = OverUnderBox::new(over, brace(12.0)?, None, kern, false)?.into();

    let gap: TexBox = StrutBox::new(2.0, 0.0, 0.0, 0.0)?.into();
    let lowered: TexBox = HorizontalRule::new(env, 0.4, 6.0, 1.5)?.into();
    Ok(HorizontalBox::new(vec![under, gap, lowered]).into())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let env = TexEnvironment::from_config(&config);
    let formula = build_formula(&env, config.kern)?;
    let m = formula.metrics();
    log::info!(
        "Built formula: width={} height={} depth={}",
        m.width,
        m.height,
        m.depth
    );

    // Place the reference point so the whole formula lies below y = 0.
    let (x, y) = (0.0, m.height);

    let mut geometry = GeometryGroup::new();
    formula.render_geometry(&mut geometry, config.scale, x, y);

    let mut draw_list = DrawList::new();
    draw_list.render_element(&formula, x, y)?;
    log::info!(
        "Rendered {} shapes (retained) and {} fills (immediate)",
        geometry.rect_count(),
        draw_list.fill_rect_count()
    );

    let retained = retained_rects(&formula, config.scale, x, y);
    let immediate = immediate_rects(&formula, x, y)?;
    if !rects_congruent(&retained, &immediate, config.tolerance) {
        bail!("render paths disagree:\nretained  {retained:?}\nimmediate {immediate:?}");
    }
    log::info!("Render paths agree within {}", config.tolerance);

    let report = serde_json::json!({
        "metrics": m,
        "scale": config.scale,
        "geometry": geometry,
        "commands": draw_list.commands(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
