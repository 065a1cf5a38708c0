// SPDX-License-Identifier: MIT
//
// tinct — derive a brand palette, color harmonies, and an accessibility
// report from one seed color.
//
// This binary is a thin consumer: it resolves the seed from the command
// line, calls the engine crates, and formats their output. All color
// math lives in tinct-color and tinct-theme.
//
//   tinct "#10b981"          human-readable report
//   tinct --json "#10b981"   one JSON document
//   tinct --hue 210          seed from a hue-wheel position

use std::env;
use std::process;

use log::debug;
use tinct_color::{Hsl, normalize_hue};
use tinct_theme::{
    AccessibilityReport, BrandPalette, ColorHarmony, ContrastLevel, contrast_ratio,
    generate_harmonies, generate_palette, style_properties, validate_accessibility,
};

const USAGE: &str = "usage: tinct [--json] (<seed-hex> | --hue <degrees>)";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();

    let mut json = false;
    let mut hue: Option<f32> = None;
    let mut seed_arg: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--hue" => {
                let Some(value) = iter.next() else {
                    usage_error("--hue needs a value in degrees");
                };
                match value.parse::<f32>() {
                    Ok(degrees) => hue = Some(degrees),
                    Err(_) => usage_error("--hue value must be a number"),
                }
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                return;
            }
            other if seed_arg.is_none() && !other.starts_with("--") => {
                seed_arg = Some(other.to_owned());
            }
            other => usage_error(&format!("unexpected argument {other:?}")),
        }
    }

    let seed_hex = match resolve_seed(hue, seed_arg) {
        Ok(hex) => hex,
        Err(msg) => usage_error(&msg),
    };
    debug!("seed resolved to {seed_hex}");

    let palette = generate_palette(&seed_hex).unwrap_or_else(|e| fatal(&e.to_string()));
    let harmonies = generate_harmonies(&seed_hex).unwrap_or_else(|e| fatal(&e.to_string()));
    let report = validate_accessibility(&palette);

    if json {
        print_json(&palette, &harmonies, &report);
    } else {
        print_text(&palette, &harmonies, &report);
    }
}

/// Resolve the seed hex from either form of input.
///
/// A hue-wheel selection maps through HSL(hue, 70, 50) — the mid-tone,
/// well-saturated color at that wheel position.
fn resolve_seed(hue: Option<f32>, seed_arg: Option<String>) -> Result<String, String> {
    match (hue, seed_arg) {
        (Some(degrees), None) => {
            let color = Hsl::new(normalize_hue(degrees), 70.0, 50.0).map_err(|e| e.to_string())?;
            Ok(color.to_hex())
        }
        (None, Some(hex)) => Ok(hex),
        _ => Err("give exactly one of <seed-hex> or --hue".to_owned()),
    }
}

fn print_text(palette: &BrandPalette, harmonies: &[ColorHarmony], report: &AccessibilityReport) {
    println!("palette");
    println!("  primary      {}", palette.primary);
    println!("  secondary    {}", palette.secondary);
    println!("  accent       {}", palette.accent);
    for entry in palette.neutral.iter() {
        println!("  neutral-{:<4} {}", entry.stop, entry.color);
    }
    println!("  success      {}", palette.success);
    println!("  warning      {}", palette.warning);
    println!("  error        {}", palette.error);
    println!("  info         {}", palette.info);

    println!();
    println!("harmonies");
    for harmony in harmonies {
        let colors: Vec<String> = harmony.colors.iter().map(|c| c.to_hex()).collect();
        println!("  {:<14} {}", harmony.kind.name(), colors.join(" "));
        println!("  {:14} {}", "", harmony.description());
    }

    println!();
    let on_white = contrast_ratio(palette.primary, Hsl::WHITE);
    println!(
        "contrast primary on white: {on_white:.2} ({})",
        ContrastLevel::from_ratio(on_white).name()
    );
    if report.is_valid {
        println!("accessibility: ok");
    } else {
        println!("accessibility: issues found");
        for (issue, suggestion) in report.issues.iter().zip(&report.suggestions) {
            println!("  issue: {issue}");
            println!("    fix: {suggestion}");
        }
    }
}

fn print_json(palette: &BrandPalette, harmonies: &[ColorHarmony], report: &AccessibilityReport) {
    let doc = serde_json::json!({
        "palette": palette,
        "harmonies": harmonies,
        "accessibility": report,
        "style_properties": style_properties(palette),
    });
    match serde_json::to_string_pretty(&doc) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => fatal(&format!("serialization failed: {e}")),
    }
}

fn usage_error(msg: &str) -> ! {
    eprintln!("tinct: {msg}");
    eprintln!("{USAGE}");
    process::exit(2);
}

fn fatal(msg: &str) -> ! {
    eprintln!("tinct: {msg}");
    process::exit(1);
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_maps_through_mid_tone_hsl() {
        let hex = resolve_seed(Some(210.0), None).unwrap();
        assert_eq!(hex, Hsl::new(210.0, 70.0, 50.0).unwrap().to_hex());
    }

    #[test]
    fn hue_normalizes_before_mapping() {
        assert_eq!(
            resolve_seed(Some(-150.0), None).unwrap(),
            resolve_seed(Some(210.0), None).unwrap()
        );
    }

    #[test]
    fn hex_passes_through() {
        assert_eq!(resolve_seed(None, Some("#10b981".to_owned())).unwrap(), "#10b981");
    }

    #[test]
    fn both_or_neither_is_an_error() {
        assert!(resolve_seed(None, None).is_err());
        assert!(resolve_seed(Some(10.0), Some("#10b981".to_owned())).is_err());
    }
}
