use std::path::Path;

use console::Style;
use peemdrift_core::config::{DriftConfig, SubpixelPolicy};
use peemdrift_core::stack::{DriftSeries, ImageStack};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_drift_summary(
    stack: &ImageStack,
    template_dim: (usize, usize),
    config: &DriftConfig,
    output: Option<&Path>,
) {
    let s = Styles::new();
    let (h, w) = stack.slice_dim();
    let (th, tw) = template_dim;

    println!();
    println!("  {}", s.title.apply_to("Drift Estimation"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Frames"),
        s.value.apply_to(format!("{} ({}x{})", stack.len(), w, h))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Template"),
        s.value.apply_to(format!("{}x{}", tw, th))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Method"),
        s.method.apply_to(config.method)
    );
    if config.subpixel {
        let policy = match config.subpixel_policy {
            SubpixelPolicy::Strict => "subpixel (strict)",
            SubpixelPolicy::FallbackToInteger => "subpixel (integer fallback)",
        };
        println!(
            "  {:<14}{}",
            s.label.apply_to("Refinement"),
            s.method.apply_to(policy)
        );
    } else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Refinement"),
            s.disabled.apply_to("off")
        );
    }
    if let Some(path) = output {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Output"),
            s.path.apply_to(path.display())
        );
    }
    println!();
}

pub fn print_drift_stats(series: &DriftSeries) {
    if series.is_empty() {
        return;
    }
    let s = Styles::new();

    let max_excursion = series
        .iter()
        .map(|d| d.dx.hypot(d.dy))
        .fold(f64::NEG_INFINITY, f64::max);
    let first = series[0];
    let last = series[series.len() - 1];

    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("First frame"),
        s.value.apply_to(format!("({:.2}, {:.2})", first.dx, first.dy))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Last frame"),
        s.value.apply_to(format!("({:.2}, {:.2})", last.dx, last.dy))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Max |pos|"),
        s.value.apply_to(format!("{:.2} px", max_excursion))
    );
}
