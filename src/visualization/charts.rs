use std::fmt::Write as _;

use colored::Colorize;

use crate::models::{age_class_labels, PopulationHistory};

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

const SVG_WIDTH: f64 = 1000.0;
const SVG_HEIGHT: f64 = 600.0;
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 220.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 70.0;
const GRID_LINES: usize = 5;
const PALETTE: [&str; 8] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
];

/// Chart title shared by the terminal and SVG renderings.
pub fn chart_title(growth_rate: f64) -> String {
    format!("Leslie Matrix Simulation (Lambda={growth_rate:.2})")
}

/// Format the history as a terminal chart: one sparkline per age class, all
/// scaled to the same maximum.
pub fn format_population_chart(history: &PopulationHistory, growth_rate: f64) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", chart_title(growth_rate).bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    if history.is_empty() || history.age_classes() == 0 {
        output.push_str("  No data available.\n");
        return output;
    }

    let max = history.max_count();
    let labels = age_class_labels(history.age_classes());
    let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);

    for (class, label) in labels.iter().enumerate() {
        let Some(series) = history.age_class_series(class) else {
            continue;
        };
        let line: String = series.iter().map(|&v| spark(v, max)).collect();
        let peak = series.iter().copied().fold(0.0f64, f64::max);
        output.push_str(&format!(
            "  {label:<label_width$}  {}  peak {peak:.1}\n",
            line.green()
        ));
    }

    output.push_str(&format!(
        "  {:<label_width$}  Time Steps (Years): 0..{}\n",
        "",
        history.len() - 1
    ));
    output
}

/// Print the terminal chart.
pub fn print_population_chart(history: &PopulationHistory, growth_rate: f64) {
    print!("{}", format_population_chart(history, growth_rate));
}

fn spark(value: f64, max: f64) -> char {
    if max <= 0.0 || !value.is_finite() || value <= 0.0 {
        return SPARK_LEVELS[0];
    }
    let level = ((value / max) * (SPARK_LEVELS.len() - 1) as f64).round() as usize;
    SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
}

/// Render the history as an SVG line chart with one marked line per age class,
/// a legend, and a grid.
pub fn render_svg_chart(history: &PopulationHistory, growth_rate: f64) -> String {
    let plot_w = SVG_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = SVG_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let steps = history.len().saturating_sub(1).max(1) as f64;
    let max = history.max_count();
    let y_max = if max > 0.0 { max } else { 1.0 };

    let x_at = |t: usize| MARGIN_LEFT + plot_w * t as f64 / steps;
    let y_at = |v: f64| MARGIN_TOP + plot_h * (1.0 - (v / y_max).clamp(0.0, 1.0));

    let mut svg = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{SVG_WIDTH}" height="{SVG_HEIGHT}" viewBox="0 0 {SVG_WIDTH} {SVG_HEIGHT}" font-family="sans-serif">"#
    );
    let _ = writeln!(
        svg,
        r#"<rect width="{SVG_WIDTH}" height="{SVG_HEIGHT}" fill="white"/>"#
    );
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="35" font-size="20" text-anchor="middle">{}</text>"#,
        MARGIN_LEFT + plot_w / 2.0,
        chart_title(growth_rate)
    );

    // Grid and axis ticks
    for i in 0..=GRID_LINES {
        let frac = i as f64 / GRID_LINES as f64;
        let y = MARGIN_TOP + plot_h * (1.0 - frac);
        let _ = writeln!(
            svg,
            r##"<line x1="{MARGIN_LEFT}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="#dddddd"/>"##,
            MARGIN_LEFT + plot_w
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" font-size="12" text-anchor="end">{:.0}</text>"#,
            MARGIN_LEFT - 8.0,
            y + 4.0,
            y_max * frac
        );
    }
    let tick_every = (history.len() / 10).max(1);
    for t in (0..history.len()).step_by(tick_every) {
        let x = x_at(t);
        let _ = writeln!(
            svg,
            r##"<line x1="{x:.2}" y1="{MARGIN_TOP}" x2="{x:.2}" y2="{:.2}" stroke="#eeeeee"/>"##,
            MARGIN_TOP + plot_h
        );
        let _ = writeln!(
            svg,
            r#"<text x="{x:.2}" y="{:.2}" font-size="12" text-anchor="middle">{t}</text>"#,
            MARGIN_TOP + plot_h + 20.0
        );
    }

    let _ = writeln!(
        svg,
        r#"<rect x="{MARGIN_LEFT}" y="{MARGIN_TOP}" width="{plot_w}" height="{plot_h}" fill="none" stroke="black"/>"#
    );
    let _ = writeln!(
        svg,
        r#"<text x="{:.2}" y="{:.2}" font-size="14" text-anchor="middle">Time Steps (Years)</text>"#,
        MARGIN_LEFT + plot_w / 2.0,
        SVG_HEIGHT - 20.0
    );
    let _ = writeln!(
        svg,
        r#"<text x="25" y="{:.2}" font-size="14" text-anchor="middle" transform="rotate(-90 25 {:.2})">Population Size</text>"#,
        MARGIN_TOP + plot_h / 2.0,
        MARGIN_TOP + plot_h / 2.0
    );

    // One series per age class
    let labels = age_class_labels(history.age_classes());
    for (class, label) in labels.iter().enumerate() {
        let color = PALETTE[class % PALETTE.len()];
        let Some(series) = history.age_class_series(class) else {
            continue;
        };
        let points: Vec<String> = series
            .iter()
            .enumerate()
            .map(|(t, &v)| format!("{:.2},{:.2}", x_at(t), y_at(v)))
            .collect();
        let _ = writeln!(
            svg,
            r#"<polyline fill="none" stroke="{color}" stroke-width="2" points="{}"/>"#,
            points.join(" ")
        );
        for (t, &v) in series.iter().enumerate() {
            let _ = writeln!(
                svg,
                r#"<circle cx="{:.2}" cy="{:.2}" r="3" fill="{color}"/>"#,
                x_at(t),
                y_at(v)
            );
        }

        let legend_y = MARGIN_TOP + 20.0 + class as f64 * 22.0;
        let legend_x = MARGIN_LEFT + plot_w + 20.0;
        let _ = writeln!(
            svg,
            r#"<line x1="{legend_x:.2}" y1="{legend_y:.2}" x2="{:.2}" y2="{legend_y:.2}" stroke="{color}" stroke-width="2"/>"#,
            legend_x + 24.0
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" font-size="13">{label}</text>"#,
            legend_x + 32.0,
            legend_y + 4.0
        );
    }

    svg.push_str("</svg>\n");
    svg
}
