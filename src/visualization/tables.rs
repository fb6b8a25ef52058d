use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::analysis::{GrowthAnalysis, GrowthTrend};
use crate::models::{age_class_labels, LeslieMatrix, PopulationHistory};

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format the Leslie matrix as a table with one column per age class.
pub fn format_leslie_matrix(matrix: &LeslieMatrix) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Leslie Matrix".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let labels = age_class_labels(matrix.dimension());
    let mut header = vec![String::new()];
    header.extend(labels.iter().cloned());

    let mut table = styled_table();
    table.set_header(header);

    for (i, row) in matrix.rows().iter().enumerate() {
        let mut cells = vec![Cell::new(&labels[i])];
        cells.extend(row.iter().map(|v| Cell::new(format!("{v:.3}"))));
        table.add_row(cells);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the Leslie matrix table.
pub fn print_leslie_matrix(matrix: &LeslieMatrix) {
    print!("{}", format_leslie_matrix(matrix));
}

/// Format the dominant eigenvalue, trend, and eigenvalue spectrum.
pub fn format_growth_summary(growth: &GrowthAnalysis) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Growth Analysis".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));
    output.push_str(&format!(
        "  Dominant Eigenvalue (Lambda): {:.4}\n",
        growth.growth_rate
    ));

    let verdict = format!("Population is {}.", growth.trend);
    let verdict = match growth.trend {
        GrowthTrend::Increasing => verdict.green(),
        GrowthTrend::Decreasing => verdict.red(),
        GrowthTrend::Stable => verdict.yellow(),
    };
    output.push_str(&format!("   -> {}\n", verdict.bold()));

    let mut table = styled_table();
    table.set_header(vec!["#", "Real", "Imaginary", "Magnitude"]);
    for (i, z) in growth.eigenvalues.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format!("{:.4}", z.re)),
            Cell::new(format!("{:.4}", z.im)),
            Cell::new(format!("{:.4}", z.norm())),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the growth analysis summary.
pub fn print_growth_summary(growth: &GrowthAnalysis) {
    print!("{}", format_growth_summary(growth));
}

/// Format the population history: one row per step, one column per age class
/// plus the total.
pub fn format_population_table(history: &PopulationHistory) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Population History".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    let mut header = vec!["Year".to_string()];
    header.extend(age_class_labels(history.age_classes()));
    header.push("Total".to_string());

    let mut table = styled_table();
    table.set_header(header);

    for (year, step) in history.iter().enumerate() {
        let mut cells = vec![Cell::new(year)];
        cells.extend(step.iter().map(|v| Cell::new(format!("{v:.1}"))));
        cells.push(Cell::new(format!("{:.1}", step.sum())));
        table.add_row(cells);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the population history table.
pub fn print_population_table(history: &PopulationHistory) {
    print!("{}", format_population_table(history));
}
