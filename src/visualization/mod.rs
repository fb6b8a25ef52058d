mod tables;
mod charts;

pub use tables::{
    format_leslie_matrix, print_leslie_matrix,
    format_growth_summary, print_growth_summary,
    format_population_table, print_population_table,
};
pub use charts::{
    chart_title, format_population_chart, print_population_chart, render_svg_chart,
};
