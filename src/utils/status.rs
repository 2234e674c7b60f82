use crate::builder::{BuildReport, OutputKind};
use crate::config::ColormapTable;
use crate::models::ColorStop;
use comfy_table::{Attribute, Cell, CellAlignment, Table};
use image::Rgb;

pub fn colour_bar(stops: &[ColorStop]) -> String {
    let mut s = String::new();
    for stop in stops {
        let Rgb([r, g, b]) = stop.color;
        s.push_str(&format!("\x1b[38;2;{};{};{}m█\x1b[0m", r, g, b));
    }
    s
}

fn stops_of<'a>(table: &'a ColormapTable, name: &str) -> &'a [ColorStop] {
    table
        .images
        .iter()
        .find(|i| i.name == name)
        .map(|i| i.stops.as_slice())
        .unwrap_or_default()
}

pub fn build_summary_table(report: &BuildReport, table: &ColormapTable) -> Table {
    let header = ["", "File", "Source", "Stops", "Size", "Bytes"]
        .into_iter()
        .map(|h| {
            Cell::new(h)
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center)
        })
        .chain(std::iter::once(
            Cell::new("Colours").add_attribute(Attribute::Bold),
        ))
        .collect::<Vec<_>>();

    let mut summary = Table::new();
    summary
        .set_header(header)
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);

    for out in &report.outputs {
        let (source, stops) = match &out.kind {
            OutputKind::Rendered { .. } => ("rendered".to_string(), stops_of(table, &out.name)),
            OutputKind::Copied { from } => (format!("copy of {}", from), stops_of(table, from)),
        };
        let status = if out.size_bytes > 0 { "✅" } else { "⚠️" };

        summary.add_row(vec![
            Cell::new(status).set_alignment(CellAlignment::Center),
            Cell::new(&out.name),
            Cell::new(source),
            Cell::new(stops.len()).set_alignment(CellAlignment::Center),
            Cell::new(format!("{}x{}", report.width, report.height))
                .set_alignment(CellAlignment::Center),
            Cell::new(out.size_bytes).set_alignment(CellAlignment::Right),
            Cell::new(colour_bar(stops)),
        ]);
    }
    summary
}

pub fn print_build_summary(report: &BuildReport, table: &ColormapTable) {
    println!(
        "\nColormap summary:\n{}",
        build_summary_table(report, table)
    );
    println!();
}
