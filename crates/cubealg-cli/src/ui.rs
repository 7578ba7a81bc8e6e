use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use crossterm::style::{self, Stylize};
use cubealg::core::io::traits::LoadWarning;
use cubealg::core::models::color::Sticker;
use cubealg::core::models::record::{AlgorithmRecord, CubeState, Side};
use std::io::{self, BufRead, Write};

const FORMULA_WIDTH: u16 = 60;

pub fn algorithm_table(records: &[&AlgorithmRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Type"),
        header_cell("Formula"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    if let Some(column) = table.column_mut(3) {
        column.set_constraint(ColumnConstraint::UpperBoundary(Width::Fixed(FORMULA_WIDTH)));
    }

    for record in records {
        let kind_cell = if record.kind.is_preset() {
            Cell::new(record.kind.as_str())
        } else {
            Cell::new(record.kind.as_str()).fg(Color::DarkGrey)
        };
        table.add_row(vec![
            Cell::new(record.id),
            Cell::new(&record.name).add_attribute(Attribute::Bold),
            kind_cell,
            Cell::new(&record.formula),
        ]);
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

/// Lays the pattern out as seen from above: back row on top, left and right
/// rows beside the top face, front row below.
pub fn cube_net(cube: &CubeState, colored: bool) -> Vec<String> {
    let paint = |sticker: Sticker| -> String {
        if colored {
            let (r, g, b) = sticker.rgb();
            format!(" {} ", sticker.symbol())
                .with(style::Color::Black)
                .on(style::Color::Rgb { r, g, b })
                .to_string()
        } else {
            format!(" {} ", sticker.symbol())
        }
    };
    let row = |stickers: &[Sticker]| -> String { stickers.iter().map(|&s| paint(s)).collect() };
    let pad = "   ";

    let mut lines = Vec::with_capacity(5);
    lines.push(format!("{pad} {}", row(cube.side(Side::Back))));
    for r in 0..3 {
        lines.push(format!(
            "{} {} {}",
            paint(cube.side(Side::Left)[r]),
            row(&cube.top[r * 3..r * 3 + 3]),
            paint(cube.side(Side::Right)[r]),
        ));
    }
    lines.push(format!("{pad} {}", row(cube.side(Side::Front))));
    lines
}

pub fn print_record(record: &AlgorithmRecord, colored: bool) {
    println!("#{}  {}", record.id, record.name.as_str().bold());
    println!("Type:    {}", record.kind);
    println!("Formula: {}", record.formula);
    println!();
    for line in cube_net(&record.cube, colored) {
        println!("  {line}");
    }
}

pub fn print_load_warnings(warnings: &[LoadWarning]) {
    for warning in warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }
}

/// Asks a yes/no question on stdout; anything but `y`/`yes` declines.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    confirm_with(prompt, &mut stdin.lock(), &mut io::stdout())
}

fn confirm_with(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<bool> {
    write!(output, "{prompt} [y/N] ")?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
