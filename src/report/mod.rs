use crate::domain::model::SourceStatistics;

const HEADERS: [&str; 4] = ["Language", "Found", "Processed", "Average salary"];
const NO_AVERAGE: &str = "-";

/// Renders one source's statistics as an ASCII grid table, the source
/// label embedded in the top border. Undefined averages print as `-`.
pub fn render(statistics: &SourceStatistics) -> String {
    let rows: Vec<[String; 4]> = statistics
        .rows
        .iter()
        .map(|(category, summary)| {
            [
                category.clone(),
                summary.found.to_string(),
                summary.processed.to_string(),
                summary
                    .average_salary
                    .map(|avg| avg.to_string())
                    .unwrap_or_else(|| NO_AVERAGE.to_string()),
            ]
        })
        .collect();

    let mut widths: [usize; 4] = [0; 4];
    for (i, header) in HEADERS.iter().enumerate() {
        widths[i] = header.len();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut table = String::new();
    table.push_str(&title_border(&statistics.label, &widths));
    table.push('\n');
    table.push_str(&format_row(&HEADERS.map(String::from), &widths));
    table.push('\n');
    table.push_str(&separator(&widths));
    table.push('\n');
    for row in &rows {
        table.push_str(&format_row(row, &widths));
        table.push('\n');
    }
    table.push_str(&separator(&widths));
    table
}

pub fn print_all(statistics: &[SourceStatistics]) {
    for stats in statistics {
        println!();
        println!("{}", render(stats));
    }
}

fn separator(widths: &[usize; 4]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn title_border(label: &str, widths: &[usize; 4]) -> String {
    let plain = separator(widths);
    // Byte-splicing is only safe on ASCII labels; fall back otherwise.
    if !label.is_ascii() || label.len() + 2 >= plain.len() {
        return plain;
    }
    let mut line = format!("+{}", label);
    line.push_str(&plain[line.len()..]);
    line
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths.iter().copied()) {
        line.push_str(&format!(" {:<width$} |", cell, width = width));
    }
    line
}
