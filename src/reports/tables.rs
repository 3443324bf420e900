use crate::assembler::MatchReport;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// One row per stage; no-show stages keep their row with blank cells.
pub fn stage_summary(report: &MatchReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Stage").add_attribute(Attribute::Bold),
        Cell::new("Place"),
        Cell::new("%").fg(Color::Cyan),
        Cell::new("Score"),
        Cell::new("Time"),
        Cell::new("HF").add_attribute(Attribute::Bold),
    ]);

    for i in [1, 2, 4, 5] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for stage in &report.stages {
        let row = match &stage.performance {
            Some(p) => vec![
                Cell::new(stage.title()).add_attribute(Attribute::Bold),
                Cell::new(format!("{}/{}", p.place, p.shooter_count)),
                Cell::new(format!("{:.2}", p.stage_percent.value())).fg(Color::Cyan),
                Cell::new(p.score_text()),
                Cell::new(format!("{:.2}", p.stage_time_secs.value())),
                Cell::new(format!("{:.4}", p.hit_factor.value())).add_attribute(Attribute::Bold),
            ],
            None => vec![
                Cell::new(stage.title()).fg(Color::DarkGrey),
                Cell::new(""),
                Cell::new(""),
                Cell::new(""),
                Cell::new(""),
                Cell::new(""),
            ],
        };
        table.add_row(row);
    }
    table
}
