use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{occupancy::Occupancy, schedule::Schedule, theme::Theme};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_map_table(occupancy: Occupancy) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Region", "Desktop", "Status"]);
    for (desktop, status) in occupancy.statuses() {
        table.add_row(vec![
            Cell::new(desktop.region_id())
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(desktop),
            Cell::new(status).fg(status.color()),
        ]);
    }
    table
}

pub fn build_hours_table(schedule: &Schedule, theme: Theme) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Opens", "Closes"]);
    if schedule.is_closed_all_day() {
        table.add_row(vec![Cell::new("Closed all day.").fg(Color::Red), Cell::new("")]);
    }
    for range in schedule {
        table.add_row(vec![
            Cell::new(range.start.short()),
            Cell::new(range.end.short()).add_attribute(Attribute::Dim),
        ]);
    }
    table.add_row(vec![
        Cell::new("Theme").add_attribute(Attribute::Dim),
        Cell::new(theme).fg(theme.color()),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use enumset::EnumSet;

    use super::*;
    use crate::{desktop::Desktop, schedule::TimeRange, time::Time};

    #[test]
    fn map_table_ok() {
        let table = build_map_table(Occupancy::new(Desktop::Acid.into(), EnumSet::empty()));
        let rendered = table.to_string();
        assert!(rendered.contains("acid"));
        assert!(rendered.contains("c32"));
        assert!(rendered.contains("occupied"));
        assert_eq!(table.row_iter().count(), 30);
    }

    #[test]
    fn hours_table_ok() {
        let schedule = Schedule::from(vec![TimeRange::new(
            Time::from_hms(9, 0, 0),
            Time::from_hms(16, 30, 0),
        )]);
        let rendered = build_hours_table(&schedule, Theme::Day).to_string();
        assert!(rendered.contains("9 am"));
        assert!(rendered.contains("4:30 pm"));
    }

    #[test]
    fn hours_table_closed_all_day_ok() {
        let rendered = build_hours_table(&Schedule::CLOSED_ALL_DAY, Theme::Night).to_string();
        assert!(rendered.contains("Closed all day."));
        assert!(rendered.contains("night"));
    }
}
