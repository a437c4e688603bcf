use anyhow::Result;
use chrono::NaiveDate;

use crate::{DaySchedule, ScheduleCell};

use super::super::Container;

const COLUMN_WIDTH: usize = 22;

pub struct ScheduleController<'a> {
    container: &'a Container,
}

impl<'a> ScheduleController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn schedule(&self, date: NaiveDate) -> Result<String> {
        let use_case = self.container.schedule_use_case();
        let board = use_case.board(date).await?;
        Ok(self.format_schedule(&board))
    }

    fn format_schedule(&self, board: &DaySchedule) -> String {
        let mut output = format!("Schedule for {}\n\n{:<7}", board.date, "Time");
        for provider in &board.providers {
            output.push_str(&format!("{:<width$}", truncate(&provider.name), width = COLUMN_WIDTH));
        }
        output.push('\n');

        for row in &board.rows {
            output.push_str(&format!("{:<7}", row.timeslot));
            for cell in &row.cells {
                let text = match cell {
                    ScheduleCell::Available => "available".to_string(),
                    ScheduleCell::Booked {
                        customer_name,
                        service_name,
                        ..
                    } => truncate(&format!("{} / {}", customer_name, service_name)),
                };
                output.push_str(&format!("{:<width$}", text, width = COLUMN_WIDTH));
            }
            output.push('\n');
        }

        output.push_str(&format!("\n{} open cells", board.available_cells()));
        output
    }
}

fn truncate(text: &str) -> String {
    let limit = COLUMN_WIDTH - 2;
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(limit - 1).collect();
        short.push('~');
        short
    }
}
