use crate::cli::commands::open_workspace;
use crate::cli::parser::{Commands, HabitAction};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::habit::{DayMark, Habit, WEEK_LETTERS, is_valid_color, weekly_snapshot};
use crate::ui::messages::{confirm, header, info, success};
use crate::utils::date;
use crate::utils::formatting::short_id;
use crate::utils::ids::resolve_by_prefix;

fn find<'a>(habits: &'a [Habit], id: &str) -> AppResult<&'a Habit> {
    resolve_by_prefix(habits, id, |h| h.id.as_str(), AppError::HabitNotFound)
}

/// `#rrggbb` to a 24-bit ANSI foreground escape.
fn swatch(color: &str) -> String {
    if !is_valid_color(color) {
        return "●".to_string();
    }
    let channel = |i: usize| u8::from_str_radix(&color[i..i + 2], 16).unwrap_or(255);
    format!(
        "\x1b[38;2;{};{};{}m●\x1b[0m",
        channel(1),
        channel(3),
        channel(5)
    )
}

/// `M T W [T] F S S`, with today bracketed and starred once done.
fn render_snapshot(marks: &[DayMark; 7]) -> String {
    WEEK_LETTERS
        .iter()
        .zip(marks)
        .map(|(letter, mark)| match mark {
            DayMark::Other => format!(" {} ", letter),
            DayMark::Today => format!("[{}]", letter),
            DayMark::TodayDone => format!("[{}*]", letter),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Habit { action } = cmd else {
        return Ok(());
    };
    let mut ws = open_workspace(cfg, date::today())?;

    match action {
        HabitAction::Add { title, color } => {
            let title = title.trim();
            if title.is_empty() {
                info("Nothing added: the title is empty.");
                return Ok(());
            }
            if !is_valid_color(color) {
                return Err(AppError::InvalidColor(color.clone()));
            }
            let habit = ws.state.add_habit(title, color)?;
            ws.storage.audit("habit_add", &habit.id, &habit.title);
            success(format!("Habit \"{}\" created (id: {})", habit.title, habit.id));
        }

        HabitAction::Toggle { id } => {
            let target = find(ws.state.habits(), id)?.id.clone();
            ws.state.toggle_habit(&target)?;

            if let Some(h) = ws.state.habits().iter().find(|h| h.id == target) {
                let msg = if h.completed_today {
                    format!("\"{}\" done today, streak {} day(s).", h.title, h.streak)
                } else {
                    format!("\"{}\" undone, streak {} day(s).", h.title, h.streak)
                };
                ws.storage.audit("habit_toggle", &h.id, &msg);
                success(msg);
            }
        }

        HabitAction::Del { id } => {
            let target = find(ws.state.habits(), id)?.clone();
            if !confirm(&format!("Delete habit \"{}\"?", target.title)) {
                info("Operation cancelled.");
                return Ok(());
            }
            ws.state.remove_habit(&target.id)?;
            ws.storage.audit("habit_del", &target.id, &target.title);
            success(format!("Habit \"{}\" deleted.", target.title));
        }

        HabitAction::List => {
            let habits = ws.state.habits();
            if habits.is_empty() {
                println!("No habits yet.");
                return Ok(());
            }

            header("Habits");
            for h in habits {
                let check = if h.completed_today { "[x]" } else { "[ ]" };
                println!(
                    "{} {} {}  {:<30} streak: {}",
                    check,
                    swatch(&h.color),
                    short_id(&h.id),
                    h.title,
                    h.streak
                );
            }

            println!();
            println!(
                "This week: {}",
                render_snapshot(&weekly_snapshot(habits, date::today()))
            );
        }
    }
    Ok(())
}
