use crate::cli::commands::open_workspace;
use crate::cli::parser::{Commands, TaskAction};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success};
use crate::utils::date;
use crate::utils::formatting::{dim, progress_bar, short_id};
use crate::utils::ids::resolve_by_prefix;

const RESET: &str = "\x1b[0m";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Task { action } = cmd else {
        return Ok(());
    };
    let mut ws = open_workspace(cfg, date::today())?;

    match action {
        TaskAction::Add { title, category } => {
            let title = title.trim();
            if title.is_empty() {
                info("Nothing added: the title is empty.");
                return Ok(());
            }
            let task = ws.state.add_task(title, *category)?;
            ws.storage.audit("task_add", &task.id, &task.title);
            success(format!("Task \"{}\" added (id: {})", task.title, task.id));
        }

        TaskAction::Toggle { id } => {
            let target = resolve_by_prefix(
                ws.state.tasks(),
                id,
                |t| t.id.as_str(),
                AppError::TaskNotFound,
            )?
            .clone();
            ws.state.toggle_task(&target.id)?;

            let state = if target.completed { "open" } else { "done" };
            ws.storage.audit("task_toggle", &target.id, state);
            success(format!("Task \"{}\" marked {}.", target.title, state));
        }

        TaskAction::List => {
            let tasks = ws.state.tasks();
            if tasks.is_empty() {
                println!("No tasks yet.");
                return Ok(());
            }

            header("Tasks");
            for t in tasks {
                let check = if t.completed { "[x]" } else { "[ ]" };
                let title = if t.completed {
                    dim(&t.title)
                } else {
                    t.title.clone()
                };
                println!(
                    "{} {}  {}{:<8}{}  {}",
                    check,
                    short_id(&t.id),
                    t.category.color(),
                    t.category.as_str(),
                    RESET,
                    title
                );
            }

            let progress = ws.state.completion();
            println!();
            println!(
                "{} {:>3.0}%  ({}/{} done)",
                progress_bar(progress.percent, 20),
                progress.percent,
                progress.completed,
                progress.total
            );
            if progress.is_complete() {
                success("Everything is done for today.");
            }
        }
    }
    Ok(())
}
