//! `add`, `edit`, `del` and `list`: calendar blocks.

use crate::cli::commands::{open_workspace, resolve_date_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{Commit, EditSession};
use crate::errors::AppResult;
use crate::models::event::CalendarEvent;
use crate::ui::messages::{confirm, header, info, success, warning};
use crate::utils::date;
use crate::utils::formatting::{short_id, truncate};
use crate::utils::table::{Column, Table};
use log::debug;

fn describe(ev: &CalendarEvent) -> String {
    format!(
        "\"{}\" on {} {}–{}",
        ev.title,
        ev.date_str(),
        ev.start_str(),
        ev.end_str()
    )
}

fn warn_if_inverted(ev: &CalendarEvent) {
    if ev.end_hour <= ev.start_hour {
        warning(format!(
            "End time {} is not after start time {}; the block is kept as entered.",
            ev.end_str(),
            ev.start_str()
        ));
    }
}

/// Apply the optional draft overrides shared by `add` and `edit`.
fn apply_overrides(
    session: &mut EditSession,
    title: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
    category: Option<&str>,
) {
    if let Some(t) = title {
        session.set_title(t);
    }
    if let Some(s) = start {
        session.set_start(s);
    }
    if let Some(e) = end {
        session.set_end(e);
    }
    if let Some(c) = category {
        session.set_category(c);
    }
}

pub fn add(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        date: date_arg,
        start,
        end,
        slot,
        category,
    } = cmd
    {
        let day = resolve_date_arg(date_arg.as_deref())?;
        let mut ws = open_workspace(cfg, day)?;

        let mut session = EditSession::new();
        match slot {
            Some(hour) => session.begin_create_at_slot(*hour)?,
            None => session.begin_create(),
        }
        session.set_category(cfg.default_category.as_str());
        apply_overrides(
            &mut session,
            Some(title),
            start.as_deref(),
            end.as_deref(),
            category.as_deref(),
        );

        match ws.state.commit_session(&mut session)? {
            Commit::Create(ev) => {
                warn_if_inverted(&ev);
                ws.storage.audit("add", &ev.id, &describe(&ev));
                success(format!("Added {} (id: {})", describe(&ev), ev.id));
            }
            other => {
                debug!("add: commit outcome {:?}", other);
                info("Nothing saved: the title is empty.");
            }
        }
    }
    Ok(())
}

pub fn edit(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        title,
        start,
        end,
        category,
    } = cmd
    {
        let mut ws = open_workspace(cfg, date::today())?;
        let target = ws.state.events().resolve_prefix(id)?.clone();

        // The block stays on its own day.
        ws.state.select_date(target.date)?;

        let mut session = EditSession::new();
        session.begin_edit(&target);
        apply_overrides(
            &mut session,
            title.as_deref(),
            start.as_deref(),
            end.as_deref(),
            category.as_deref(),
        );

        match ws.state.commit_session(&mut session)? {
            Commit::Update(ev) => {
                warn_if_inverted(&ev);
                ws.storage.audit("edit", &ev.id, &describe(&ev));
                success(format!("Updated {} (id: {})", describe(&ev), ev.id));
            }
            other => {
                debug!("edit: commit outcome {:?}", other);
                info("Nothing saved: the title is empty.");
            }
        }
    }
    Ok(())
}

pub fn del(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut ws = open_workspace(cfg, date::today())?;
        let target = ws.state.events().resolve_prefix(id)?.clone();

        if !confirm(&format!("Delete {}? This action is irreversible.", describe(&target))) {
            info("Operation cancelled.");
            return Ok(());
        }

        ws.state.remove_event(&target.id)?;
        ws.storage.audit("del", &target.id, &describe(&target));
        success(format!("Deleted {}.", describe(&target)));
    }
    Ok(())
}

pub fn list(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        date: date_arg,
        all,
    } = cmd
    {
        let day = resolve_date_arg(date_arg.as_deref())?;
        let ws = open_workspace(cfg, day)?;

        let events: Vec<&CalendarEvent> = if *all {
            ws.state.events().iter().collect()
        } else {
            ws.state.day_events(day)
        };

        if events.is_empty() {
            if *all {
                println!("No blocks saved.");
            } else {
                println!("No blocks for {}", day);
            }
            return Ok(());
        }

        if *all {
            header("All blocks");
        } else {
            header(format!("Blocks for {}", day));
        }

        let mut table = Table::new(vec![
            Column::new("ID", 8),
            Column::new("DATE", 10),
            Column::new("START", 5),
            Column::new("END", 5),
            Column::new("TITLE", 30),
            Column::new("CATEGORY", 10),
        ]);
        for ev in events {
            table.add_row(vec![
                short_id(&ev.id).to_string(),
                ev.date_str(),
                ev.start_str(),
                ev.end_str(),
                truncate(&ev.title, 30),
                ev.category.clone(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
