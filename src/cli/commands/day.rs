//! `day`, `week` and `watch`: views over one selected date.

use crate::cli::commands::{open_workspace, resolve_date_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::projector::count_for_date;
use crate::core::ticker::NowTicker;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::ui::timeline::{render_day, render_now};
use crate::utils::date::{self, short_weekday, week_strip};
use chrono::{Datelike, Local};
use std::io::{self, BufRead};

pub fn day(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date: date_arg } = cmd {
        let selected = resolve_date_arg(date_arg.as_deref())?;
        let ws = open_workspace(cfg, selected)?;
        let layout = cfg.layout();

        let day_events = ws.state.day_events(selected);
        let rows = layout.layout_day(&day_events);
        let now = layout.now_indicator(Local::now().naive_local(), selected);

        header(format!("{} {}", selected.format("%A"), selected));
        print!("{}", render_day(&rows, now, &layout));

        let shown: usize = rows.iter().map(|r| r.blocks.len()).sum();
        println!("{} block(s)", day_events.len());
        if shown < day_events.len() {
            info(format!(
                "{} block(s) start outside the visible hours ({}:00–{}:59)",
                day_events.len() - shown,
                layout.first_hour,
                layout.last_hour
            ));
        }
    }
    Ok(())
}

pub fn week(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { date: date_arg } = cmd {
        let selected = resolve_date_arg(date_arg.as_deref())?;
        let ws = open_workspace(cfg, selected)?;
        let today = date::today();

        header(format!("Week around {}", selected));
        for d in week_strip(selected) {
            let marker = if d == selected {
                "▶"
            } else if d == today {
                "•"
            } else {
                " "
            };
            println!(
                "{} {} {:>2}  {} block(s)  ({})",
                marker,
                short_weekday(&d),
                d.day(),
                count_for_date(ws.state.events(), d),
                d
            );
        }
    }
    Ok(())
}

pub fn watch(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { date: date_arg } = cmd {
        let selected = resolve_date_arg(date_arg.as_deref())?;
        let layout = cfg.layout();

        info(format!("Watching {}. Press Enter to stop.", selected));

        let mut ticker = NowTicker::new(layout, cfg.tick_interval(), move |pos| {
            println!("{}", render_now(pos, &layout));
        });
        ticker.watch(selected);

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;

        ticker.cancel();
        info("Stopped.");
    }
    Ok(())
}
