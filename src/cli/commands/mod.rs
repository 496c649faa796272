//! Handlers behind each CLI subcommand.

pub mod config;
pub mod day;
pub mod event;
pub mod export;
pub mod habit;
pub mod init;
pub mod log;
pub mod plan;
pub mod reset;
pub mod task;

use crate::config::Config;
use crate::core::state::AppState;
use crate::db::KvStore;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;
use std::rc::Rc;

/// Loaded state wired to its storage: every committed change is written
/// back through a state listener.
pub(crate) struct Workspace {
    pub storage: Rc<KvStore>,
    pub state: AppState,
}

pub(crate) fn open_workspace(cfg: &Config, selected: NaiveDate) -> AppResult<Workspace> {
    let storage = Rc::new(KvStore::open(&cfg.database)?);
    let data = storage.load_data()?;

    let mut state = AppState::new(data, selected);
    let sink = Rc::clone(&storage);
    state.subscribe(move |change, data| sink.persist(change, data));

    Ok(Workspace { storage, state })
}

/// `--date` argument, defaulting to today.
pub(crate) fn resolve_date_arg(arg: Option<&str>) -> AppResult<NaiveDate> {
    date::resolve_date(arg).ok_or_else(|| AppError::InvalidDate(arg.unwrap_or_default().into()))
}
