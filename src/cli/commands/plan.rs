use crate::cli::commands::open_workspace;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::planner::{FilePlanner, OfflinePlanner, PlanRequest, Planner, plan_or_fallback};
use crate::errors::AppResult;
use crate::models::plan::AIPlanResponse;
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::formatting::italic;
use crate::utils::table::{Column, Table};

fn render(plan: &AIPlanResponse) {
    println!("{}", italic(&format!("\"{}\"", plan.motivational_quote)));
    println!();
    header("Summary");
    println!("{}", plan.summary);
    println!();
    header("Recommended schedule");

    if plan.recommended_schedule.is_empty() {
        println!("(no schedule items)");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("TIME", 9),
        Column::new("ACTIVITY", 36),
        Column::new("CATEGORY", 12),
        Column::new("DURATION", 10),
    ]);
    for item in &plan.recommended_schedule {
        table.add_row(vec![
            item.time.clone(),
            item.activity.clone(),
            item.category.clone(),
            item.duration.clone(),
        ]);
    }
    print!("{}", table.render());
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan { dump, response } = cmd {
        let ws = open_workspace(cfg, date::today())?;
        let request = PlanRequest::new(dump, ws.state.tasks());

        if request.is_empty() {
            info("Nothing to plan: add a brain dump (--dump) or some tasks first.");
            return Ok(());
        }

        let planner: Box<dyn Planner> = match response {
            Some(path) => Box::new(FilePlanner::new(path)),
            None => Box::new(OfflinePlanner),
        };

        let plan = plan_or_fallback(planner.as_ref(), &request);
        ws.storage
            .audit("plan", "", &format!("{} schedule item(s)", plan.recommended_schedule.len()));
        render(&plan);
    }
    Ok(())
}
