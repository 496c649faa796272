use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{id_from_output, init_test_db, zp};

#[test]
fn test_task_add_toggle_list() {
    let db_path = init_test_db("cli_tasks");

    zp().args(["--db", &db_path, "task", "add", "Email Bob", "--category", "work"])
        .assert()
        .success();
    let out = zp()
        .args(["--db", &db_path, "task", "add", "Buy milk"])
        .output()
        .unwrap();
    let milk = id_from_output(&out.stdout);

    zp().args(["--db", &db_path, "task", "toggle", &milk[..8]])
        .assert()
        .success()
        .stdout(contains("marked done"));

    zp().args(["--db", &db_path, "task", "list"])
        .assert()
        .success()
        .stdout(
            contains("[x]")
                .and(contains("Email Bob"))
                .and(contains("personal"))
                .and(contains("(1/2 done)")),
        );
}

#[test]
fn test_task_blank_title_is_ignored() {
    let db_path = init_test_db("cli_tasks_blank");

    zp().args(["--db", &db_path, "task", "add", "  "])
        .assert()
        .success()
        .stdout(contains("Nothing added"));

    zp().args(["--db", &db_path, "task", "list"])
        .assert()
        .success()
        .stdout(contains("No tasks yet."));
}

#[test]
fn test_task_toggle_unknown_fails() {
    let db_path = init_test_db("cli_tasks_unknown");

    zp().args(["--db", &db_path, "task", "toggle", "nope"])
        .assert()
        .failure()
        .stderr(contains("No task matches id 'nope'"));
}

#[test]
fn test_habit_streaks() {
    let db_path = init_test_db("cli_habits");

    let out = zp()
        .args(["--db", &db_path, "habit", "add", "Meditate", "--color", "#4338ca"])
        .output()
        .unwrap();
    let id = id_from_output(&out.stdout);

    zp().args(["--db", &db_path, "habit", "toggle", &id])
        .assert()
        .success()
        .stdout(contains("done today, streak 1"));

    zp().args(["--db", &db_path, "habit", "list"])
        .assert()
        .success()
        .stdout(
            contains("Meditate")
                .and(contains("streak: 1"))
                .and(contains("This week:"))
                .and(contains("*]")),
        );

    zp().args(["--db", &db_path, "habit", "toggle", &id])
        .assert()
        .success()
        .stdout(contains("undone, streak 0"));

    zp().args(["--db", &db_path, "habit", "list"])
        .assert()
        .success()
        .stdout(contains("This week:").and(contains("*]").not()));
}

#[test]
fn test_habit_invalid_color_fails() {
    let db_path = init_test_db("cli_habits_color");

    zp().args(["--db", &db_path, "habit", "add", "Run", "--color", "green"])
        .assert()
        .failure()
        .stderr(contains("Invalid color 'green'"));
}

#[test]
fn test_habit_delete_with_confirmation() {
    let db_path = init_test_db("cli_habits_del");

    let out = zp()
        .args(["--db", &db_path, "habit", "add", "Journal"])
        .output()
        .unwrap();
    let id = id_from_output(&out.stdout);

    zp().args(["--db", &db_path, "habit", "del", &id])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("deleted"));

    zp().args(["--db", &db_path, "habit", "list"])
        .assert()
        .success()
        .stdout(contains("No habits yet."));
}

#[test]
fn test_reset_clears_everything() {
    let db_path = init_test_db("cli_reset");
    zp().args(["--db", &db_path, "task", "add", "Something"])
        .assert()
        .success();
    zp().args(["--db", &db_path, "add", "--title", "Block", "--date", "2026-10-16"])
        .assert()
        .success();

    zp().args(["--db", &db_path, "reset"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    zp().args(["--db", &db_path, "reset"])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(contains("All data cleared."));

    zp().args(["--db", &db_path, "task", "list"])
        .assert()
        .success()
        .stdout(contains("No tasks yet."));
    zp().args(["--db", &db_path, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("No blocks saved."));
}

#[test]
fn test_plan_without_response_uses_fallback() {
    let db_path = init_test_db("cli_plan_fallback");

    zp().args(["--db", &db_path, "plan", "--dump", "too much to do"])
        .assert()
        .success()
        .stdout(
            contains("Order is the key to clarity.")
                .and(contains("Review your current priorities")),
        );
}

#[test]
fn test_plan_with_nothing_to_send() {
    let db_path = init_test_db("cli_plan_empty");

    zp().args(["--db", &db_path, "plan"])
        .assert()
        .success()
        .stdout(contains("Nothing to plan"));
}
