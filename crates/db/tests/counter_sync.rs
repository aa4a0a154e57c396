//! Integration tests for counter maintenance on task CRUD.
//!
//! Exercises the repository layer against a real database:
//! - Counter deltas on create / status change / reassign / delete
//! - Agreement between the counter columns and the read-side aggregation
//! - No-op behaviour for unknown project keys

use fabtrack_core::category::{CounterKind, TaskCategory};
use fabtrack_db::models::project::CreateProject;
use fabtrack_db::models::task::{CreateTask, UpdateTask};
use fabtrack_db::repositories::{CompletionRepo, CounterRepo, ProjectRepo, TaskRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(project_no: &str) -> CreateProject {
    CreateProject {
        project_no: project_no.to_string(),
        customer: None,
        remarks: None,
        start_date: None,
        due_date: None,
        status: None,
    }
}

fn new_task(project_no: &str, title: &str, status: Option<&str>) -> CreateTask {
    CreateTask {
        project_no: project_no.to_string(),
        title: title.to_string(),
        description: None,
        priority: None,
        status: status.map(str::to_string),
        due_date: None,
        approve_status: None,
    }
}

fn status_patch(status: &str) -> UpdateTask {
    UpdateTask {
        status: Some(status.to_string()),
        ..UpdateTask::default()
    }
}

/// Fetch one project's counter pair for a category.
async fn counters(pool: &PgPool, project_no: &str, category: TaskCategory) -> (i32, i32) {
    let project = ProjectRepo::find_by_project_no(pool, project_no)
        .await
        .unwrap()
        .expect("project must exist");
    (
        project.counter(category, CounterKind::Total),
        project.counter(category, CounterKind::Completed),
    )
}

/// Assert the counter columns agree with a fresh aggregation over the
/// task tables, for every category of one project.
async fn assert_counters_match_aggregate(pool: &PgPool, project_no: &str) {
    let project = ProjectRepo::find_by_project_no(pool, project_no)
        .await
        .unwrap()
        .expect("project must exist");
    let report = CompletionRepo::calculate(pool, project_no).await.unwrap();

    for category in TaskCategory::ALL {
        let aggregated = report.category(category);
        assert_eq!(
            project.counter(category, CounterKind::Total) as i64,
            aggregated.total,
            "total counter drifted for {}",
            category.key()
        );
        assert_eq!(
            project.counter(category, CounterKind::Completed) as i64,
            aggregated.completed,
            "completed counter drifted for {}",
            category.key()
        );
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_pending_task_bumps_total_only(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("J-100")).await.unwrap();

    TaskRepo::create(&pool, TaskCategory::Panel, &new_task("J-100", "Cut panel A", None))
        .await
        .unwrap();

    assert_eq!(counters(&pool, "J-100", TaskCategory::Panel).await, (1, 0));
    assert_counters_match_aggregate(&pool, "J-100").await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_completed_task_bumps_both(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("J-101")).await.unwrap();

    TaskRepo::create(
        &pool,
        TaskCategory::Panel,
        &new_task("J-101", "Pre-cut panel", Some("Completed")),
    )
    .await
    .unwrap();

    assert_eq!(counters(&pool, "J-101", TaskCategory::Panel).await, (1, 1));
    assert_counters_match_aggregate(&pool, "J-101").await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn done_status_counts_as_completed(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("J-102")).await.unwrap();

    TaskRepo::create(
        &pool,
        TaskCategory::Door,
        &new_task("J-102", "Hang door", Some("Done")),
    )
    .await
    .unwrap();

    assert_eq!(counters(&pool, "J-102", TaskCategory::Door).await, (1, 1));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_touches_only_its_category(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("J-103")).await.unwrap();

    TaskRepo::create(&pool, TaskCategory::Door, &new_task("J-103", "Fit frame", None))
        .await
        .unwrap();

    assert_eq!(counters(&pool, "J-103", TaskCategory::Door).await, (1, 0));
    assert_eq!(counters(&pool, "J-103", TaskCategory::Panel).await, (0, 0));
    assert_eq!(counters(&pool, "J-103", TaskCategory::StripCurtain).await, (0, 0));
}

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_transition_moves_completed_counter(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("J-110")).await.unwrap();
    let task = TaskRepo::create(
        &pool,
        TaskCategory::Cutting,
        &new_task("J-110", "Cut profiles", None),
    )
    .await
    .unwrap();

    // pending -> Completed: completed += 1, total unchanged.
    TaskRepo::update(&pool, TaskCategory::Cutting, task.id, &status_patch("Completed"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(counters(&pool, "J-110", TaskCategory::Cutting).await, (1, 1));

    // Completed -> pending: completed -= 1.
    TaskRepo::update(&pool, TaskCategory::Cutting, task.id, &status_patch("pending"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(counters(&pool, "J-110", TaskCategory::Cutting).await, (1, 0));
    assert_counters_match_aggregate(&pool, "J-110").await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_without_status_change_leaves_counters(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("J-111")).await.unwrap();
    let task = TaskRepo::create(
        &pool,
        TaskCategory::Accessories,
        &new_task("J-111", "Order handles", Some("Completed")),
    )
    .await
    .unwrap();

    let patch = UpdateTask {
        title: Some("Order handles and hinges".to_string()),
        ..UpdateTask::default()
    };
    TaskRepo::update(&pool, TaskCategory::Accessories, task.id, &patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(counters(&pool, "J-111", TaskCategory::Accessories).await, (1, 1));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn completed_to_completed_is_not_double_counted(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("J-112")).await.unwrap();
    let task = TaskRepo::create(
        &pool,
        TaskCategory::Panel,
        &new_task("J-112", "Weld frame", Some("completed")),
    )
    .await
    .unwrap();

    // Different spelling, same classification: no counter movement.
    TaskRepo::update(&pool, TaskCategory::Panel, task.id, &status_patch("Done"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(counters(&pool, "J-112", TaskCategory::Panel).await, (1, 1));
}

// ---------------------------------------------------------------------------
// Cross-project reassignment
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn reassigning_completed_task_moves_both_counters(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("J-120A")).await.unwrap();
    ProjectRepo::create(&pool, &new_project("J-120B")).await.unwrap();
    let task = TaskRepo::create(
        &pool,
        TaskCategory::System,
        &new_task("J-120A", "Install rails", Some("Completed")),
    )
    .await
    .unwrap();

    let patch = UpdateTask {
        project_no: Some("J-120B".to_string()),
        ..UpdateTask::default()
    };
    TaskRepo::update(&pool, TaskCategory::System, task.id, &patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(counters(&pool, "J-120A", TaskCategory::System).await, (0, 0));
    assert_eq!(counters(&pool, "J-120B", TaskCategory::System).await, (1, 1));
    assert_counters_match_aggregate(&pool, "J-120A").await;
    assert_counters_match_aggregate(&pool, "J-120B").await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reassignment_with_status_change_applies_new_status_to_target(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("J-121A")).await.unwrap();
    ProjectRepo::create(&pool, &new_project("J-121B")).await.unwrap();
    let task = TaskRepo::create(
        &pool,
        TaskCategory::Quotation,
        &new_task("J-121A", "Quote revision", None),
    )
    .await
    .unwrap();

    // Move and complete in one patch: source loses a pending row, target
    // gains a completed one.
    let patch = UpdateTask {
        project_no: Some("J-121B".to_string()),
        status: Some("Completed".to_string()),
        ..UpdateTask::default()
    };
    TaskRepo::update(&pool, TaskCategory::Quotation, task.id, &patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(counters(&pool, "J-121A", TaskCategory::Quotation).await, (0, 0));
    assert_eq!(counters(&pool, "J-121B", TaskCategory::Quotation).await, (1, 1));
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_completed_task_drops_both_counters(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("J-130")).await.unwrap();
    let task = TaskRepo::create(
        &pool,
        TaskCategory::Transportation,
        &new_task("J-130", "Deliver batch", Some("Completed")),
    )
    .await
    .unwrap();

    let deleted = TaskRepo::delete(&pool, TaskCategory::Transportation, task.id)
        .await
        .unwrap();
    assert!(deleted);

    assert_eq!(counters(&pool, "J-130", TaskCategory::Transportation).await, (0, 0));
    assert_counters_match_aggregate(&pool, "J-130").await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_pending_task_drops_total_only(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("J-131")).await.unwrap();
    let keep = TaskRepo::create(
        &pool,
        TaskCategory::Panel,
        &new_task("J-131", "Keep me", Some("Completed")),
    )
    .await
    .unwrap();
    let task = TaskRepo::create(&pool, TaskCategory::Panel, &new_task("J-131", "Drop me", None))
        .await
        .unwrap();

    TaskRepo::delete(&pool, TaskCategory::Panel, task.id).await.unwrap();

    assert_eq!(counters(&pool, "J-131", TaskCategory::Panel).await, (1, 1));
    assert!(TaskRepo::find_by_id(&pool, TaskCategory::Panel, keep.id)
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_unknown_task_is_a_no_op(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("J-132")).await.unwrap();

    let deleted = TaskRepo::delete(&pool, TaskCategory::Panel, 999_999).await.unwrap();
    assert!(!deleted);
    assert_eq!(counters(&pool, "J-132", TaskCategory::Panel).await, (0, 0));
}

// ---------------------------------------------------------------------------
// Counter updater edge cases
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn adjust_on_unknown_project_is_a_silent_no_op(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("J-140")).await.unwrap();

    let applied = CounterRepo::adjust(
        &pool,
        "NO-SUCH-PROJECT",
        TaskCategory::Panel,
        CounterKind::Total,
        1,
    )
    .await
    .unwrap();
    assert!(!applied);

    // The one existing project is untouched.
    assert_eq!(counters(&pool, "J-140", TaskCategory::Panel).await, (0, 0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn task_for_unknown_project_still_creates(pool: PgPool) {
    // Counter maintenance is non-fatal: the row lands even though no
    // project row absorbs the delta.
    let task = TaskRepo::create(
        &pool,
        TaskCategory::Panel,
        &new_task("GHOST-1", "Orphan task", None),
    )
    .await
    .unwrap();

    assert_eq!(task.project_no, "GHOST-1");
    assert!(TaskRepo::find_by_id(&pool, TaskCategory::Panel, task.id)
        .await
        .unwrap()
        .is_some());
}

// ---------------------------------------------------------------------------
// Invariant across a mixed operation sequence
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn counters_track_rows_through_a_mixed_sequence(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("J-150")).await.unwrap();

    let a = TaskRepo::create(&pool, TaskCategory::Panel, &new_task("J-150", "A", None))
        .await
        .unwrap();
    assert_counters_match_aggregate(&pool, "J-150").await;

    let b = TaskRepo::create(
        &pool,
        TaskCategory::Panel,
        &new_task("J-150", "B", Some("Completed")),
    )
    .await
    .unwrap();
    assert_counters_match_aggregate(&pool, "J-150").await;

    TaskRepo::update(&pool, TaskCategory::Panel, a.id, &status_patch("Done"))
        .await
        .unwrap()
        .unwrap();
    assert_counters_match_aggregate(&pool, "J-150").await;

    TaskRepo::delete(&pool, TaskCategory::Panel, b.id).await.unwrap();
    assert_counters_match_aggregate(&pool, "J-150").await;

    TaskRepo::update(&pool, TaskCategory::Panel, a.id, &status_patch("in_progress"))
        .await
        .unwrap()
        .unwrap();
    assert_counters_match_aggregate(&pool, "J-150").await;

    assert_eq!(counters(&pool, "J-150", TaskCategory::Panel).await, (1, 0));
}
