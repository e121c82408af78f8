/// 훈련 / 공동 훈련 / 출석 서비스 통합 테스트 (인메모리 SQLite)
mod common;

use axum::http::StatusCode;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use server::domain::player::dto::{
    DefensivePositionItem, OffensivePositionItem, PlayerCreateRequest,
};
use server::domain::player::entity::{defensive_position, offensive_position};
use server::domain::player::service::PlayerService;
use server::domain::team::dto::TeamCreateRequest;
use server::domain::team::service::TeamService;
use server::domain::training::dto::{
    AttendanceEntry, EnrollTeamRequest, RecordAttendanceRequest, SharedTrainingCreateRequest,
    TrainingCreateRequest,
};
use server::domain::position::{DefensivePosition, OffensivePosition};
use server::domain::training::entity::{training, training_attendance, training_team};
use server::domain::training::service::TrainingService;
use server::utils::AppError;
use server::AppState;

use common::test_state;

async fn create_team(state: &AppState, name: &str) -> i64 {
    TeamService::create_team(
        state,
        TeamCreateRequest {
            name: name.to_string(),
        },
    )
    .await
    .unwrap()
    .team_id
}

async fn create_player(state: &AppState, team_id: i64, name: &str) -> i64 {
    PlayerService::create_player(
        state,
        team_id,
        PlayerCreateRequest {
            name: name.to_string(),
            jersey_number: None,
            is_goalkeeper: false,
            offensive_positions: vec![],
            defensive_positions: vec![],
        },
    )
    .await
    .unwrap()
    .player_id
}

fn shared_req(name: &str, date: &str, team_ids: Vec<i64>) -> SharedTrainingCreateRequest {
    SharedTrainingCreateRequest {
        name: name.to_string(),
        description: None,
        date: date.to_string(),
        team_ids,
    }
}

fn solo_req(name: &str, date: &str) -> TrainingCreateRequest {
    TrainingCreateRequest {
        name: name.to_string(),
        description: Some("  ".to_string()),
        date: date.to_string(),
    }
}

#[tokio::test]
async fn shared_training_without_teams_should_have_zero_count() {
    let state = test_state().await;

    TrainingService::create_shared_training(&state, shared_req("Fælles", "2026-03-01", vec![]))
        .await
        .unwrap();
    let listed = TrainingService::list_shared_trainings(&state).await.unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].hold_count, 0);
    assert!(listed[0].team_names.is_empty());
}

#[tokio::test]
async fn hold_count_should_match_link_rows_and_names() {
    // Arrange
    let state = test_state().await;
    let a = create_team(&state, "U15 Drenge").await;
    let b = create_team(&state, "U13 Piger").await;

    // Act (중복 팀 ID는 한 번만 연결)
    let created = TrainingService::create_shared_training(
        &state,
        shared_req("Stævne", "2026-04-12", vec![a, b, a]),
    )
    .await
    .unwrap();
    let listed = TrainingService::list_shared_trainings(&state).await.unwrap();
    let links = training_team::Entity::find()
        .filter(training_team::Column::TrainingId.eq(created.training_id))
        .count(&state.db)
        .await
        .unwrap();

    // Assert
    assert!(created.is_shared);
    assert_eq!(created.team_id, None);
    assert_eq!(listed[0].hold_count, 2);
    assert_eq!(listed[0].hold_count as u64, links);
    assert_eq!(listed[0].team_names, vec!["U13 Piger", "U15 Drenge"]);
}

#[tokio::test]
async fn shared_listing_should_be_ordered_by_date_descending() {
    let state = test_state().await;

    for (name, date) in [("Maj", "2026-05-01"), ("Juni", "2026-06-01"), ("April", "2026-04-01")] {
        TrainingService::create_shared_training(&state, shared_req(name, date, vec![]))
            .await
            .unwrap();
    }

    let names: Vec<String> = TrainingService::list_shared_trainings(&state)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();

    assert_eq!(names, vec!["Juni", "Maj", "April"]);
}

#[tokio::test]
async fn shared_listing_should_exclude_solo_trainings() {
    let state = test_state().await;
    let team_id = create_team(&state, "A").await;

    TrainingService::create_training(&state, team_id, solo_req("Solo", "2026-02-02"))
        .await
        .unwrap();

    assert!(TrainingService::list_shared_trainings(&state)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn create_shared_training_should_fail_for_unknown_team() {
    let state = test_state().await;

    let result =
        TrainingService::create_shared_training(&state, shared_req("X", "2026-01-01", vec![42]))
            .await;

    assert!(matches!(result, Err(AppError::TeamNotFound(_))));
    assert_eq!(training::Entity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn create_training_should_reject_bad_date() {
    let state = test_state().await;
    let team_id = create_team(&state, "A").await;

    let result = TrainingService::create_training(&state, team_id, solo_req("X", "01-02-2026")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[tokio::test]
async fn enroll_team_should_add_link_and_reject_duplicates() {
    // Arrange
    let state = test_state().await;
    let a = create_team(&state, "A").await;
    let shared =
        TrainingService::create_shared_training(&state, shared_req("F", "2026-03-03", vec![]))
            .await
            .unwrap();
    let solo = TrainingService::create_training(&state, a, solo_req("S", "2026-03-04"))
        .await
        .unwrap();

    // Act
    let enrolled =
        TrainingService::enroll_team(&state, shared.training_id, EnrollTeamRequest { team_id: a })
            .await
            .unwrap();
    let duplicate =
        TrainingService::enroll_team(&state, shared.training_id, EnrollTeamRequest { team_id: a })
            .await;
    let into_solo =
        TrainingService::enroll_team(&state, solo.training_id, EnrollTeamRequest { team_id: a })
            .await;

    // Assert
    assert_eq!(enrolled.hold_count, 1);
    assert_eq!(enrolled.team_names, vec!["A"]);
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));
    assert!(matches!(into_solo, Err(AppError::BadRequest(_))));
}

#[tokio::test]
async fn team_trainings_should_include_enrolled_shared_trainings() {
    let state = test_state().await;
    let a = create_team(&state, "A").await;
    let b = create_team(&state, "B").await;

    TrainingService::create_training(&state, a, solo_req("Solo A", "2026-01-10"))
        .await
        .unwrap();
    TrainingService::create_training(&state, b, solo_req("Solo B", "2026-01-11"))
        .await
        .unwrap();
    TrainingService::create_shared_training(&state, shared_req("Fælles", "2026-01-12", vec![a, b]))
        .await
        .unwrap();

    let names: Vec<String> = TrainingService::list_team_trainings(&state, a)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();

    assert_eq!(names, vec!["Fælles", "Solo A"]);
}

#[tokio::test]
async fn delete_training_should_remove_links_and_report_success() {
    // Arrange
    let state = test_state().await;
    let a = create_team(&state, "A").await;
    let shared =
        TrainingService::create_shared_training(&state, shared_req("F", "2026-03-03", vec![a]))
            .await
            .unwrap();
    let before = state.revalidator.generation("/faelles-traening");

    // Act
    let result = TrainingService::delete_training(&state, shared.training_id).await;

    // Assert
    assert!(result.success);
    assert_eq!(result.status(), StatusCode::OK);
    assert_eq!(training_team::Entity::find().count(&state.db).await.unwrap(), 0);
    assert!(state.revalidator.generation("/faelles-traening") > before);
    assert!(state.revalidator.generation("/traening") > 0);
}

#[tokio::test]
async fn delete_unknown_training_should_return_failure_value() {
    let state = test_state().await;

    let result = TrainingService::delete_training(&state, 123).await;

    assert!(!result.success);
    assert_eq!(result.status(), StatusCode::NOT_FOUND);
    assert!(!result.message.is_empty());
}

#[tokio::test]
async fn attendance_should_upsert_and_reject_outsiders() {
    // Arrange
    let state = test_state().await;
    let a = create_team(&state, "A").await;
    let b = create_team(&state, "B").await;
    let jensen = create_player(&state, a, "Jensen").await;
    let outsider = create_player(&state, b, "Udenfor").await;
    let training = TrainingService::create_training(&state, a, solo_req("T", "2026-05-05"))
        .await
        .unwrap();

    // Act
    TrainingService::record_attendance(
        &state,
        training.training_id,
        RecordAttendanceRequest {
            entries: vec![AttendanceEntry {
                player_id: jensen,
                present: true,
            }],
        },
    )
    .await
    .unwrap();
    let updated = TrainingService::record_attendance(
        &state,
        training.training_id,
        RecordAttendanceRequest {
            entries: vec![AttendanceEntry {
                player_id: jensen,
                present: false,
            }],
        },
    )
    .await
    .unwrap();
    let rejected = TrainingService::record_attendance(
        &state,
        training.training_id,
        RecordAttendanceRequest {
            entries: vec![AttendanceEntry {
                player_id: outsider,
                present: true,
            }],
        },
    )
    .await;

    // Assert
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].player_name, "Jensen");
    assert!(!updated[0].present);
    assert!(matches!(rejected, Err(AppError::BadRequest(_))));
}

#[tokio::test]
async fn deleting_enrolled_team_should_leave_other_teams_on_shared_training() {
    // Arrange
    let state = test_state().await;
    let a = create_team(&state, "A").await;
    let b = create_team(&state, "B").await;
    let created =
        TrainingService::create_shared_training(&state, shared_req("Fælles", "2026-06-01", vec![a, b]))
            .await
            .unwrap();

    // Act
    TeamService::delete_team(&state, a).await.unwrap();

    // Assert
    let links = training_team::Entity::find()
        .filter(training_team::Column::TrainingId.eq(created.training_id))
        .all(&state.db)
        .await
        .unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].team_id, b);

    let listed = TrainingService::list_shared_trainings(&state).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].hold_count, 1);
    assert_eq!(listed[0].team_names, vec!["B"]);
}

#[tokio::test]
async fn deleting_player_should_remove_positions_and_attendance() {
    // Arrange
    let state = test_state().await;
    let team = create_team(&state, "A").await;
    let player = PlayerService::create_player(
        &state,
        team,
        PlayerCreateRequest {
            name: "Jensen".to_string(),
            jersey_number: Some(9),
            is_goalkeeper: false,
            offensive_positions: vec![OffensivePositionItem {
                position: OffensivePosition::Pivot,
                is_primary: true,
            }],
            defensive_positions: vec![DefensivePositionItem {
                position: DefensivePosition::Three,
                is_primary: false,
            }],
        },
    )
    .await
    .unwrap()
    .player_id;
    let teammate = create_player(&state, team, "Holm").await;
    let training = TrainingService::create_training(&state, team, solo_req("T", "2026-06-02"))
        .await
        .unwrap();
    TrainingService::record_attendance(
        &state,
        training.training_id,
        RecordAttendanceRequest {
            entries: vec![
                AttendanceEntry {
                    player_id: player,
                    present: true,
                },
                AttendanceEntry {
                    player_id: teammate,
                    present: true,
                },
            ],
        },
    )
    .await
    .unwrap();

    // Act
    PlayerService::delete_player(&state, player).await.unwrap();
    let again = PlayerService::delete_player(&state, player).await;

    // Assert
    assert_eq!(
        offensive_position::Entity::find()
            .filter(offensive_position::Column::PlayerId.eq(player))
            .count(&state.db)
            .await
            .unwrap(),
        0
    );
    assert_eq!(
        defensive_position::Entity::find()
            .filter(defensive_position::Column::PlayerId.eq(player))
            .count(&state.db)
            .await
            .unwrap(),
        0
    );
    let attendance = training_attendance::Entity::find()
        .filter(training_attendance::Column::TrainingId.eq(training.training_id))
        .all(&state.db)
        .await
        .unwrap();
    assert_eq!(attendance.len(), 1);
    assert_eq!(attendance[0].player_id, teammate);
    assert!(matches!(again, Err(AppError::PlayerNotFound(_))));
}
