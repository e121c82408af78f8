/// 팀 / 선수 서비스 통합 테스트 (인메모리 SQLite)
mod common;

use chrono::{NaiveDateTime, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use server::domain::player::dto::{
    DefensivePositionItem, OffensivePositionItem, PlayerCreateRequest, PlayerPositionsRequest,
};
use server::domain::player::entity::{offensive_position, player};
use server::domain::player::service::PlayerService;
use server::domain::position::{DefensivePosition, OffensivePosition};
use server::domain::team::dto::{TeamCreateRequest, TeamUpdateRequest};
use server::domain::team::entity::team;
use server::domain::team::service::TeamService;
use server::utils::AppError;

use common::test_state;

fn team_req(name: &str) -> TeamCreateRequest {
    TeamCreateRequest {
        name: name.to_string(),
    }
}

fn player_req(name: &str, jersey_number: Option<i32>) -> PlayerCreateRequest {
    PlayerCreateRequest {
        name: name.to_string(),
        jersey_number,
        is_goalkeeper: false,
        offensive_positions: vec![],
        defensive_positions: vec![],
    }
}

fn offensive(position: OffensivePosition, is_primary: bool) -> OffensivePositionItem {
    OffensivePositionItem {
        position,
        is_primary,
    }
}

#[tokio::test]
async fn should_create_team_and_read_it_back() {
    // Arrange
    let state = test_state().await;
    let before = Utc::now().naive_utc() - chrono::Duration::seconds(1);

    // Act
    let created = TeamService::create_team(&state, team_req("U15 Drenge"))
        .await
        .unwrap();
    let stored = team::Entity::find_by_id(created.team_id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(stored.name, "U15 Drenge");
    assert!(stored.created_at >= before);
    let listed = TeamService::list_teams(&state).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "U15 Drenge");
    assert!(NaiveDateTime::parse_from_str(&listed[0].created_at, "%Y-%m-%dT%H:%M:%S").is_ok());
}

#[tokio::test]
async fn should_reject_blank_team_name_without_storing() {
    let state = test_state().await;

    let result = TeamService::create_team(&state, team_req("   ")).await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
    assert_eq!(team::Entity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_team() {
    let state = test_state().await;

    let get = TeamService::get_team_detail(&state, 999).await;
    let update = TeamService::update_team(
        &state,
        999,
        TeamUpdateRequest {
            name: "X".to_string(),
        },
    )
    .await;

    assert!(matches!(get, Err(AppError::TeamNotFound(_))));
    assert!(matches!(update, Err(AppError::TeamNotFound(_))));
}

#[tokio::test]
async fn should_rename_team_and_bump_revalidation() {
    let state = test_state().await;
    let team = TeamService::create_team(&state, team_req("U13")).await.unwrap();
    let before = state.revalidator.generation("/hold");

    let renamed = TeamService::update_team(
        &state,
        team.team_id,
        TeamUpdateRequest {
            name: " U13 Piger ".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(renamed.name, "U13 Piger");
    assert!(state.revalidator.generation("/hold") > before);
}

#[tokio::test]
async fn should_reject_empty_player_name() {
    let state = test_state().await;
    let team = TeamService::create_team(&state, team_req("A")).await.unwrap();

    let result = PlayerService::create_player(&state, team.team_id, player_req("  ", None)).await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
    assert_eq!(player::Entity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn should_list_player_with_primary_pivot() {
    // Arrange
    let state = test_state().await;
    let team = TeamService::create_team(&state, team_req("A")).await.unwrap();
    let mut req = player_req("Jensen", Some(7));
    req.offensive_positions = vec![offensive(OffensivePosition::Pivot, true)];

    // Act
    PlayerService::create_player(&state, team.team_id, req)
        .await
        .unwrap();
    let players = PlayerService::list_players(&state, team.team_id)
        .await
        .unwrap();

    // Assert
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "Jensen");
    assert_eq!(players[0].jersey_number, Some(7));
    assert_eq!(
        players[0].offensive_positions,
        vec![offensive(OffensivePosition::Pivot, true)]
    );
    assert!(players[0].defensive_positions.is_empty());
}

#[tokio::test]
async fn should_hide_positions_for_goalkeeper() {
    let state = test_state().await;
    let team = TeamService::create_team(&state, team_req("A")).await.unwrap();
    let mut req = player_req("Målmand", Some(1));
    req.is_goalkeeper = true;
    req.offensive_positions = vec![offensive(OffensivePosition::Playmaker, false)];

    PlayerService::create_player(&state, team.team_id, req)
        .await
        .unwrap();
    let players = PlayerService::list_players(&state, team.team_id)
        .await
        .unwrap();

    assert!(players[0].is_goalkeeper);
    assert!(players[0].offensive_positions.is_empty());
}

#[tokio::test]
async fn should_order_players_by_jersey_with_unnumbered_last() {
    let state = test_state().await;
    let team = TeamService::create_team(&state, team_req("A")).await.unwrap();

    for (name, number) in [("Uden", None), ("Ti", Some(10)), ("To", Some(2))] {
        PlayerService::create_player(&state, team.team_id, player_req(name, number))
            .await
            .unwrap();
    }

    let names: Vec<String> = PlayerService::list_players(&state, team.team_id)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();

    assert_eq!(names, vec!["To", "Ti", "Uden"]);
}

#[tokio::test]
async fn should_replace_positions_and_reject_two_primaries() {
    // Arrange
    let state = test_state().await;
    let team = TeamService::create_team(&state, team_req("A")).await.unwrap();
    let mut req = player_req("Hansen", Some(9));
    req.offensive_positions = vec![offensive(OffensivePosition::LeftWing, true)];
    let player = PlayerService::create_player(&state, team.team_id, req)
        .await
        .unwrap();

    // Act
    let replaced = PlayerService::set_player_positions(
        &state,
        player.player_id,
        PlayerPositionsRequest {
            offensive_positions: vec![offensive(OffensivePosition::RightBack, false)],
            defensive_positions: vec![DefensivePositionItem {
                position: DefensivePosition::Three,
                is_primary: true,
            }],
        },
    )
    .await
    .unwrap();
    let rejected = PlayerService::set_player_positions(
        &state,
        player.player_id,
        PlayerPositionsRequest {
            offensive_positions: vec![
                offensive(OffensivePosition::LeftWing, true),
                offensive(OffensivePosition::RightWing, true),
            ],
            defensive_positions: vec![],
        },
    )
    .await;

    // Assert
    assert_eq!(
        replaced.offensive_positions,
        vec![offensive(OffensivePosition::RightBack, false)]
    );
    assert_eq!(replaced.defensive_positions.len(), 1);
    assert!(matches!(rejected, Err(AppError::ValidationError(_))));
    let stored = PlayerService::get_player(&state, player.player_id)
        .await
        .unwrap();
    assert_eq!(
        stored.offensive_positions,
        vec![offensive(OffensivePosition::RightBack, false)]
    );
}

#[tokio::test]
async fn should_cascade_team_delete_to_players_and_positions() {
    // Arrange
    let state = test_state().await;
    let team = TeamService::create_team(&state, team_req("A")).await.unwrap();
    let mut req = player_req("Jensen", Some(7));
    req.offensive_positions = vec![offensive(OffensivePosition::Pivot, true)];
    PlayerService::create_player(&state, team.team_id, req)
        .await
        .unwrap();

    // Act
    TeamService::delete_team(&state, team.team_id).await.unwrap();

    // Assert
    assert_eq!(player::Entity::find().count(&state.db).await.unwrap(), 0);
    assert_eq!(
        offensive_position::Entity::find()
            .count(&state.db)
            .await
            .unwrap(),
        0
    );
    assert!(matches!(
        TeamService::delete_team(&state, team.team_id).await,
        Err(AppError::TeamNotFound(_))
    ));
}
