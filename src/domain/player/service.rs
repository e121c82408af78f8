use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::info;

use super::dto::{
    DefensivePositionItem, DeletePlayerResponse, OffensivePositionItem, PlayerCreateRequest,
    PlayerPositionsRequest, PlayerResponse, PlayerUpdateRequest,
};
use super::entity::{defensive_position, offensive_position, player};
use crate::domain::team::service::TeamService;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::format::format_datetime;
use crate::utils::validation::require_name;

pub struct PlayerService;

impl PlayerService {
    /// 팀의 선수 목록 조회 (팀이 없으면 TeamNotFound)
    pub async fn list_players(
        state: &AppState,
        team_id: i64,
    ) -> Result<Vec<PlayerResponse>, AppError> {
        TeamService::find_team(state, team_id).await?;
        Self::players_with_positions(state, team_id).await
    }

    /// 선수 + 공격/수비 포지션 목록
    ///
    /// 포지션은 테이블별 단일 배치 쿼리(`player_id IN (...)`)로 가져와 메모리에서 선수별로 묶습니다.
    pub async fn players_with_positions(
        state: &AppState,
        team_id: i64,
    ) -> Result<Vec<PlayerResponse>, AppError> {
        // 1. 선수 조회
        let players = player::Entity::find()
            .filter(player::Column::TeamId.eq(team_id))
            .order_by_asc(player::Column::Name)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        if players.is_empty() {
            return Ok(vec![]);
        }

        let player_ids: Vec<i64> = players.iter().map(|p| p.player_id).collect();

        // 2. 포지션 배치 조회
        let offensive = offensive_position::Entity::find()
            .filter(offensive_position::Column::PlayerId.is_in(player_ids.clone()))
            .order_by_asc(offensive_position::Column::PlayerOffensivePositionId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let defensive = defensive_position::Entity::find()
            .filter(defensive_position::Column::PlayerId.is_in(player_ids))
            .order_by_asc(defensive_position::Column::PlayerDefensivePositionId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        // 3. 선수별 조립
        Ok(assemble_players(players, offensive, defensive))
    }

    pub async fn find_player(state: &AppState, player_id: i64) -> Result<player::Model, AppError> {
        player::Entity::find_by_id(player_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| AppError::PlayerNotFound("Spilleren blev ikke fundet.".to_string()))
    }

    /// 단일 선수 응답 (포지션 포함)
    pub async fn get_player(state: &AppState, player_id: i64) -> Result<PlayerResponse, AppError> {
        let model = Self::find_player(state, player_id).await?;

        let offensive = offensive_position::Entity::find()
            .filter(offensive_position::Column::PlayerId.eq(player_id))
            .order_by_asc(offensive_position::Column::PlayerOffensivePositionId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let defensive = defensive_position::Entity::find()
            .filter(defensive_position::Column::PlayerId.eq(player_id))
            .order_by_asc(defensive_position::Column::PlayerDefensivePositionId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        assemble_players(vec![model], offensive, defensive)
            .pop()
            .ok_or_else(|| AppError::InternalError("player assembly returned nothing".to_string()))
    }

    /// 선수 생성
    pub async fn create_player(
        state: &AppState,
        team_id: i64,
        req: PlayerCreateRequest,
    ) -> Result<PlayerResponse, AppError> {
        // 1. 입력 검증 (DB 호출 전)
        let name = require_name(&req.name, "Navn")?;
        validate_offensive(&req.offensive_positions)?;
        validate_defensive(&req.defensive_positions)?;

        // 2. 팀 존재 여부 확인
        TeamService::find_team(state, team_id).await?;

        // 3. 트랜잭션: 선수 + 포지션
        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let model = player::ActiveModel {
            team_id: Set(team_id),
            name: Set(name),
            jersey_number: Set(req.jersey_number),
            is_goalkeeper: Set(req.is_goalkeeper),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

        insert_positions(
            &txn,
            model.player_id,
            &req.offensive_positions,
            &req.defensive_positions,
        )
        .await?;

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(
            player_id = model.player_id,
            team_id = team_id,
            "선수 생성 완료"
        );

        Self::revalidate_team(state, team_id);
        Self::get_player(state, model.player_id).await
    }

    /// 선수 정보 수정 (이름, 등번호, 골키퍼 여부)
    pub async fn update_player(
        state: &AppState,
        player_id: i64,
        req: PlayerUpdateRequest,
    ) -> Result<PlayerResponse, AppError> {
        let name = require_name(&req.name, "Navn")?;

        let existing = Self::find_player(state, player_id).await?;
        let team_id = existing.team_id;

        let mut active = existing.into_active_model();
        active.name = Set(name);
        active.jersey_number = Set(req.jersey_number);
        active.is_goalkeeper = Set(req.is_goalkeeper);

        active
            .update(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(player_id = player_id, "선수 정보 수정 완료");

        Self::revalidate_team(state, team_id);
        Self::get_player(state, player_id).await
    }

    /// 포지션 전체 교체 (기존 포지션 삭제 후 새로 저장, 하나의 트랜잭션)
    pub async fn set_player_positions(
        state: &AppState,
        player_id: i64,
        req: PlayerPositionsRequest,
    ) -> Result<PlayerResponse, AppError> {
        validate_offensive(&req.offensive_positions)?;
        validate_defensive(&req.defensive_positions)?;

        let existing = Self::find_player(state, player_id).await?;

        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        offensive_position::Entity::delete_many()
            .filter(offensive_position::Column::PlayerId.eq(player_id))
            .exec(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        defensive_position::Entity::delete_many()
            .filter(defensive_position::Column::PlayerId.eq(player_id))
            .exec(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        insert_positions(
            &txn,
            player_id,
            &req.offensive_positions,
            &req.defensive_positions,
        )
        .await?;

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(
            player_id = player_id,
            offensive = req.offensive_positions.len(),
            defensive = req.defensive_positions.len(),
            "선수 포지션 변경 완료"
        );

        Self::revalidate_team(state, existing.team_id);
        Self::get_player(state, player_id).await
    }

    /// 선수 삭제 (포지션, 출석 기록은 CASCADE)
    pub async fn delete_player(
        state: &AppState,
        player_id: i64,
    ) -> Result<DeletePlayerResponse, AppError> {
        let existing = Self::find_player(state, player_id).await?;

        player::Entity::delete_by_id(player_id)
            .exec(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(player_id = player_id, team_id = existing.team_id, "선수 삭제 완료");

        Self::revalidate_team(state, existing.team_id);

        Ok(DeletePlayerResponse {
            player_id,
            team_id: existing.team_id,
            deleted_at: format_datetime(Utc::now().naive_utc()),
        })
    }

    fn revalidate_team(state: &AppState, team_id: i64) {
        let detail_path = TeamService::detail_path(team_id);
        state.revalidator.revalidate_path(&detail_path);
    }
}

async fn insert_positions<C>(
    conn: &C,
    player_id: i64,
    offensive: &[OffensivePositionItem],
    defensive: &[DefensivePositionItem],
) -> Result<(), AppError>
where
    C: ConnectionTrait,
{
    if !offensive.is_empty() {
        let models = offensive.iter().map(|item| offensive_position::ActiveModel {
            player_id: Set(player_id),
            position: Set(item.position),
            is_primary: Set(item.is_primary),
            ..Default::default()
        });

        offensive_position::Entity::insert_many(models)
            .exec(conn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;
    }

    if !defensive.is_empty() {
        let models = defensive.iter().map(|item| defensive_position::ActiveModel {
            player_id: Set(player_id),
            position: Set(item.position),
            is_primary: Set(item.is_primary),
            ..Default::default()
        });

        defensive_position::Entity::insert_many(models)
            .exec(conn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;
    }

    Ok(())
}

fn validate_offensive(items: &[OffensivePositionItem]) -> Result<(), AppError> {
    validate_position_list(
        items.iter().map(|i| (i.position, i.is_primary)),
        "offensive",
    )
}

fn validate_defensive(items: &[DefensivePositionItem]) -> Result<(), AppError> {
    validate_position_list(
        items.iter().map(|i| (i.position, i.is_primary)),
        "defensive",
    )
}

/// 포지션 목록 규칙: 같은 코드 중복 불가, 주 포지션은 최대 1개
fn validate_position_list<P>(
    items: impl Iterator<Item = (P, bool)>,
    label: &str,
) -> Result<(), AppError>
where
    P: Eq + Hash + std::fmt::Display,
{
    let mut seen = HashSet::new();
    let mut primary_count = 0;

    for (position, is_primary) in items {
        if is_primary {
            primary_count += 1;
        }
        let code = position.to_string();
        if !seen.insert(position) {
            return Err(AppError::ValidationError(format!(
                "Positionen {} er angivet flere gange ({}).",
                code, label
            )));
        }
    }

    if primary_count > 1 {
        return Err(AppError::ValidationError(format!(
            "Der kan højst være én primær {} position.",
            label
        )));
    }

    Ok(())
}

/// 선수 목록과 포지션 행을 선수별로 묶어 응답으로 변환
///
/// 정렬: 등번호 오름차순(번호 없는 선수는 뒤), 같은 번호 안에서는 입력 순서 유지.
pub(crate) fn assemble_players(
    players: Vec<player::Model>,
    offensive: Vec<offensive_position::Model>,
    defensive: Vec<defensive_position::Model>,
) -> Vec<PlayerResponse> {
    let mut offensive_map: HashMap<i64, Vec<OffensivePositionItem>> = HashMap::new();
    for row in offensive {
        offensive_map
            .entry(row.player_id)
            .or_default()
            .push(OffensivePositionItem {
                position: row.position,
                is_primary: row.is_primary,
            });
    }

    let mut defensive_map: HashMap<i64, Vec<DefensivePositionItem>> = HashMap::new();
    for row in defensive {
        defensive_map
            .entry(row.player_id)
            .or_default()
            .push(DefensivePositionItem {
                position: row.position,
                is_primary: row.is_primary,
            });
    }

    let mut responses: Vec<PlayerResponse> = players
        .into_iter()
        .map(|p| {
            let (offensive_positions, defensive_positions) = if p.is_goalkeeper {
                (vec![], vec![])
            } else {
                (
                    offensive_map.remove(&p.player_id).unwrap_or_default(),
                    defensive_map.remove(&p.player_id).unwrap_or_default(),
                )
            };

            PlayerResponse {
                player_id: p.player_id,
                team_id: p.team_id,
                name: p.name,
                jersey_number: p.jersey_number,
                is_goalkeeper: p.is_goalkeeper,
                created_at: format_datetime(p.created_at),
                offensive_positions,
                defensive_positions,
            }
        })
        .collect();

    responses.sort_by_key(|p| (p.jersey_number.is_none(), p.jersey_number));
    responses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::position::{DefensivePosition, OffensivePosition};
    use chrono::NaiveDate;

    fn player(player_id: i64, name: &str, number: Option<i32>, keeper: bool) -> player::Model {
        player::Model {
            player_id,
            team_id: 1,
            name: name.to_string(),
            jersey_number: number,
            is_goalkeeper: keeper,
            created_at: NaiveDate::from_ymd_opt(2026, 1, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    fn offensive(player_id: i64, position: OffensivePosition, primary: bool) -> offensive_position::Model {
        offensive_position::Model {
            player_offensive_position_id: 0,
            player_id,
            position,
            is_primary: primary,
        }
    }

    #[test]
    fn should_group_positions_per_player() {
        let players = vec![player(1, "Jensen", Some(7), false), player(2, "Hansen", Some(3), false)];
        let off = vec![
            offensive(1, OffensivePosition::Pivot, true),
            offensive(2, OffensivePosition::LeftBack, false),
            offensive(1, OffensivePosition::Playmaker, false),
        ];
        let def = vec![defensive_position::Model {
            player_defensive_position_id: 0,
            player_id: 2,
            position: DefensivePosition::Three,
            is_primary: true,
        }];

        let result = assemble_players(players, off, def);

        // 등번호 순: Hansen(3), Jensen(7)
        assert_eq!(result[0].name, "Hansen");
        assert_eq!(result[0].defensive_positions.len(), 1);
        assert_eq!(result[1].offensive_positions.len(), 2);
        assert_eq!(result[1].offensive_positions[0].position, OffensivePosition::Pivot);
        assert!(result[1].offensive_positions[0].is_primary);
        assert!(result[1].defensive_positions.is_empty());
    }

    #[test]
    fn should_hide_positions_of_goalkeepers() {
        let players = vec![player(1, "Keeper", Some(1), true)];
        let off = vec![offensive(1, OffensivePosition::LeftWing, true)];

        let result = assemble_players(players, off, vec![]);

        assert!(result[0].is_goalkeeper);
        assert!(result[0].offensive_positions.is_empty());
    }

    #[test]
    fn should_put_players_without_number_last() {
        let players = vec![
            player(1, "Aage", None, false),
            player(2, "Bent", Some(10), false),
            player(3, "Carl", Some(2), false),
        ];

        let result = assemble_players(players, vec![], vec![]);
        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["Carl", "Bent", "Aage"]);
    }

    #[test]
    fn should_reject_duplicate_position_codes() {
        let items = vec![
            OffensivePositionItem {
                position: OffensivePosition::Pivot,
                is_primary: false,
            },
            OffensivePositionItem {
                position: OffensivePosition::Pivot,
                is_primary: true,
            },
        ];

        assert!(matches!(
            validate_offensive(&items),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn should_reject_more_than_one_primary() {
        let items = vec![
            DefensivePositionItem {
                position: DefensivePosition::One,
                is_primary: true,
            },
            DefensivePositionItem {
                position: DefensivePosition::Two,
                is_primary: true,
            },
        ];

        assert!(validate_defensive(&items).is_err());
    }

    #[test]
    fn should_accept_empty_position_lists() {
        assert!(validate_offensive(&[]).is_ok());
        assert!(validate_defensive(&[]).is_ok());
    }
}
