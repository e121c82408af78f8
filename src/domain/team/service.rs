use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, QueryOrder, Set};
use tracing::info;

use super::dto::{
    DeleteTeamResponse, TeamCreateRequest, TeamDetailResponse, TeamResponse, TeamUpdateRequest,
};
use super::entity::team;
use crate::domain::player::service::PlayerService;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::format::format_datetime;
use crate::utils::validation::require_name;

pub struct TeamService;

impl TeamService {
    /// 팀 목록 화면 경로
    pub fn list_path() -> &'static str {
        "/hold"
    }

    pub fn detail_path(team_id: i64) -> String {
        format!("/hold/{}", team_id)
    }

    /// 팀 목록 조회 (생성 순)
    pub async fn list_teams(state: &AppState) -> Result<Vec<TeamResponse>, AppError> {
        let teams = team::Entity::find()
            .order_by_asc(team::Column::CreatedAt)
            .order_by_asc(team::Column::TeamId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(teams.into_iter().map(TeamResponse::from).collect())
    }

    /// 팀 단건 조회, 없으면 TeamNotFound
    pub async fn find_team(state: &AppState, team_id: i64) -> Result<team::Model, AppError> {
        team::Entity::find_by_id(team_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| AppError::TeamNotFound("Holdet blev ikke fundet.".to_string()))
    }

    /// 팀 상세 조회 (선수 + 포지션 포함)
    pub async fn get_team_detail(
        state: &AppState,
        team_id: i64,
    ) -> Result<TeamDetailResponse, AppError> {
        let team = Self::find_team(state, team_id).await?;
        let players = PlayerService::players_with_positions(state, team_id).await?;

        Ok(TeamDetailResponse {
            team_id: team.team_id,
            name: team.name,
            created_at: format_datetime(team.created_at),
            players,
        })
    }

    /// 팀 생성
    pub async fn create_team(
        state: &AppState,
        req: TeamCreateRequest,
    ) -> Result<TeamResponse, AppError> {
        // 1. 이름 검증 (공백 제거 후 비어 있으면 저장하지 않음)
        let name = require_name(&req.name, "Holdnavn")?;

        // 2. 저장
        let model = team::ActiveModel {
            name: Set(name),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&state.db)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(team_id = model.team_id, name = %model.name, "팀 생성 완료");

        // 3. 화면 갱신
        state
            .revalidator
            .revalidate_paths(["/", Self::list_path()]);

        Ok(TeamResponse::from(model))
    }

    /// 팀 이름 변경
    pub async fn update_team(
        state: &AppState,
        team_id: i64,
        req: TeamUpdateRequest,
    ) -> Result<TeamResponse, AppError> {
        let name = require_name(&req.name, "Holdnavn")?;

        let mut active = Self::find_team(state, team_id).await?.into_active_model();
        active.name = Set(name);

        let model = active
            .update(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(team_id = team_id, name = %model.name, "팀 이름 변경 완료");

        let detail_path = Self::detail_path(team_id);
        state
            .revalidator
            .revalidate_paths(["/", Self::list_path(), detail_path.as_str()]);

        Ok(TeamResponse::from(model))
    }

    /// 팀 삭제
    ///
    /// 선수, 선수 포지션, 출석, 단독 훈련, 공동 훈련 연결은 FK ON DELETE CASCADE로 함께 삭제됩니다.
    pub async fn delete_team(
        state: &AppState,
        team_id: i64,
    ) -> Result<DeleteTeamResponse, AppError> {
        Self::find_team(state, team_id).await?;

        team::Entity::delete_by_id(team_id)
            .exec(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(team_id = team_id, "팀 삭제 완료");

        let detail_path = Self::detail_path(team_id);
        state.revalidator.revalidate_paths([
            "/",
            Self::list_path(),
            detail_path.as_str(),
            "/traening",
            "/faelles-traening",
        ]);

        Ok(DeleteTeamResponse {
            team_id,
            deleted_at: format_datetime(Utc::now().naive_utc()),
        })
    }
}
