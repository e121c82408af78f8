use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{NaiveDate, NaiveDateTime, Utc};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, FromQueryResult, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use tracing::{info, warn};

use super::dto::{
    AttendanceResponse, EnrollTeamRequest, RecordAttendanceRequest, SharedTrainingCreateRequest,
    SharedTrainingResponse, TrainingCreateRequest, TrainingResponse,
};
use super::entity::{training, training_attendance, training_team};
use crate::domain::player::entity::player;
use crate::domain::team::entity::team;
use crate::domain::team::service::TeamService;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::format::{format_date, format_datetime};
use crate::utils::validation::{optional_text, parse_date, require_name};
use crate::utils::ActionResult;

/// 훈련 목록 화면 경로
const TRAINING_PATH: &str = "/traening";
/// 공동 훈련 목록 화면 경로
const SHARED_TRAINING_PATH: &str = "/faelles-traening";

/// 공동 훈련 집계 행 (훈련 + 연결 팀 수)
#[derive(Debug, Clone, FromQueryResult)]
pub(crate) struct SharedTrainingRow {
    pub training_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub hold_count: i64,
}

/// 훈련별 연결 팀 이름 행
#[derive(Debug, Clone, FromQueryResult)]
pub(crate) struct TrainingTeamNameRow {
    pub training_id: i64,
    pub team_name: String,
}

pub struct TrainingService;

impl TrainingService {
    pub async fn find_training(
        state: &AppState,
        training_id: i64,
    ) -> Result<training::Model, AppError> {
        training::Entity::find_by_id(training_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| AppError::TrainingNotFound("Træningen blev ikke fundet.".to_string()))
    }

    /// 팀 훈련 목록: 팀 단독 훈련 + 팀이 참여한 공동 훈련 (날짜 내림차순)
    pub async fn list_team_trainings(
        state: &AppState,
        team_id: i64,
    ) -> Result<Vec<TrainingResponse>, AppError> {
        TeamService::find_team(state, team_id).await?;

        let shared_ids: Vec<i64> = training_team::Entity::find()
            .filter(training_team::Column::TeamId.eq(team_id))
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .into_iter()
            .map(|link| link.training_id)
            .collect();

        let mut condition = Condition::any().add(training::Column::TeamId.eq(team_id));
        if !shared_ids.is_empty() {
            condition = condition.add(training::Column::TrainingId.is_in(shared_ids));
        }

        let trainings = training::Entity::find()
            .filter(condition)
            .order_by_desc(training::Column::Date)
            .order_by_desc(training::Column::TrainingId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(trainings.into_iter().map(TrainingResponse::from).collect())
    }

    /// 단독 훈련 생성
    pub async fn create_training(
        state: &AppState,
        team_id: i64,
        req: TrainingCreateRequest,
    ) -> Result<TrainingResponse, AppError> {
        // 1. 입력 검증
        let name = require_name(&req.name, "Navn")?;
        let date = parse_date(&req.date)?;

        // 2. 팀 존재 여부 확인
        TeamService::find_team(state, team_id).await?;

        // 3. 저장
        let model = training::ActiveModel {
            team_id: Set(Some(team_id)),
            name: Set(name),
            description: Set(optional_text(req.description.as_deref())),
            date: Set(date),
            is_shared: Set(false),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&state.db)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(
            training_id = model.training_id,
            team_id = team_id,
            "훈련 생성 완료"
        );

        let detail_path = TeamService::detail_path(team_id);
        state
            .revalidator
            .revalidate_paths([TRAINING_PATH, detail_path.as_str()]);

        Ok(TrainingResponse::from(model))
    }

    /// 공동 훈련 생성 (훈련 + 팀 연결, 하나의 트랜잭션)
    pub async fn create_shared_training(
        state: &AppState,
        req: SharedTrainingCreateRequest,
    ) -> Result<TrainingResponse, AppError> {
        // 1. 입력 검증
        let name = require_name(&req.name, "Navn")?;
        let date = parse_date(&req.date)?;

        // 중복 팀 ID 제거 (입력 순서 유지)
        let mut seen = HashSet::new();
        let team_ids: Vec<i64> = req
            .team_ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();

        // 2. 팀 존재 여부 확인 (단일 배치 쿼리)
        if !team_ids.is_empty() {
            let found = team::Entity::find()
                .filter(team::Column::TeamId.is_in(team_ids.clone()))
                .count(&state.db)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;

            if found as usize != team_ids.len() {
                return Err(AppError::TeamNotFound(
                    "Et eller flere hold blev ikke fundet.".to_string(),
                ));
            }
        }

        // 3. 트랜잭션 시작
        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let now = Utc::now().naive_utc();

        // 4. 훈련 생성
        let model = training::ActiveModel {
            team_id: Set(None),
            name: Set(name),
            description: Set(optional_text(req.description.as_deref())),
            date: Set(date),
            is_shared: Set(true),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

        // 5. 팀 연결
        if !team_ids.is_empty() {
            let links = team_ids.iter().map(|team_id| training_team::ActiveModel {
                training_id: Set(model.training_id),
                team_id: Set(*team_id),
                enrolled_at: Set(now),
                ..Default::default()
            });

            training_team::Entity::insert_many(links)
                .exec(&txn)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;
        }

        // 6. 커밋
        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(
            training_id = model.training_id,
            team_count = team_ids.len(),
            "공동 훈련 생성 완료"
        );

        state
            .revalidator
            .revalidate_paths([TRAINING_PATH, SHARED_TRAINING_PATH]);

        Ok(TrainingResponse::from(model))
    }

    /// 공동 훈련에 팀 등록
    pub async fn enroll_team(
        state: &AppState,
        training_id: i64,
        req: EnrollTeamRequest,
    ) -> Result<SharedTrainingResponse, AppError> {
        let training = Self::find_training(state, training_id).await?;

        if !training.is_shared {
            return Err(AppError::BadRequest(
                "Kun fælles træninger kan have flere hold.".to_string(),
            ));
        }

        TeamService::find_team(state, req.team_id).await?;

        let existing = training_team::Entity::find()
            .filter(training_team::Column::TrainingId.eq(training_id))
            .filter(training_team::Column::TeamId.eq(req.team_id))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        if existing.is_some() {
            return Err(AppError::Conflict(
                "Holdet er allerede tilmeldt træningen.".to_string(),
            ));
        }

        training_team::ActiveModel {
            training_id: Set(training_id),
            team_id: Set(req.team_id),
            enrolled_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&state.db)
        .await
        .map_err(|e| {
            AppError::conflict_or_internal(e, "Holdet er allerede tilmeldt træningen.")
        })?;

        info!(
            training_id = training_id,
            team_id = req.team_id,
            "공동 훈련 팀 등록 완료"
        );

        state.revalidator.revalidate_path(SHARED_TRAINING_PATH);

        Self::list_shared_trainings(state)
            .await?
            .into_iter()
            .find(|t| t.training_id == training_id)
            .ok_or_else(|| AppError::TrainingNotFound("Træningen blev ikke fundet.".to_string()))
    }

    /// 공동 훈련 목록 (참여 팀 수 + 팀 이름)
    ///
    /// 1. 공동 훈련별 연결 수를 LEFT JOIN + COUNT로 집계
    /// 2. 모든 훈련의 팀 이름을 `training_id IN (...)` 단일 쿼리로 조회 (N+1 방지)
    /// 3. 메모리에서 훈련 ID 기준으로 병합
    pub async fn list_shared_trainings(
        state: &AppState,
    ) -> Result<Vec<SharedTrainingResponse>, AppError> {
        // 1. 집계 쿼리
        let rows = training::Entity::find()
            .select_only()
            .column(training::Column::TrainingId)
            .column(training::Column::Name)
            .column(training::Column::Description)
            .column(training::Column::Date)
            .column(training::Column::CreatedAt)
            .column_as(
                Expr::col((
                    training_team::Entity,
                    training_team::Column::TrainingTeamId,
                ))
                .count(),
                "hold_count",
            )
            .join(JoinType::LeftJoin, training::Relation::TrainingTeam.def())
            .filter(training::Column::IsShared.eq(true))
            .group_by(training::Column::TrainingId)
            .order_by_desc(training::Column::Date)
            .order_by_desc(training::Column::TrainingId)
            .into_model::<SharedTrainingRow>()
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        if rows.is_empty() {
            return Ok(vec![]);
        }

        // 2. 팀 이름 배치 조회
        let training_ids: Vec<i64> = rows.iter().map(|r| r.training_id).collect();

        let names = training_team::Entity::find()
            .select_only()
            .column(training_team::Column::TrainingId)
            .column_as(team::Column::Name, "team_name")
            .join(JoinType::InnerJoin, training_team::Relation::Team.def())
            .filter(training_team::Column::TrainingId.is_in(training_ids))
            .order_by_asc(team::Column::Name)
            .into_model::<TrainingTeamNameRow>()
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        // 3. 병합
        Ok(merge_shared_trainings(rows, names))
    }

    /// 훈련 삭제
    ///
    /// 연결 행을 먼저 지우고 훈련을 지웁니다. 실패는 전파하지 않고 `{success, message}`로 돌려줍니다.
    pub async fn delete_training(state: &AppState, training_id: i64) -> ActionResult {
        match Self::delete_training_rows(state, training_id).await {
            Ok(()) => {
                info!(training_id = training_id, "훈련 삭제 완료");
                state
                    .revalidator
                    .revalidate_paths([TRAINING_PATH, SHARED_TRAINING_PATH]);
                ActionResult::ok("Træningen er slettet.")
            }
            Err(e) => {
                warn!(training_id = training_id, error = %e, "훈련 삭제 실패");
                ActionResult::from_error(&e)
            }
        }
    }

    async fn delete_training_rows(state: &AppState, training_id: i64) -> Result<(), AppError> {
        let training = Self::find_training(state, training_id).await?;

        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        // 1. 팀 연결 삭제
        training_team::Entity::delete_many()
            .filter(training_team::Column::TrainingId.eq(training_id))
            .exec(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        // 2. 훈련 삭제 (출석 기록은 CASCADE)
        training::Entity::delete_by_id(training_id)
            .exec(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        if let Some(team_id) = training.team_id {
            state
                .revalidator
                .revalidate_path(&TeamService::detail_path(team_id));
        }

        Ok(())
    }

    /// 출석 기록 (선수별 upsert)
    ///
    /// 단독 훈련은 해당 팀 선수, 공동 훈련은 참여 팀 선수만 기록할 수 있습니다.
    pub async fn record_attendance(
        state: &AppState,
        training_id: i64,
        req: RecordAttendanceRequest,
    ) -> Result<Vec<AttendanceResponse>, AppError> {
        let training = Self::find_training(state, training_id).await?;

        // 같은 선수가 여러 번 오면 마지막 값 사용
        let entries: BTreeMap<i64, bool> = req
            .entries
            .iter()
            .map(|e| (e.player_id, e.present))
            .collect();

        if entries.is_empty() {
            return Self::get_attendance(state, training_id).await;
        }

        // 1. 참여 가능한 팀
        let allowed_teams: HashSet<i64> = Self::participating_team_ids(state, &training).await?;

        // 2. 선수 검증
        let player_ids: Vec<i64> = entries.keys().copied().collect();
        let players = player::Entity::find()
            .filter(player::Column::PlayerId.is_in(player_ids))
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        if players.len() != entries.len() {
            return Err(AppError::PlayerNotFound(
                "En eller flere spillere blev ikke fundet.".to_string(),
            ));
        }

        if let Some(outsider) = players.iter().find(|p| !allowed_teams.contains(&p.team_id)) {
            return Err(AppError::BadRequest(format!(
                "{} deltager ikke i denne træning.",
                outsider.name
            )));
        }

        // 3. upsert
        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let now = Utc::now().naive_utc();
        for (player_id, present) in &entries {
            training_attendance::Entity::insert(training_attendance::ActiveModel {
                training_id: Set(training_id),
                player_id: Set(*player_id),
                present: Set(*present),
                recorded_at: Set(now),
                ..Default::default()
            })
            .on_conflict(
                OnConflict::columns([
                    training_attendance::Column::TrainingId,
                    training_attendance::Column::PlayerId,
                ])
                .update_columns([
                    training_attendance::Column::Present,
                    training_attendance::Column::RecordedAt,
                ])
                .to_owned(),
            )
            .exec(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;
        }

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(
            training_id = training_id,
            recorded = entries.len(),
            "출석 기록 완료"
        );

        state.revalidator.revalidate_path(TRAINING_PATH);

        Self::get_attendance(state, training_id).await
    }

    /// 출석 목록 (선수 이름 순)
    pub async fn get_attendance(
        state: &AppState,
        training_id: i64,
    ) -> Result<Vec<AttendanceResponse>, AppError> {
        Self::find_training(state, training_id).await?;

        let rows = training_attendance::Entity::find()
            .filter(training_attendance::Column::TrainingId.eq(training_id))
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        if rows.is_empty() {
            return Ok(vec![]);
        }

        let player_ids: Vec<i64> = rows.iter().map(|r| r.player_id).collect();
        let players: HashMap<i64, player::Model> = player::Entity::find()
            .filter(player::Column::PlayerId.is_in(player_ids))
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .into_iter()
            .map(|p| (p.player_id, p))
            .collect();

        let mut result: Vec<AttendanceResponse> = rows
            .into_iter()
            .filter_map(|row| {
                let player = players.get(&row.player_id)?;
                Some(AttendanceResponse {
                    player_id: row.player_id,
                    player_name: player.name.clone(),
                    team_id: player.team_id,
                    present: row.present,
                    recorded_at: format_datetime(row.recorded_at),
                })
            })
            .collect();

        result.sort_by(|a, b| a.player_name.cmp(&b.player_name));
        Ok(result)
    }

    async fn participating_team_ids(
        state: &AppState,
        training: &training::Model,
    ) -> Result<HashSet<i64>, AppError> {
        let mut team_ids: HashSet<i64> = training.team_id.into_iter().collect();

        if training.is_shared {
            let links = training_team::Entity::find()
                .filter(training_team::Column::TrainingId.eq(training.training_id))
                .all(&state.db)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;
            team_ids.extend(links.into_iter().map(|l| l.team_id));
        }

        Ok(team_ids)
    }
}

/// 집계 행과 팀 이름 행을 훈련 ID 기준으로 병합 (해시 조인)
///
/// 집계 행의 순서를 그대로 유지하며, 연결 팀이 없는 훈련은 빈 목록을 가집니다.
pub(crate) fn merge_shared_trainings(
    rows: Vec<SharedTrainingRow>,
    names: Vec<TrainingTeamNameRow>,
) -> Vec<SharedTrainingResponse> {
    let mut names_by_training: HashMap<i64, Vec<String>> = HashMap::new();
    for row in names {
        names_by_training
            .entry(row.training_id)
            .or_default()
            .push(row.team_name);
    }

    rows.into_iter()
        .map(|row| SharedTrainingResponse {
            training_id: row.training_id,
            name: row.name,
            description: row.description,
            date: format_date(row.date),
            created_at: format_datetime(row.created_at),
            hold_count: row.hold_count,
            team_names: names_by_training
                .remove(&row.training_id)
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(training_id: i64, date: &str, hold_count: i64) -> SharedTrainingRow {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        SharedTrainingRow {
            training_id,
            name: format!("Fælles {}", training_id),
            description: None,
            date,
            created_at: date.and_hms_opt(8, 0, 0).unwrap(),
            hold_count,
        }
    }

    fn name(training_id: i64, team_name: &str) -> TrainingTeamNameRow {
        TrainingTeamNameRow {
            training_id,
            team_name: team_name.to_string(),
        }
    }

    #[test]
    fn should_attach_team_names_by_training_id() {
        let rows = vec![row(2, "2026-05-01", 2), row(1, "2026-04-01", 1)];
        let names = vec![name(1, "U13 Piger"), name(2, "U15 Drenge"), name(2, "U17 Drenge")];

        let result = merge_shared_trainings(rows, names);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].training_id, 2);
        assert_eq!(result[0].team_names, vec!["U15 Drenge", "U17 Drenge"]);
        assert_eq!(result[1].team_names, vec!["U13 Piger"]);
    }

    #[test]
    fn should_give_empty_names_for_training_without_teams() {
        let result = merge_shared_trainings(vec![row(5, "2026-05-01", 0)], vec![]);

        assert_eq!(result[0].hold_count, 0);
        assert!(result[0].team_names.is_empty());
    }

    #[test]
    fn should_keep_aggregate_row_order() {
        let rows = vec![
            row(3, "2026-06-01", 0),
            row(1, "2026-05-01", 0),
            row(2, "2026-04-01", 0),
        ];

        let ids: Vec<i64> = merge_shared_trainings(rows, vec![])
            .iter()
            .map(|t| t.training_id)
            .collect();

        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn should_ignore_names_for_unlisted_trainings() {
        let result = merge_shared_trainings(vec![row(1, "2026-05-01", 1)], vec![name(9, "X")]);

        assert_eq!(result.len(), 1);
        assert!(result[0].team_names.is_empty());
    }
}
