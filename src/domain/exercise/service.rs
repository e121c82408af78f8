use std::collections::{HashMap, HashSet};

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use tracing::info;

use super::dto::{
    CategoryCreateRequest, CategoryResponse, DeleteExerciseResponse, ExerciseCreateRequest,
    ExercisePositionRequest, ExercisePositionResponse, ExerciseResponse, ExerciseSummaryResponse,
    ExerciseVariationResponse, FocusPointCreateRequest, FocusPointResponse,
};
use super::entity::{
    category, exercise, exercise_focus_point, exercise_position, exercise_variation, focus_point,
};
use crate::domain::position::PositionCode;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::validation::{optional_text, require_name, require_text};

/// 과제 목록 화면 경로
const EXERCISE_PATH: &str = "/oevelser";

/// 포커스 포인트 최대 길이
const FOCUS_POINT_MAX_LENGTH: usize = 255;

pub struct ExerciseService;

impl ExerciseService {
    /// 과제 목록 (이름 순)
    pub async fn list_exercises(state: &AppState) -> Result<Vec<ExerciseSummaryResponse>, AppError> {
        let exercises = exercise::Entity::find()
            .order_by_asc(exercise::Column::Name)
            .order_by_asc(exercise::Column::ExerciseId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(exercises
            .into_iter()
            .map(ExerciseSummaryResponse::from)
            .collect())
    }

    /// 과제 상세 조회
    ///
    /// 카테고리, 포커스 포인트, 기본 포지션, 변형(각 변형의 포지션 포함)을 함께 반환합니다.
    pub async fn get_exercise(
        state: &AppState,
        exercise_id: i64,
    ) -> Result<ExerciseResponse, AppError> {
        // 1. 과제 조회
        let model = exercise::Entity::find_by_id(exercise_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| {
                AppError::ExerciseNotFound("Øvelsen blev ikke fundet.".to_string())
            })?;

        // 2. 카테고리
        let category = match model.category_id {
            Some(category_id) => category::Entity::find_by_id(category_id)
                .one(&state.db)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?
                .map(CategoryResponse::from),
            None => None,
        };

        // 3. 포커스 포인트
        let focus_points = focus_point::Entity::find()
            .join(
                JoinType::InnerJoin,
                focus_point::Relation::ExerciseFocusPoint.def(),
            )
            .filter(exercise_focus_point::Column::ExerciseId.eq(exercise_id))
            .order_by_asc(focus_point::Column::Text)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        // 4. 변형 + 포지션
        let variations = exercise_variation::Entity::find()
            .filter(exercise_variation::Column::ExerciseId.eq(exercise_id))
            .order_by_asc(exercise_variation::Column::ExerciseVariationId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let positions = exercise_position::Entity::find()
            .filter(exercise_position::Column::ExerciseId.eq(exercise_id))
            .order_by_asc(exercise_position::Column::ExercisePositionId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let (base_positions, variations) = group_positions(positions, variations);

        Ok(ExerciseResponse {
            exercise_id: model.exercise_id,
            name: model.name,
            description: model.description,
            image_path: model.image_path,
            uses_positions: model.uses_positions,
            minimum_participants: model.minimum_participants,
            original_position_label: model.original_position_label,
            category,
            focus_points: focus_points
                .into_iter()
                .map(FocusPointResponse::from)
                .collect(),
            positions: base_positions,
            variations,
        })
    }

    /// 과제 생성 (과제, 포커스 포인트 연결, 포지션, 변형을 하나의 트랜잭션으로)
    pub async fn create_exercise(
        state: &AppState,
        req: ExerciseCreateRequest,
    ) -> Result<ExerciseResponse, AppError> {
        // 1. 입력 검증 (DB 호출 전)
        let name = require_name(&req.name, "Navn")?;
        let base_positions = validate_positions(&req.positions)?;

        let mut variations = Vec::with_capacity(req.variations.len());
        for variation in &req.variations {
            variations.push((
                require_name(&variation.name, "Variationens navn")?,
                optional_text(variation.description.as_deref()),
                validate_positions(&variation.positions)?,
            ));
        }

        let focus_point_ids: Vec<i64> = {
            let mut seen = HashSet::new();
            req.focus_point_ids
                .iter()
                .copied()
                .filter(|id| seen.insert(*id))
                .collect()
        };

        // 2. 참조 데이터 확인
        if let Some(category_id) = req.category_id {
            category::Entity::find_by_id(category_id)
                .one(&state.db)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?
                .ok_or_else(|| AppError::NotFound("Kategorien blev ikke fundet.".to_string()))?;
        }

        if !focus_point_ids.is_empty() {
            let found = focus_point::Entity::find()
                .filter(focus_point::Column::FocusPointId.is_in(focus_point_ids.clone()))
                .count(&state.db)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;

            if found as usize != focus_point_ids.len() {
                return Err(AppError::NotFound(
                    "Et eller flere fokuspunkter blev ikke fundet.".to_string(),
                ));
            }
        }

        // 3. 트랜잭션 시작
        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        // 4. 과제 저장
        let model = exercise::ActiveModel {
            name: Set(name),
            description: Set(optional_text(req.description.as_deref())),
            image_path: Set(optional_text(req.image_path.as_deref())),
            uses_positions: Set(req.uses_positions),
            minimum_participants: Set(req.minimum_participants),
            category_id: Set(req.category_id),
            original_position_label: Set(optional_text(req.original_position_label.as_deref())),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

        // 5. 포커스 포인트 연결
        if !focus_point_ids.is_empty() {
            let links = focus_point_ids
                .iter()
                .map(|focus_point_id| exercise_focus_point::ActiveModel {
                    exercise_id: Set(model.exercise_id),
                    focus_point_id: Set(*focus_point_id),
                    ..Default::default()
                });

            exercise_focus_point::Entity::insert_many(links)
                .exec(&txn)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;
        }

        // 6. 기본 포지션
        insert_exercise_positions(&txn, model.exercise_id, None, &base_positions).await?;

        // 7. 변형 + 변형 포지션
        for (variation_name, description, positions) in variations {
            let variation = exercise_variation::ActiveModel {
                exercise_id: Set(model.exercise_id),
                name: Set(variation_name),
                description: Set(description),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

            insert_exercise_positions(
                &txn,
                model.exercise_id,
                Some(variation.exercise_variation_id),
                &positions,
            )
            .await?;
        }

        // 8. 커밋
        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(exercise_id = model.exercise_id, "과제 생성 완료");

        state.revalidator.revalidate_path(EXERCISE_PATH);

        Self::get_exercise(state, model.exercise_id).await
    }

    /// 과제 삭제 (변형, 포지션, 포커스 포인트 연결은 CASCADE)
    pub async fn delete_exercise(
        state: &AppState,
        exercise_id: i64,
    ) -> Result<DeleteExerciseResponse, AppError> {
        let result = exercise::Entity::delete_by_id(exercise_id)
            .exec(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(AppError::ExerciseNotFound(
                "Øvelsen blev ikke fundet.".to_string(),
            ));
        }

        info!(exercise_id = exercise_id, "과제 삭제 완료");

        state.revalidator.revalidate_path(EXERCISE_PATH);

        Ok(DeleteExerciseResponse { exercise_id })
    }

    pub async fn list_categories(state: &AppState) -> Result<Vec<CategoryResponse>, AppError> {
        let categories = category::Entity::find()
            .order_by_asc(category::Column::Name)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    /// 카테고리 생성 (이름 중복 시 409)
    pub async fn create_category(
        state: &AppState,
        req: CategoryCreateRequest,
    ) -> Result<CategoryResponse, AppError> {
        let name = require_name(&req.name, "Kategori")?;

        let existing = category::Entity::find()
            .filter(category::Column::Name.eq(name.as_str()))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        if existing.is_some() {
            return Err(AppError::Conflict(format!(
                "Kategorien '{}' findes allerede.",
                name
            )));
        }

        let conflict_message = format!("Kategorien '{}' findes allerede.", name);
        let model = category::ActiveModel {
            name: Set(name),
            ..Default::default()
        }
        .insert(&state.db)
        .await
        .map_err(|e| AppError::conflict_or_internal(e, conflict_message))?;

        info!(category_id = model.category_id, "카테고리 생성 완료");

        state.revalidator.revalidate_path(EXERCISE_PATH);

        Ok(CategoryResponse::from(model))
    }

    pub async fn list_focus_points(state: &AppState) -> Result<Vec<FocusPointResponse>, AppError> {
        let focus_points = focus_point::Entity::find()
            .order_by_asc(focus_point::Column::Text)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(focus_points
            .into_iter()
            .map(FocusPointResponse::from)
            .collect())
    }

    /// 포커스 포인트 생성 (문구 중복 시 409)
    pub async fn create_focus_point(
        state: &AppState,
        req: FocusPointCreateRequest,
    ) -> Result<FocusPointResponse, AppError> {
        let text = require_text(&req.text, "Fokuspunkt", FOCUS_POINT_MAX_LENGTH)?;

        let existing = focus_point::Entity::find()
            .filter(focus_point::Column::Text.eq(text.as_str()))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        if existing.is_some() {
            return Err(AppError::Conflict(format!(
                "Fokuspunktet '{}' findes allerede.",
                text
            )));
        }

        let conflict_message = format!("Fokuspunktet '{}' findes allerede.", text);
        let model = focus_point::ActiveModel {
            text: Set(text),
            ..Default::default()
        }
        .insert(&state.db)
        .await
        .map_err(|e| AppError::conflict_or_internal(e, conflict_message))?;

        info!(focus_point_id = model.focus_point_id, "포커스 포인트 생성 완료");

        state.revalidator.revalidate_path(EXERCISE_PATH);

        Ok(FocusPointResponse::from(model))
    }
}

/// 포지션 입력 검증
///
/// - 코드는 `isOffensive`에 맞는 코드 집합에 속해야 함
/// - 필요 인원은 1 이상
/// - 같은 목록에서 (코드, 공격 여부) 중복 불가
fn validate_positions(
    positions: &[ExercisePositionRequest],
) -> Result<Vec<(PositionCode, i32)>, AppError> {
    let mut seen = HashSet::new();
    let mut validated = Vec::with_capacity(positions.len());

    for position in positions {
        let code = PositionCode::parse(position.position_code.trim(), position.is_offensive)
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        if position.count_required < 1 {
            return Err(AppError::ValidationError(format!(
                "Antal for position {} skal være mindst 1.",
                code.code()
            )));
        }

        if !seen.insert(code) {
            return Err(AppError::ValidationError(format!(
                "Positionen {} er angivet mere end én gang.",
                code.code()
            )));
        }

        validated.push((code, position.count_required));
    }

    Ok(validated)
}

async fn insert_exercise_positions<C: ConnectionTrait>(
    conn: &C,
    exercise_id: i64,
    variation_id: Option<i64>,
    positions: &[(PositionCode, i32)],
) -> Result<(), AppError> {
    if positions.is_empty() {
        return Ok(());
    }

    let rows = positions
        .iter()
        .map(|(code, count)| exercise_position::ActiveModel {
            exercise_id: Set(exercise_id),
            variation_id: Set(variation_id),
            position_code: Set(code.code().to_string()),
            count_required: Set(*count),
            is_offensive: Set(code.is_offensive()),
            ..Default::default()
        });

    exercise_position::Entity::insert_many(rows)
        .exec(conn)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(())
}

/// 포지션 행을 기본 과제용과 변형별로 분류
///
/// 변형 순서는 입력 순서를 유지하며, 포지션이 없는 변형도 빈 목록으로 포함됩니다.
pub(crate) fn group_positions(
    positions: Vec<exercise_position::Model>,
    variations: Vec<exercise_variation::Model>,
) -> (Vec<ExercisePositionResponse>, Vec<ExerciseVariationResponse>) {
    let mut base = Vec::new();
    let mut by_variation: HashMap<i64, Vec<ExercisePositionResponse>> = HashMap::new();

    for position in positions {
        let response = ExercisePositionResponse {
            position_code: position.position_code,
            count_required: position.count_required,
            is_offensive: position.is_offensive,
        };

        match position.variation_id {
            Some(variation_id) => by_variation.entry(variation_id).or_default().push(response),
            None => base.push(response),
        }
    }

    let variations = variations
        .into_iter()
        .map(|variation| ExerciseVariationResponse {
            positions: by_variation
                .remove(&variation.exercise_variation_id)
                .unwrap_or_default(),
            variation_id: variation.exercise_variation_id,
            name: variation.name,
            description: variation.description,
        })
        .collect();

    (base, variations)
}
