use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::{category, exercise, focus_point};

// ============== 과제 조회 ==============

/// 포지션별 필요 인원
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePositionResponse {
    #[schema(example = "ST")]
    pub position_code: String,
    pub count_required: i32,
    pub is_offensive: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseVariationResponse {
    pub variation_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub positions: Vec<ExercisePositionResponse>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FocusPointResponse {
    pub focus_point_id: i64,
    pub text: String,
}

impl From<focus_point::Model> for FocusPointResponse {
    fn from(model: focus_point::Model) -> Self {
        Self {
            focus_point_id: model.focus_point_id,
            text: model.text,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub category_id: i64,
    pub name: String,
}

impl From<category::Model> for CategoryResponse {
    fn from(model: category::Model) -> Self {
        Self {
            category_id: model.category_id,
            name: model.name,
        }
    }
}

/// 과제 상세 (`GET /api/oevelser/{id}`는 이 객체를 봉투 없이 그대로 반환)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseResponse {
    pub exercise_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub uses_positions: bool,
    pub minimum_participants: Option<i32>,
    pub original_position_label: Option<String>,
    pub category: Option<CategoryResponse>,
    pub focus_points: Vec<FocusPointResponse>,
    /// 기본 과제의 포지션 (변형에 속하지 않은 포지션)
    pub positions: Vec<ExercisePositionResponse>,
    pub variations: Vec<ExerciseVariationResponse>,
}

/// 과제 목록 항목
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSummaryResponse {
    pub exercise_id: i64,
    pub name: String,
    pub category_id: Option<i64>,
    pub uses_positions: bool,
    pub minimum_participants: Option<i32>,
}

impl From<exercise::Model> for ExerciseSummaryResponse {
    fn from(model: exercise::Model) -> Self {
        Self {
            exercise_id: model.exercise_id,
            name: model.name,
            category_id: model.category_id,
            uses_positions: model.uses_positions,
            minimum_participants: model.minimum_participants,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessExerciseListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<ExerciseSummaryResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessExerciseResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: ExerciseResponse,
}

// ============== 과제 생성 ==============

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePositionRequest {
    #[schema(example = "PM")]
    pub position_code: String,
    #[serde(default = "default_count_required")]
    pub count_required: i32,
    pub is_offensive: bool,
}

fn default_count_required() -> i32 {
    1
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseVariationRequest {
    #[validate(length(max = 100, message = "Variationens navn må højst være 100 tegn."))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub positions: Vec<ExercisePositionRequest>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseCreateRequest {
    #[validate(length(max = 100, message = "Navnet må højst være 100 tegn."))]
    pub name: String,

    pub description: Option<String>,

    pub image_path: Option<String>,

    #[serde(default)]
    pub uses_positions: bool,

    #[validate(range(min = 1, message = "Mindste antal deltagere skal være mindst 1."))]
    pub minimum_participants: Option<i32>,

    pub category_id: Option<i64>,

    pub original_position_label: Option<String>,

    #[serde(default)]
    pub focus_point_ids: Vec<i64>,

    #[serde(default)]
    pub positions: Vec<ExercisePositionRequest>,

    #[serde(default)]
    #[validate(nested)]
    pub variations: Vec<ExerciseVariationRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteExerciseResponse {
    pub exercise_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessDeleteExerciseResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: DeleteExerciseResponse,
}

// ============== 기준 데이터 (카테고리 / 포커스 포인트) ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreateRequest {
    #[validate(length(max = 100, message = "Kategorien må højst være 100 tegn."))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FocusPointCreateRequest {
    #[validate(length(max = 255, message = "Fokuspunktet må højst være 255 tegn."))]
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessCategoryResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: CategoryResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessCategoryListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<CategoryResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessFocusPointResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: FocusPointResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessFocusPointListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<FocusPointResponse>,
}
