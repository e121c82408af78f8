pub mod config;
pub mod domain;
pub mod global;
pub mod shutdown;
pub mod state;
pub mod utils;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use state::AppState;

use domain::{exercise, health, player, setup, team, training};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::handler::health_check,
        setup::handler::setup_db,
        team::handler::list_teams,
        team::handler::create_team,
        team::handler::get_team,
        team::handler::update_team,
        team::handler::delete_team,
        player::handler::list_players,
        player::handler::create_player,
        player::handler::update_player,
        player::handler::set_player_positions,
        player::handler::delete_player,
        training::handler::list_team_trainings,
        training::handler::create_training,
        training::handler::list_shared_trainings,
        training::handler::create_shared_training,
        training::handler::enroll_team,
        training::handler::delete_training,
        training::handler::get_attendance,
        training::handler::record_attendance,
        exercise::handler::list_exercises,
        exercise::handler::get_exercise,
        exercise::handler::create_exercise,
        exercise::handler::delete_exercise,
        exercise::handler::list_categories,
        exercise::handler::create_category,
        exercise::handler::list_focus_points,
        exercise::handler::create_focus_point,
    ),
    components(
        schemas(
            health::dto::HealthStatus,
            health::dto::HealthState,
            health::dto::HealthChecks,
            health::dto::CheckResult,
            domain::position::OffensivePosition,
            domain::position::DefensivePosition,
            team::dto::TeamCreateRequest,
            team::dto::TeamUpdateRequest,
            team::dto::TeamResponse,
            team::dto::TeamDetailResponse,
            team::dto::DeleteTeamResponse,
            team::dto::SuccessTeamResponse,
            team::dto::SuccessTeamListResponse,
            team::dto::SuccessTeamDetailResponse,
            team::dto::SuccessDeleteTeamResponse,
            player::dto::OffensivePositionItem,
            player::dto::DefensivePositionItem,
            player::dto::PlayerResponse,
            player::dto::PlayerCreateRequest,
            player::dto::PlayerUpdateRequest,
            player::dto::PlayerPositionsRequest,
            player::dto::DeletePlayerResponse,
            player::dto::SuccessPlayerResponse,
            player::dto::SuccessPlayerListResponse,
            player::dto::SuccessDeletePlayerResponse,
            training::dto::TrainingCreateRequest,
            training::dto::SharedTrainingCreateRequest,
            training::dto::EnrollTeamRequest,
            training::dto::TrainingResponse,
            training::dto::SharedTrainingResponse,
            training::dto::AttendanceEntry,
            training::dto::RecordAttendanceRequest,
            training::dto::AttendanceResponse,
            training::dto::SuccessTrainingResponse,
            training::dto::SuccessTrainingListResponse,
            training::dto::SuccessSharedTrainingListResponse,
            training::dto::SuccessAttendanceListResponse,
            exercise::dto::ExerciseResponse,
            exercise::dto::ExerciseSummaryResponse,
            exercise::dto::ExercisePositionResponse,
            exercise::dto::ExerciseVariationResponse,
            exercise::dto::ExerciseCreateRequest,
            exercise::dto::ExercisePositionRequest,
            exercise::dto::ExerciseVariationRequest,
            exercise::dto::CategoryResponse,
            exercise::dto::CategoryCreateRequest,
            exercise::dto::FocusPointResponse,
            exercise::dto::FocusPointCreateRequest,
            exercise::dto::DeleteExerciseResponse,
            exercise::dto::SuccessExerciseResponse,
            exercise::dto::SuccessExerciseListResponse,
            exercise::dto::SuccessDeleteExerciseResponse,
            exercise::dto::SuccessCategoryResponse,
            exercise::dto::SuccessCategoryListResponse,
            exercise::dto::SuccessFocusPointResponse,
            exercise::dto::SuccessFocusPointListResponse,
            utils::response::ErrorResponse,
            utils::response::ActionResult,
        )
    ),
    tags(
        (name = "Health", description = "헬스체크 API"),
        (name = "Setup", description = "DB 초기화 API"),
        (name = "Team", description = "팀(hold) API"),
        (name = "Player", description = "선수(spillere) API"),
        (name = "Training", description = "훈련(træninger) / 공동 훈련 / 출석 API"),
        (name = "Exercise", description = "훈련 과제(øvelser) 및 기준 데이터 API")
    )
)]
pub struct ApiDoc;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::health_check))
        .route("/api/setup-db", get(setup::setup_db))
        // 팀
        .route(
            "/api/hold",
            get(team::handler::list_teams).post(team::handler::create_team),
        )
        .route(
            "/api/hold/:team_id",
            get(team::handler::get_team)
                .put(team::handler::update_team)
                .delete(team::handler::delete_team),
        )
        .route(
            "/api/hold/:team_id/spillere",
            get(player::handler::list_players).post(player::handler::create_player),
        )
        .route(
            "/api/hold/:team_id/traeninger",
            get(training::handler::list_team_trainings).post(training::handler::create_training),
        )
        // 선수
        .route(
            "/api/spillere/:player_id",
            put(player::handler::update_player).delete(player::handler::delete_player),
        )
        .route(
            "/api/spillere/:player_id/positioner",
            put(player::handler::set_player_positions),
        )
        // 훈련
        .route(
            "/api/traeninger/faelles",
            get(training::handler::list_shared_trainings)
                .post(training::handler::create_shared_training),
        )
        .route(
            "/api/traeninger/:training_id",
            delete(training::handler::delete_training),
        )
        .route(
            "/api/traeninger/:training_id/hold",
            post(training::handler::enroll_team),
        )
        .route(
            "/api/traeninger/:training_id/fremmoede",
            get(training::handler::get_attendance).put(training::handler::record_attendance),
        )
        // 훈련 과제
        .route(
            "/api/oevelser",
            get(exercise::handler::list_exercises).post(exercise::handler::create_exercise),
        )
        .route(
            "/api/oevelser/:id",
            get(exercise::handler::get_exercise).delete(exercise::handler::delete_exercise),
        )
        .route(
            "/api/kategorier",
            get(exercise::handler::list_categories).post(exercise::handler::create_category),
        )
        .route(
            "/api/fokuspunkter",
            get(exercise::handler::list_focus_points).post(exercise::handler::create_focus_point),
        )
        .layer(middleware::from_fn(global::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
