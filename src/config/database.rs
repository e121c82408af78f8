use std::path::Path;
use std::time::Duration;

use crate::domain::{
    exercise::entity::{
        category, exercise, exercise_focus_point, exercise_position, exercise_variation,
        focus_point,
    },
    player::entity::{defensive_position, offensive_position, player},
    team::entity::team,
    training::entity::{training, training_attendance, training_team},
};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityName, Schema,
    Statement,
};
use tracing::info;

use super::AppConfig;

/// 설정에 따라 DB에 연결하고, 필요하면 스키마를 동기화합니다.
pub async fn establish_connection(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    let db = connect(&config.database_url).await?;

    if config.db_schema_update {
        create_tables(&db).await?;
    } else {
        info!("Skipping database schema synchronization (DB_SCHEMA_UPDATE is not true).");
    }

    Ok(db)
}

/// 인메모리 DB 커넥션 수명 (사실상 무제한)
///
/// sea-orm은 풀 수명 설정에 `None`을 받지 않으므로, sqlx 기본값(30분/10분)보다 충분히 긴 값을 지정합니다.
const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 10);

/// SQLite 연결 생성
///
/// - 파일 DB는 상위 디렉터리가 없으면 만듭니다.
/// - 인메모리 DB는 연결마다 별도 DB가 되므로 커넥션 1개로 고정하고, 풀이 그 연결을 닫지 않게 합니다.
/// - 외래 키 제약(ON DELETE CASCADE)이 동작하도록 `PRAGMA foreign_keys = ON`을 실행합니다.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let in_memory = database_url.contains(":memory:");

    if !in_memory {
        ensure_parent_dir(database_url).await?;
    }

    let db = Database::connect(connect_options(database_url, in_memory)).await?;
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA foreign_keys = ON".to_string(),
    ))
    .await?;

    info!(in_memory = in_memory, "Successfully connected to the database.");
    Ok(db)
}

/// 커넥션 풀 옵션
///
/// 인메모리 DB는 유일한 연결이 교체되면 데이터가 모두 사라지므로 수명/유휴 만료를 두지 않습니다.
fn connect_options(database_url: &str, in_memory: bool) -> ConnectOptions {
    let mut options = ConnectOptions::new(database_url.to_string());
    options
        .max_connections(if in_memory { 1 } else { 5 })
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    if in_memory {
        options
            .max_lifetime(IN_MEMORY_CONNECTION_LIFETIME)
            .idle_timeout(IN_MEMORY_CONNECTION_LIFETIME);
    }

    options
}

async fn ensure_parent_dir(database_url: &str) -> Result<(), DbErr> {
    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .split('?')
        .next()
        .unwrap_or_default();

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                DbErr::Custom(format!(
                    "failed to create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// 모든 테이블과 인덱스를 생성합니다. 이미 있으면 건너뛰므로 여러 번 호출해도 안전합니다.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    info!("Starting database schema synchronization...");

    // 외래 키 순서대로 생성 (부모 → 자식)

    // 1. 독립 엔티티
    create_table_if_not_exists(db, &schema, team::Entity).await?;
    create_table_if_not_exists(db, &schema, category::Entity).await?;
    create_table_if_not_exists(db, &schema, focus_point::Entity).await?;

    // 2. 1단계 종속
    create_table_if_not_exists(db, &schema, player::Entity).await?;
    create_table_if_not_exists(db, &schema, training::Entity).await?;
    create_table_if_not_exists(db, &schema, exercise::Entity).await?;

    // 3. 2단계 종속 및 연결 테이블
    create_table_if_not_exists(db, &schema, offensive_position::Entity).await?;
    create_table_if_not_exists(db, &schema, defensive_position::Entity).await?;
    create_table_if_not_exists(db, &schema, training_team::Entity).await?;
    create_table_if_not_exists(db, &schema, training_attendance::Entity).await?;
    create_table_if_not_exists(db, &schema, exercise_variation::Entity).await?;
    create_table_if_not_exists(db, &schema, exercise_position::Entity).await?;
    create_table_if_not_exists(db, &schema, exercise_focus_point::Entity).await?;

    // 연결 테이블 중복 방지
    create_unique_index_if_not_exists(
        db,
        "uq_player_offensive_position",
        "player_offensive_position",
        &["player_id", "position"],
    )
    .await?;
    create_unique_index_if_not_exists(
        db,
        "uq_player_defensive_position",
        "player_defensive_position",
        &["player_id", "position"],
    )
    .await?;
    create_unique_index_if_not_exists(
        db,
        "uq_training_team",
        "training_team",
        &["training_id", "team_id"],
    )
    .await?;
    create_unique_index_if_not_exists(
        db,
        "uq_training_attendance",
        "training_attendance",
        &["training_id", "player_id"],
    )
    .await?;
    create_unique_index_if_not_exists(
        db,
        "uq_exercise_focus_point",
        "exercise_focus_point",
        &["exercise_id", "focus_point_id"],
    )
    .await?;

    // 조회 경로 인덱스
    create_index_if_not_exists(db, "idx_player_team", "player", &["team_id"]).await?;
    create_index_if_not_exists(db, "idx_training_date", "training", &["is_shared", "date"]).await?;
    create_index_if_not_exists(
        db,
        "idx_exercise_position_exercise",
        "exercise_position",
        &["exercise_id", "variation_id"],
    )
    .await?;

    info!("Database schema synchronization completed.");
    Ok(())
}

async fn create_index_if_not_exists(
    db: &DatabaseConnection,
    index_name: &str,
    table_name: &str,
    columns: &[&str],
) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let sql = format!(
        "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
        index_name,
        table_name,
        columns.join(", ")
    );

    db.execute(Statement::from_string(backend, sql))
        .await
        .map(|_| ())
        .map_err(|e| {
            tracing::error!("Failed to create index {}: {}", index_name, e);
            e
        })
}

async fn create_unique_index_if_not_exists(
    db: &DatabaseConnection,
    index_name: &str,
    table_name: &str,
    columns: &[&str],
) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let sql = format!(
        "CREATE UNIQUE INDEX IF NOT EXISTS {} ON {} ({})",
        index_name,
        table_name,
        columns.join(", ")
    );

    db.execute(Statement::from_string(backend, sql))
        .await
        .map(|_| ())
        .map_err(|e| {
            tracing::error!("Failed to create unique index {}: {}", index_name, e);
            e
        })
}

async fn create_table_if_not_exists<E>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr>
where
    E: sea_orm::EntityTrait,
{
    let backend = db.get_database_backend();
    let table_name = entity.table_name().to_string();
    let create_stmt: Statement =
        backend.build(schema.create_table_from_entity(entity).if_not_exists());

    db.execute(create_stmt).await.map(|_| ()).map_err(|e| {
        tracing::error!("Failed to create table {}: {}", table_name, e);
        e
    })
}
