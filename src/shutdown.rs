use tokio::signal;
use tracing::{error, info};

/// Graceful shutdown 시그널 대기
///
/// SIGTERM 또는 SIGINT(Ctrl+C)를 받으면 반환하며, 서버는 진행 중인 요청을 마친 뒤 종료합니다.
/// 핸들러 등록에 실패한 시그널은 기다리지 않습니다.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Ctrl+C 핸들러 등록 실패");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "SIGTERM 핸들러 등록 실패");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Ctrl+C 수신"),
        _ = terminate => info!("SIGTERM 수신"),
    }

    info!("Graceful shutdown 시작");
}
