use anyhow::Context;
use produtos_crud::{
    build_app,
    config::load_config,
    infrastructure::{connect_store, logger::Logger},
    AppState,
};
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_source) = load_config()?;
    config.validate()?;

    // guard 必须存活到进程结束
    let _log_guard = Logger::init(&config.logging)?;

    info!("启动 produtos-crud 服务...");
    match &config_source {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let store = connect_store(&config.store).await.map_err(|e| {
        error!("Failed to initialize store: {}", e);
        e
    })?;
    info!("文档存储已就绪: {:?}", config.store.backend);

    let app = build_app(AppState::new(store), &config);

    let addr = config.http.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定到 {addr}"))?;

    info!("🚀 服务运行在 http://{}", listener.local_addr()?);
    info!("   POST/GET         /funcionario");
    info!("   PUT/DELETE       /funcionario/:nome");
    info!("   POST/GET         /produto");
    info!("   GET/PUT/DELETE   /produto/:nome");
    info!("   GET              /health");
    if config.docs.enabled {
        info!("📖 API 文档: {}", config.docs.path);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("无法监听 Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => error!("无法监听 SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("收到关闭信号，正在停止服务...");
}
