use admin_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 日志)
    setup_environment()?;

    print_banner();

    // 2. 加载配置
    let config = Config::from_env();
    tracing::info!(
        work_dir = %config.work_dir,
        environment = %config.environment,
        "🦀 POS admin server starting..."
    );

    // 3. 初始化服务器状态 (数据库、演示数据)
    let state = ServerState::initialize(&config).await?;

    // 4. 启动 HTTP 服务器
    let server = Server::new(state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
