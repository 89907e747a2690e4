//! POS Admin Server - 管理后台 HTTP 服务
//!
//! 为管理面板提供员工、菜单、桌台和门店的 REST 接口，数据存储在嵌入式
//! SurrealDB 中。商品列表的筛选与前端共用 `shared::filter`。
//!
//! ```text
//! admin-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── services/      # Router 组装与中间件
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (models, repository, seed)
//! └── utils/         # 日志、校验、格式化
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use services::build_app;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// 加载 .env 并初始化日志
///
/// 生产环境输出 JSON 日志并写入 `{WORK_DIR}/logs`，开发环境仅输出到控制台。
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    if config.is_production() {
        config.ensure_work_dir_structure()?;
        let logs_dir = config.logs_dir();
        init_logger_with_file(&config.log_level, true, logs_dir.to_str())?;
    } else {
        init_logger(&config.log_level, false)?;
    }

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
  ____   ___  ____       _       _           _
 |  _ \ / _ \/ ___|     / \   __| |_ __ ___ (_)_ __
 | |_) | | | \___ \    / _ \ / _` | '_ ` _ \| | '_ \
 |  __/| |_| |___) |  / ___ \ (_| | | | | | | | | | |
 |_|    \___/|____/  /_/   \_\__,_|_| |_| |_|_|_| |_|
        v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
