//! EMS Server - 员工管理系统后端
//!
//! # 架构概述
//!
//! 本模块是 EMS Server 的主入口，提供以下核心功能：
//!
//! - **GraphQL API** (`api`): 登录、注册与员工增删改查
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **认证** (`auth`): JWT + Argon2 认证体系
//! - **业务服务** (`services`): 认证与员工业务逻辑
//!
//! # 模块结构
//!
//! ```text
//! ems-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证
//! ├── services/      # 业务逻辑
//! ├── api/           # GraphQL 路由和处理器
//! ├── utils/         # 错误类型、日志
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use services::{AuthService, EmployeeService};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv, 工作目录, 日志)
///
/// 生产环境下日志写入滚动文件, 其他环境只输出到终端。
pub fn setup_environment() -> Result<(), AppError> {
    // .env 文件是可选的
    dotenv::dotenv().ok();

    let config = Config::from_env();

    std::fs::create_dir_all(&config.work_dir).map_err(|e| {
        AppError::internal(format!(
            "Failed to create work dir {}: {}",
            config.work_dir, e
        ))
    })?;

    if config.is_production() {
        let log_dir = config.log_dir();
        std::fs::create_dir_all(&log_dir)
            .map_err(|e| AppError::internal(format!("Failed to create log dir {}: {}", log_dir, e)))?;
        init_logger_with_file(None, Some(&log_dir));
    } else {
        init_logger();
    }

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ______ __  ___ _____
   / ____//  |/  // ___/
  / __/  / /|_/ / \__ \
 / /___ / /  / / ___/ /
/_____//_/  /_/ /____/

  Employee Management Server
    "#
    );
}
