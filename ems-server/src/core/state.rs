use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::services::{AuthService, EmployeeService};
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的共享引用
///
/// ServerState 是服务器的核心数据结构，持有所有服务的共享引用。
/// Clone 是浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | auth_service | AuthService | 登录、注册、令牌验证 |
/// | employee_service | EmployeeService | 员工记录管理 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 认证服务
    pub auth_service: AuthService,
    /// 员工服务
    pub employee_service: EmployeeService,
}

impl ServerState {
    /// 初始化所有服务
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(config.work_dir.as_str())
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {}", e)))?;

        let db_service = DbService::new(&config.db_path()).await?;
        let db = db_service.db();

        let jwt_service = JwtService::with_config(config.jwt.clone());
        let auth_service = AuthService::new(db.clone(), jwt_service);
        let employee_service = EmployeeService::new(db.clone());

        Ok(Self {
            config: config.clone(),
            db,
            auth_service,
            employee_service,
        })
    }

    /// 获取数据库连接
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
