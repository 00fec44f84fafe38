//! 服务层 - 服务器核心服务
//!
//! # 服务列表
//!
//! - [`AuthService`] - 登录、注册和令牌验证
//! - [`EmployeeService`] - 员工记录管理

pub mod auth;
pub mod employee;

pub use auth::AuthService;
pub use employee::EmployeeService;
