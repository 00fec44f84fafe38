//! GraphQL 接口模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /graphql | POST | 执行查询和变更 | 可选 (Bearer) |
//! | /graphql | GET | Apollo Sandbox 调试界面 | 无 |
//!
//! # 操作列表
//!
//! - Query: `login`, `getAllEmployees`, `searchEmployeeByEid`,
//!   `searchEmployeeByDesignationOrDepartment`
//! - Mutation: `signup`, `addEmployee`, `updateEmployeeByEid`,
//!   `deleteEmployeeByEid`

pub mod handler;
pub mod mutation;
pub mod query;
pub mod types;

pub use mutation::Mutation;
pub use query::Query;
pub use types::EmployeeObject;

use async_graphql::{EmptySubscription, Schema};
use axum::{Extension, Router, routing::get};

use crate::core::ServerState;

/// 应用 Schema 类型
pub type AppSchema = Schema<Query, Mutation, EmptySubscription>;

/// 构建 Schema 并注入服务状态
pub fn build_schema(state: ServerState) -> AppSchema {
    Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// GraphQL 路由 - 公共路由 (令牌可选)
pub fn router(state: &ServerState) -> Router<ServerState> {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/graphql", get(handler::sandbox).post(handler::graphql))
        .layer(Extension(schema))
}
