//! Menu API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /menu | GET | 商品列表 (ProductRecord) |
//! | /menu | POST | 创建商品 |
//! | /menu/query | POST | 按 FilterDescriptor 筛选 |
//! | /menu/filters | GET | 侧栏分组与表格列定义 |
//! | /menu/{id} | GET/PUT/DELETE | 单个商品 |
//! | /menu/{id}/detail | GET | 详情面板 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/menu", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/query", post(handler::query))
        .route("/filters", get(handler::filters))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/detail", get(handler::detail))
}
