//! HTTP API 路由
//!
//! | 前缀 | 模块 | 说明 |
//! |------|------|------|
//! | /health | [`health`] | 健康检查 |
//! | /employee | [`employees`] | 员工 |
//! | /menu | [`menu`] | 菜单 / 商品列表与筛选 |
//! | /table | [`tables`] | 桌台 |
//! | /branch | [`branches`] | 门店 |

pub mod branches;
pub mod employees;
pub mod health;
pub mod menu;
pub mod tables;
