// 电影目录查询服务
//
// 本库提供电影查询的核心功能，包括：
// - 不完整发布日期的范围解析
// - 搜索条件到查询计划的构建
// - SQLite 数据存储
// - API 路由

pub mod api;
pub mod config;
pub mod database;
pub mod models;
pub mod services;
