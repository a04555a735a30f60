//! HTTP Routes
//!
//! API Endpoints:
//! - /init            GET   Init          (submit)  a, aval, b, bval
//! - /invoke          GET   Invoke        (submit)  a, b, value
//! - /query           GET   Query         (query)   name
//! - /delete          GET   Delete        (submit)  name
//! - /queryAll        GET   GetAllQuery   (query)
//! - /addCar          POST  AddCar        (submit)  vin, owner, model
//! - /addCarRecord    POST  AddCarRecord  (submit)  vin, record
//! - /getCar          GET   GetCar        (query)   vin（必填）
//! - /receivePoints   POST  ReceivePoints (submit)  vin, points
//! - /payPoints       POST  PayPoints     (submit)  vin, points
//! - /createUser      POST  CreateUser    (submit)  userId, name
//! - /getUser         GET   GetUser       (query)   userId（必填）
//! - /ping            GET   网关存活
//! - /ping/ledger     GET   账本服务健康检查
//!
//! 其余路径由 server 挂载的静态文件服务处理

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/ping/ledger", get(handlers::ping_ledger))
        .merge(asset_routes())
        .merge(car_routes())
        .merge(points_routes())
        .merge(user_routes())
}

/// abstore 键值路由
fn asset_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/init", get(handlers::init))
        .route("/invoke", get(handlers::invoke))
        .route("/query", get(handlers::query))
        .route("/delete", get(handlers::delete))
        .route("/queryAll", get(handlers::query_all))
}

/// Car 路由
fn car_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/addCar", post(handlers::add_car))
        .route("/addCarRecord", post(handlers::add_car_record))
        .route("/getCar", get(handlers::get_car))
}

/// Points 路由
fn points_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/receivePoints", post(handlers::receive_points))
        .route("/payPoints", post(handlers::pay_points))
}

/// User 路由
fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/createUser", post(handlers::create_user))
        .route("/getUser", get(handlers::get_user))
}
