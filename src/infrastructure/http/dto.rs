//! Data Transfer Objects
//!
//! 路由参数 DTO 只负责按名字取值，参数顺序在命令/查询里定义

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::{
    AddCar, AddCarRecord, CreateUser, DeleteAsset, InitAssets, LedgerResponse, PayPoints,
    QueryAsset, ReceivePoints, TransferValue,
};
use crate::domain::LedgerArg;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

/// 账本调用结果
#[derive(Debug, Serialize)]
pub struct TransactionResult {
    #[serde(rename = "transactionId", skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub result: Value,
}

impl From<LedgerResponse> for TransactionResult {
    fn from(response: LedgerResponse) -> Self {
        Self {
            transaction_id: response.transaction_id,
            result: response.payload,
        }
    }
}

// ============================================================================
// abstore DTOs (query string)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InitParams {
    pub a: LedgerArg,
    pub aval: LedgerArg,
    pub b: LedgerArg,
    pub bval: LedgerArg,
}

impl From<InitParams> for InitAssets {
    fn from(p: InitParams) -> Self {
        Self {
            a: p.a,
            a_value: p.aval,
            b: p.b,
            b_value: p.bval,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InvokeParams {
    pub a: LedgerArg,
    pub b: LedgerArg,
    pub value: LedgerArg,
}

impl From<InvokeParams> for TransferValue {
    fn from(p: InvokeParams) -> Self {
        Self {
            from: p.a,
            to: p.b,
            value: p.value,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NameParams {
    pub name: LedgerArg,
}

impl From<NameParams> for QueryAsset {
    fn from(p: NameParams) -> Self {
        Self { name: p.name }
    }
}

impl From<NameParams> for DeleteAsset {
    fn from(p: NameParams) -> Self {
        Self { name: p.name }
    }
}

// ============================================================================
// Car DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddCarRequest {
    pub vin: LedgerArg,
    pub owner: LedgerArg,
    pub model: LedgerArg,
}

impl From<AddCarRequest> for AddCar {
    fn from(r: AddCarRequest) -> Self {
        Self {
            vin: r.vin,
            owner: r.owner,
            model: r.model,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddCarRecordRequest {
    pub vin: LedgerArg,
    pub record: LedgerArg,
}

impl From<AddCarRecordRequest> for AddCarRecord {
    fn from(r: AddCarRecordRequest) -> Self {
        Self {
            vin: r.vin,
            record: r.record,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VinParams {
    pub vin: LedgerArg,
}

// ============================================================================
// Points DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PointsRequest {
    pub vin: LedgerArg,
    pub points: LedgerArg,
}

impl From<PointsRequest> for ReceivePoints {
    fn from(r: PointsRequest) -> Self {
        Self {
            vin: r.vin,
            points: r.points,
        }
    }
}

impl From<PointsRequest> for PayPoints {
    fn from(r: PointsRequest) -> Self {
        Self {
            vin: r.vin,
            points: r.points,
        }
    }
}

// ============================================================================
// User DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    #[serde(rename = "userId")]
    pub user_id: LedgerArg,
    pub name: LedgerArg,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(r: CreateUserRequest) -> Self {
        Self {
            user_id: r.user_id,
            name: r.name,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserIdParams {
    #[serde(rename = "userId")]
    pub user_id: LedgerArg,
}
