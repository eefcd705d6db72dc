// ==========================================
// 全球服装生产管理系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口, 供外部 UI 层调用
// ==========================================

pub mod capacity_api;
pub mod dashboard_api;
pub mod error;
pub mod order_api;
pub mod validator;

// 重导出核心类型
pub use capacity_api::CapacityApi;
pub use dashboard_api::{DashboardApi, DashboardSnapshot, PoolUsage, SiteUtilization};
pub use error::{ApiError, ApiResult, ValidationViolation};
pub use order_api::{AdmissionReceipt, OrderApi};
pub use validator::OrderDraftValidator;
