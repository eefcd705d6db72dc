// ==========================================
// 全球服装生产管理系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite (会话内存库)
// 系统定位: 产能台账与收益核算核心 (UI 层外置)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 业务规则
pub mod engine;

// API 层 - 业务接口
pub mod api;

// 会话层 - 会话状态装配
pub mod session;

// 数据库基础设施（连接初始化/建表/种子数据）
pub mod db;

// 配置层 - 会话配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{OrderStatus, PoolType, ProgressStage, Region};

// 领域实体
pub use domain::{
    CapacityEditRecord, CostBreakdown, EsgMetrics, Order, OrderDraft, Site, VendorAssignment,
};

// 引擎
pub use engine::{ProfitSummary, ProfitabilityEngine, UtilizationAggregator};

// API
pub use api::{
    AdmissionReceipt, ApiError, ApiResult, CapacityApi, DashboardApi, DashboardSnapshot, OrderApi,
};

// 会话状态
pub use session::SessionState;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "全球服装生产管理系统";

// ==========================================
// 预编译检查
// ==========================================
