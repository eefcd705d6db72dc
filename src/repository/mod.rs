// ==========================================
// 全球服装生产管理系统 - 数据仓储层
// ==========================================
// 职责: 数据访问与映射
// 红线: Repository 不含业务逻辑
// ==========================================

pub mod capacity_log_repo;
pub mod error;
pub mod order_repo;
pub mod site_repo;

// 重导出核心类型
pub use capacity_log_repo::CapacityLogRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use order_repo::OrderRepository;
pub use site_repo::SiteRepository;
