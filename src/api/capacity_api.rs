// ==========================================
// 全球服装生产管理系统 - 产能管理 API
// ==========================================
// 职责: 管理员产能查询/修改 + 修改历史查询
// 红线: 实际变更必须留痕; 提交当前值为无操作, 不污染日志
// ==========================================

use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::config::SessionConfig;
use crate::domain::capacity_log::CapacityEditRecord;
use crate::domain::site::Site;
use crate::domain::types::PoolType;
use crate::repository::capacity_log_repo::CapacityLogRepository;
use crate::repository::site_repo::SiteRepository;

// ==========================================
// CapacityApi - 产能管理 API
// ==========================================

/// 产能管理 API
///
/// 职责:
/// 1. 产能注册表查询 (基地列表, 单池上限)
/// 2. 管理员产能修改 (变更留痕, 幂等无操作)
/// 3. 修改历史查询
pub struct CapacityApi {
    /// 生产基地仓储
    site_repo: Arc<SiteRepository>,
    /// 产能修改日志仓储
    capacity_log_repo: Arc<CapacityLogRepository>,
    /// 会话配置 (管理员口令)
    config: Arc<SessionConfig>,
}

impl CapacityApi {
    /// 创建新的 CapacityApi 实例
    pub fn new(
        site_repo: Arc<SiteRepository>,
        capacity_log_repo: Arc<CapacityLogRepository>,
        config: Arc<SessionConfig>,
    ) -> Self {
        Self {
            site_repo,
            capacity_log_repo,
            config,
        }
    }

    /// 管理员口令校验 (简单共享口令)
    pub fn verify_admin(&self, secret: &str) -> bool {
        self.config.admin_secret() == secret
    }

    /// 查询全部生产基地
    pub fn list_sites(&self) -> ApiResult<Vec<Site>> {
        Ok(self.site_repo.find_all()?)
    }

    /// 查询指定基地/池的产能上限
    ///
    /// # 返回
    /// - Ok(limit): 当前线数上限
    /// - Err(NotFound): 基地不存在
    pub fn get_capacity(&self, site_code: &str, pool: PoolType) -> ApiResult<i64> {
        let site = self
            .site_repo
            .find_by_code(site_code)?
            .ok_or_else(|| ApiError::NotFound(format!("Site(id={})不存在", site_code)))?;
        Ok(site.pool_limit(pool))
    }

    /// 修改指定基地/池的产能上限
    ///
    /// # 参数
    /// - `site_code`: 基地代码
    /// - `pool`: 产能池
    /// - `new_lines`: 新线数 (>= 0)
    /// - `actor`: 操作人
    ///
    /// # 返回
    /// - Ok(true): 实际发生变更, 已追加审计记录
    /// - Ok(false): 新值等于当前值, 无操作且不留痕
    /// - Err(ValidationError): 新值为负
    /// - Err(NotFound): 基地不存在
    pub fn set_capacity(
        &self,
        site_code: &str,
        pool: PoolType,
        new_lines: i64,
        actor: &str,
    ) -> ApiResult<bool> {
        if new_lines < 0 {
            return Err(ApiError::ValidationError {
                reason: format!("产能线数不能为负: {}", new_lines),
                violations: vec![crate::api::error::ValidationViolation::new(
                    "new_lines",
                    "产能线数必须不小于0",
                )],
            });
        }

        let current = self.get_capacity(site_code, pool)?;
        if current == new_lines {
            // 幂等: 提交当前值不产生审计记录
            tracing::debug!(
                site_code,
                pool = pool.as_str(),
                new_lines,
                "产能值未变更, 跳过"
            );
            return Ok(false);
        }

        // 读旧值与写新值在仓储事务内完成
        let old_lines = self.site_repo.update_pool_lines(site_code, pool, new_lines)?;

        let record = CapacityEditRecord::new(site_code, pool, old_lines, new_lines, actor);
        self.capacity_log_repo.insert(&record)?;

        tracing::info!(
            site_code,
            pool = pool.as_str(),
            old_lines,
            new_lines,
            actor,
            "产能已修改并留痕"
        );
        Ok(true)
    }

    /// 查询产能修改历史 (按追加顺序)
    pub fn list_edit_history(&self) -> ApiResult<Vec<CapacityEditRecord>> {
        Ok(self.capacity_log_repo.find_all()?)
    }
}
