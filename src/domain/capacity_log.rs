// ==========================================
// 全球服装生产管理系统 - 产能修改日志领域模型
// ==========================================
// 红线: 产能的每次实际变更必须留痕
// 用途: 管理员审计追踪 (修改历史页签)
// ==========================================

use crate::domain::types::PoolType;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// CapacityEditRecord - 产能修改记录
// ==========================================
// 生命周期: 产能实际变更时追加; 只读; 会话内不清理
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityEditRecord {
    // ===== 主键 =====
    pub log_id: String,            // 日志ID (UUID)

    // ===== 变更内容 =====
    pub edited_at: NaiveDateTime,  // 修改时间戳
    pub site_code: String,         // 生产基地代码
    pub pool: PoolType,            // 产能池
    pub old_lines: i64,            // 修改前线数
    pub new_lines: i64,            // 修改后线数

    // ===== 操作人 =====
    pub actor: String,             // 操作人 (管理员)
}

impl CapacityEditRecord {
    /// 创建新的产能修改记录
    ///
    /// # 参数
    /// - `site_code`: 基地代码
    /// - `pool`: 产能池
    /// - `old_lines`: 修改前线数
    /// - `new_lines`: 修改后线数
    /// - `actor`: 操作人
    pub fn new(site_code: &str, pool: PoolType, old_lines: i64, new_lines: i64, actor: &str) -> Self {
        Self {
            log_id: uuid::Uuid::new_v4().to_string(),
            edited_at: chrono::Utc::now().naive_utc(),
            site_code: site_code.to_string(),
            pool,
            old_lines,
            new_lines,
            actor: actor.to_string(),
        }
    }
}
