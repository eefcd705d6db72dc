// ==========================================
// 全球服装生产管理系统 - 生产基地领域模型
// ==========================================
// 红线: 两个产能池独立核算, 互不挪用
// 用途: 产能注册表, 仪表盘聚合基准
// ==========================================

use crate::domain::types::{PoolType, Region};
use serde::{Deserialize, Serialize};

// ==========================================
// Site - 生产基地
// ==========================================
// 生命周期: 会话初始化时由种子目录创建;
//           仅可通过管理员产能修改操作变更; 会话内不可删除
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    // ===== 主键 =====
    pub site_code: String,         // 基地代码 (如 VNM)

    // ===== 元数据 =====
    pub site_name: String,         // 基地名称
    pub region: Region,            // 所属区域
    pub currency: Option<String>,  // 当地币种 (仅展示用, 不参与核算)

    // ===== 产能参数 (生产线条数) =====
    pub main_lines: i64,           // 本厂线数 (>= 0)
    pub outsourced_lines: i64,     // 外协线数 (>= 0)
}

impl Site {
    /// 按池类型取产能上限
    pub fn pool_limit(&self, pool: PoolType) -> i64 {
        match pool {
            PoolType::Main => self.main_lines,
            PoolType::Outsourced => self.outsourced_lines,
        }
    }
}

// ==========================================
// 种子目录
// ==========================================

/// 种子基地目录
///
/// 会话初始化时写入注册表, 顺序即仪表盘展示顺序
pub fn seed_catalog() -> Vec<Site> {
    vec![
        Site {
            site_code: "VNM".to_string(),
            site_name: "越南".to_string(),
            region: Region::Asia,
            currency: Some("VND".to_string()),
            main_lines: 30,
            outsourced_lines: 20,
        },
        Site {
            site_code: "IDN".to_string(),
            site_name: "印度尼西亚".to_string(),
            region: Region::Asia,
            currency: Some("IDR".to_string()),
            main_lines: 25,
            outsourced_lines: 15,
        },
        Site {
            site_code: "MMR".to_string(),
            site_name: "缅甸".to_string(),
            region: Region::Asia,
            currency: Some("MMK".to_string()),
            main_lines: 20,
            outsourced_lines: 10,
        },
        Site {
            site_code: "GTM".to_string(),
            site_name: "危地马拉".to_string(),
            region: Region::CentralAmerica,
            currency: Some("GTQ".to_string()),
            main_lines: 20,
            outsourced_lines: 10,
        },
        Site {
            site_code: "NIC".to_string(),
            site_name: "尼加拉瓜".to_string(),
            region: Region::CentralAmerica,
            currency: Some("NIO".to_string()),
            main_lines: 20,
            outsourced_lines: 5,
        },
        Site {
            site_code: "HTI".to_string(),
            site_name: "海地".to_string(),
            region: Region::CentralAmerica,
            currency: Some("HTG".to_string()),
            main_lines: 10,
            outsourced_lines: 5,
        },
    ]
}
