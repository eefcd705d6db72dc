// ==========================================
// 全球服装生产管理系统 - 会话配置
// ==========================================
// 职责: 会话级配置 (管理员口令, 默认基准年份)
// 说明: 口令仅为简单共享口令, 不做真实鉴权
// ==========================================

use chrono::Datelike;

/// 管理员口令环境变量 (便于部署时覆盖默认值)
pub const ADMIN_SECRET_ENV: &str = "GARMENT_PMS_ADMIN_SECRET";

/// 默认管理员口令
const DEFAULT_ADMIN_SECRET: &str = "1234";

// ==========================================
// SessionConfig - 会话配置
// ==========================================
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// 管理员口令
    admin_secret: String,
    /// 仪表盘默认基准年份 (调用方也可显式传 None 看全年份)
    default_reference_year: i32,
}

impl SessionConfig {
    /// 从环境变量加载配置 (缺省时使用默认值)
    pub fn from_env() -> Self {
        let admin_secret = std::env::var(ADMIN_SECRET_ENV)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ADMIN_SECRET.to_string());

        Self {
            admin_secret,
            default_reference_year: chrono::Local::now().year(),
        }
    }

    /// 管理员口令
    pub fn admin_secret(&self) -> &str {
        &self.admin_secret
    }

    /// 仪表盘默认基准年份 (当年)
    pub fn default_reference_year(&self) -> i32 {
        self.default_reference_year
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig {
            admin_secret: DEFAULT_ADMIN_SECRET.to_string(),
            default_reference_year: 2026,
        };
        assert_eq!(config.admin_secret(), "1234");
        assert_eq!(config.default_reference_year(), 2026);
    }
}
