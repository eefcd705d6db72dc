// ==========================================
// 全球服装生产管理系统 - 订单草案校验器
// ==========================================
// 职责: 提交流程的 Draft -> Validated 转换
// 说明: 校验失败 (Rejected) 不产生任何落账副作用,
//       调用方回显字段错误后可重新提交
// ==========================================

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::domain::order::OrderDraft;

// ==========================================
// OrderDraftValidator - 订单草案校验器
// ==========================================
pub struct OrderDraftValidator {
    // 无状态校验器
}

impl OrderDraftValidator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 校验订单草案的必填字段与取值范围
    ///
    /// # 校验规则
    /// - buyer / style_no 非空白
    /// - quantity > 0
    /// - unit_price >= 0
    /// - lines_required >= 1
    /// - 成本明细 (若有) 各分项非负
    ///
    /// # 返回
    /// - Ok(()): 校验通过
    /// - Err(ValidationError): 携带全部字段级违规明细
    pub fn validate(&self, draft: &OrderDraft) -> ApiResult<()> {
        let mut violations = Vec::new();

        if draft.buyer.trim().is_empty() {
            violations.push(ValidationViolation::new("buyer", "买家不能为空"));
        }
        if draft.style_no.trim().is_empty() {
            violations.push(ValidationViolation::new("style_no", "款号不能为空"));
        }
        if draft.quantity <= 0 {
            violations.push(ValidationViolation::new("quantity", "数量必须大于0"));
        }
        if draft.unit_price < 0.0 {
            violations.push(ValidationViolation::new("unit_price", "单价不能为负"));
        }
        if draft.lines_required < 1 {
            violations.push(ValidationViolation::new(
                "lines_required",
                "需用线数必须不小于1",
            ));
        }
        if let Some(costs) = &draft.costs {
            if !costs.is_non_negative() {
                violations.push(ValidationViolation::new("costs", "成本分项不能为负"));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ApiError::ValidationError {
                reason: "请正确填写买家、款号与数量".to_string(),
                violations,
            })
        }
    }
}

impl Default for OrderDraftValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::PoolType;
    use chrono::NaiveDate;

    fn valid_draft() -> OrderDraft {
        OrderDraft::new(
            "ACME",
            "ST-001",
            1000,
            10.0,
            NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
            "VNM",
            PoolType::Main,
            "第一缝制厂",
            2,
        )
    }

    #[test]
    fn test_valid_draft_passes() {
        let validator = OrderDraftValidator::new();
        assert!(validator.validate(&valid_draft()).is_ok());
    }

    #[test]
    fn test_blank_buyer_rejected() {
        let validator = OrderDraftValidator::new();
        let mut draft = valid_draft();
        draft.buyer = "   ".to_string();
        let err = validator.validate(&draft).unwrap_err();
        match err {
            ApiError::ValidationError { violations, .. } => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "buyer");
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_multiple_violations_collected() {
        let validator = OrderDraftValidator::new();
        let mut draft = valid_draft();
        draft.style_no = String::new();
        draft.quantity = 0;
        draft.lines_required = 0;
        let err = validator.validate(&draft).unwrap_err();
        match err {
            ApiError::ValidationError { violations, .. } => {
                let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
                assert_eq!(fields, vec!["style_no", "quantity", "lines_required"]);
            }
            _ => panic!("Expected ValidationError"),
        }
    }
}
