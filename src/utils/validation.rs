//! 输入校验工具函数
//!
//! 将表单中的原始文本转换为校验后的数值，拒绝非数字、非有限值和非正数

use crate::error::{Field, ValidationError};

/// 校验后的一次测量读数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub weight_kg: f64,
    pub height_m: f64,
}

/// 解析并校验体重和身高
///
/// # 参数
/// - `weight_text`: 体重文本（kg）
/// - `height_text`: 身高文本（m）
///
/// # 返回
/// - `Ok(Reading)`: 两个值都是正的有限数
/// - `Err(ValidationError)`: 第一个不合法的字段
pub fn parse_reading(weight_text: &str, height_text: &str) -> Result<Reading, ValidationError> {
    let weight_kg = parse_positive(Field::Weight, weight_text)?;
    let height_m = parse_positive(Field::Height, height_text)?;
    Ok(Reading {
        weight_kg,
        height_m,
    })
}

fn parse_positive(field: Field, text: &str) -> Result<f64, ValidationError> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|_| ValidationError::NotANumber {
        field,
        text: trimmed.to_string(),
    })?;

    // "inf" / "NaN" 能被 f64 解析，需单独拒绝
    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field,
            text: trimmed.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(value)
}

/// 查询类操作要求先填写名字
pub fn require_owner(name: &str) -> Result<&str, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingOwner);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_positive_numbers() {
        let reading = parse_reading(" 70 ", "1.75").unwrap();
        assert_eq!(reading.weight_kg, 70.0);
        assert_eq!(reading.height_m, 1.75);
    }

    #[test]
    fn test_rejects_zero_and_negative() {
        assert_eq!(
            parse_reading("0", "1.7"),
            Err(ValidationError::NotPositive {
                field: Field::Weight,
                value: 0.0
            })
        );
        assert_eq!(
            parse_reading("-5", "1.7"),
            Err(ValidationError::NotPositive {
                field: Field::Weight,
                value: -5.0
            })
        );
        assert!(matches!(
            parse_reading("70", "0"),
            Err(ValidationError::NotPositive {
                field: Field::Height,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_numeric_and_non_finite() {
        for bad in ["", "abc", "70kg", "inf", "NaN", "-inf"] {
            assert!(
                matches!(
                    parse_reading(bad, "1.7"),
                    Err(ValidationError::NotANumber {
                        field: Field::Weight,
                        ..
                    })
                ),
                "应拒绝体重输入 {:?}",
                bad
            );
        }
        assert!(matches!(
            parse_reading("70", "tall"),
            Err(ValidationError::NotANumber {
                field: Field::Height,
                ..
            })
        ));
    }

    #[test]
    fn test_require_owner() {
        assert_eq!(require_owner("  Alice "), Ok("Alice"));
        assert_eq!(require_owner("   "), Err(ValidationError::MissingOwner));
    }
}
