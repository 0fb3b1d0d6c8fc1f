// BMI 分类器 - 固定阈值的纯函数

use std::fmt;
use std::str::FromStr;

/// BMI 分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl Category {
    /// 全部分类，按阈值从低到高
    pub const ALL: [Category; 4] = [
        Category::Underweight,
        Category::NormalWeight,
        Category::Overweight,
        Category::Obese,
    ];

    /// 展示文本，同时也是数据库中存储的值
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::NormalWeight => "Normal weight",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 无法识别的分类文本
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("未知的 BMI 分类: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// 计算 BMI：体重(kg) / 身高(m)²
pub fn bmi_of(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// 按固定阈值对 BMI 分类
///
/// 条件按顺序判断。24.9 <= bmi < 25 不满足任何前置分支，会落入 Obese，
/// 这一区间保持原样不做修正。
pub fn classify(bmi: f64) -> Category {
    if bmi < 18.5 {
        Category::Underweight
    } else if (18.5..24.9).contains(&bmi) {
        Category::NormalWeight
    } else if (25.0..29.9).contains(&bmi) {
        Category::Overweight
    } else {
        Category::Obese
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(classify(15.0), Category::Underweight);
        assert_eq!(classify(18.49), Category::Underweight);
        assert_eq!(classify(18.5), Category::NormalWeight);
        assert_eq!(classify(24.89), Category::NormalWeight);
        assert_eq!(classify(25.0), Category::Overweight);
        assert_eq!(classify(29.89), Category::Overweight);
        assert_eq!(classify(29.9), Category::Obese);
        assert_eq!(classify(42.0), Category::Obese);
    }

    #[test]
    fn test_gap_between_normal_and_overweight_falls_to_obese() {
        assert_eq!(classify(24.9), Category::Obese);
        assert_eq!(classify(24.95), Category::Obese);
        assert_eq!(classify(24.999), Category::Obese);
    }

    #[test]
    fn test_classify_is_pure_over_positive_inputs() {
        let weights = [0.5, 30.0, 55.5, 70.0, 90.0, 140.0, 400.0];
        let heights = [0.3, 1.2, 1.55, 1.75, 2.1, 2.5];

        for w in weights {
            for h in heights {
                let bmi = bmi_of(w, h);
                let first = classify(bmi);
                assert_eq!(first, classify(bmi));
                assert!(Category::ALL.contains(&first));
            }
        }
    }

    #[test]
    fn test_bmi_formula() {
        assert!((bmi_of(70.0, 1.75) - 22.857).abs() < 0.001);
        assert!((bmi_of(90.0, 1.75) - 29.388).abs() < 0.001);
    }

    #[test]
    fn test_category_text_round_trip() {
        assert_eq!("Normal weight".parse::<Category>(), Ok(Category::NormalWeight));
        assert_eq!(Category::Obese.to_string(), "Obese");
        assert!("normal weight".parse::<Category>().is_err());
    }
}
