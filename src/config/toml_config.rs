use crate::core::range::{generate_sequence, Granularity, WeekSequence};
use crate::utils::error::{Result, WeekDateError};
use crate::utils::validation::{validate_date_order, validate_required_field, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeConfig {
    pub range: RangeSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeSection {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub granularity: Granularity,
}

impl RangeConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Loading range config from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path).map_err(WeekDateError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| WeekDateError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${REPORT_FROM})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| WeekDateError::ConfigValidationError {
            field: "environment".to_string(),
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let (from, to) = self.bounds()?;
        validate_date_order("range.to", from, to)
    }

    /// 取得區間起訖日
    pub fn bounds(&self) -> Result<(NaiveDate, NaiveDate)> {
        let from = validate_required_field("range.from", &self.range.from)?;
        let to = validate_required_field("range.to", &self.range.to)?;
        Ok((*from, *to))
    }

    pub fn granularity(&self) -> Granularity {
        self.range.granularity
    }

    /// 驗證後依設定的粒度產生序列
    pub fn generate(&self) -> Result<WeekSequence> {
        self.validate()?;
        let (from, to) = self.bounds()?;
        let sequence = generate_sequence(from, to, self.granularity())?;
        tracing::info!(
            "Generated {} {:?} entries for {} .. {}",
            sequence.len(),
            self.granularity(),
            from,
            to
        );
        Ok(sequence)
    }
}

impl Validate for RangeConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
