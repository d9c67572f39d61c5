use crate::config::OutputFormat;
use crate::core::detection::DetectionSettings;
use crate::domain::model::SumPolicy;
use crate::utils::error::{ListError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub summation: Option<SummationConfig>,
    pub output: Option<OutputConfig>,
    pub detection: Option<DetectionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummationConfig {
    pub policy: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    pub first_frame: Option<usize>,
    pub last_frame: Option<usize>,
    pub rotate_degrees: Option<u32>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ListError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ListError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LIST_POLICY})，未定義的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ListError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn policy(&self) -> Result<SumPolicy> {
        match self.summation.as_ref().and_then(|s| s.policy.as_deref()) {
            Some(policy) => policy.parse(),
            None => Ok(SumPolicy::default()),
        }
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        match self.output.as_ref().and_then(|o| o.format.as_deref()) {
            Some(format) => format.parse(),
            None => Ok(OutputFormat::default()),
        }
    }

    /// 需要 [detection] 區段，缺少的欄位使用預設值
    pub fn detection_settings(&self) -> Result<DetectionSettings> {
        let detection = validate_required_field("detection", &self.detection)?;
        let defaults = DetectionSettings::default();
        let settings = DetectionSettings {
            first_frame: detection.first_frame.unwrap_or(defaults.first_frame),
            last_frame: detection.last_frame.unwrap_or(defaults.last_frame),
            rotate_degrees: detection.rotate_degrees,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for TomlConfig {
    // 與存取方法共用解析與預設值，避免驗證和實際使用結果不一致
    fn validate(&self) -> Result<()> {
        self.policy()?;
        self.output_format()?;
        if self.detection.is_some() {
            self.detection_settings()?;
        }
        Ok(())
    }
}
