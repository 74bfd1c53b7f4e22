use crate::utils::error::{QuickstartError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contents of the local auth file, e.g. `config/auth.toml`:
///
/// ```toml
/// auth_token = "${EDAM_AUTH_TOKEN}"
/// host = "sandbox.evernote.com"
///
/// [note]
/// title = "Hello from Rust"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub auth_token: Option<String>,
    pub host: Option<String>,
    pub user_store_url: Option<String>,
    pub note: Option<NoteSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteSection {
    pub title: Option<String>,
    pub body: Option<String>,
    pub notebook: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 檔案不存在時回傳 `None`，其他錯誤照常回報
    pub fn from_optional_file<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config file at {}", path.display());
            return Ok(None);
        }
        Self::from_file(path).map(Some)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QuickstartError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EDAM_AUTH_TOKEN})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QuickstartError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Token with unresolved `${VAR}` placeholders treated as absent.
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token
            .as_deref()
            .filter(|token| !is_unresolved_placeholder(token))
    }

    pub fn note_title(&self) -> Option<&str> {
        self.note.as_ref().and_then(|note| note.title.as_deref())
    }

    pub fn note_body(&self) -> Option<&str> {
        self.note.as_ref().and_then(|note| note.body.as_deref())
    }

    pub fn notebook(&self) -> Option<&str> {
        self.note.as_ref().and_then(|note| note.notebook.as_deref())
    }
}

fn is_unresolved_placeholder(value: &str) -> bool {
    value.contains("${")
}
