//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 파일 경로를 직접 지정하는 환경 변수
pub const CONFIG_ENV: &str = "HANGUL_SEARCH_CONFIG";

/// 설정 로드/저장 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 읽기/쓰기 실패
    Io(std::io::Error),
    /// JSON 파싱/직렬화 실패
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::Parse(s) => write!(f, "설정 파일 형식 오류: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

/// 검색 필터 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// 검색어에 영문이 있으면 두벌식 한글로 바꾼 검색어로도 매칭
    #[serde(default = "default_qwerty_fallback")]
    pub qwerty_fallback: bool,
    /// 출력할 최대 줄 수 (0 = 제한 없음)
    #[serde(default)]
    pub limit: usize,
}

fn default_qwerty_fallback() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            qwerty_fallback: default_qwerty_fallback(),
            limit: 0,
        }
    }
}

/// 설정 파일 경로: $HANGUL_SEARCH_CONFIG 또는 ~/.config/hangul-search/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("hangul-search").join("config.json")
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<SearchConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> SearchConfig {
    let path = config_path();
    match load_config_from(&path) {
        Ok(config) => config,
        Err(ConfigError::Io(_)) => SearchConfig::default(),
        Err(e) => {
            log::warn!("{} ({}), 기본 설정 사용", e, path.display());
            SearchConfig::default()
        }
    }
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(path: &Path, config: &SearchConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::Parse(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

/// 설정 파일 저장
pub fn save_config(config: &SearchConfig) -> Result<(), ConfigError> {
    save_config_to(&config_path(), config)
}
