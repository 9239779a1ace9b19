use crate::models::SchoolInfo;
use crate::storage::resolve_data_path;
use std::path::PathBuf;
use std::{env, str::FromStr};

const DEFAULT_SCHOOL_NAME: &str = "대전동신과학고등학교";
const DEFAULT_EDUCATION_OFFICE_CODE: &str = "G10";
const DEFAULT_SCHOOL_CODE: &str = "7430295";

/// Identity of the school whose menu is fetched and shown. Defaults match the
/// deployed site; override via `MENU_SCHOOL_NAME`, `MENU_EDU_OFFICE_CODE` and
/// `MENU_SCHOOL_CODE`.
#[derive(Debug, Clone)]
pub struct SchoolConfig {
    pub name: String,
    pub education_office_code: String,
    pub school_code: String,
}

impl SchoolConfig {
    pub fn from_env() -> Self {
        Self {
            name: env_or("MENU_SCHOOL_NAME", DEFAULT_SCHOOL_NAME),
            education_office_code: env_or("MENU_EDU_OFFICE_CODE", DEFAULT_EDUCATION_OFFICE_CODE),
            school_code: env_or("MENU_SCHOOL_CODE", DEFAULT_SCHOOL_CODE),
        }
    }

    pub fn info(&self) -> SchoolInfo {
        SchoolInfo {
            name: self.name.clone(),
            education_office_code: self.education_office_code.clone(),
            school_code: self.school_code.clone(),
        }
    }
}

/// Settings for one generate run. The API key comes from `MENU_API` and is
/// checked by the generator itself so that a missing credential fails before
/// any network call. `MENU_API_URL` exists for pointing tests at a stub
/// server.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub school: SchoolConfig,
    pub past_months: u32,
    pub future_months: u32,
    pub page_size: u32,
    pub output_path: PathBuf,
    pub api_key: Option<String>,
    pub api_url: String,
}

impl GenerateOptions {
    pub fn from_env() -> Self {
        Self {
            school: SchoolConfig::from_env(),
            past_months: env_parse("MENU_PAST_MONTHS", 1),
            future_months: env_parse("MENU_FUTURE_MONTHS", 1),
            page_size: env_parse("MENU_PAGE_SIZE", 100u32).max(1),
            output_path: resolve_data_path(),
            api_key: env::var("MENU_API").ok(),
            api_url: env_or("MENU_API_URL", crate::neis::MEAL_SERVICE_API_URL),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_parse<T: FromStr + Copy>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
