use crate::config::SchoolConfig;
use crate::errors::GenerateError;
use reqwest::Client;
use serde::Deserialize;

pub const MEAL_SERVICE_API_URL: &str = "https://open.neis.go.kr/hub/mealServiceDietInfo";

const RESULT_OK: &str = "INFO-000";
const RESULT_NO_DATA: &str = "INFO-200";

/// One raw row from the meal API: a date, a meal-type code and the dish
/// markup. Fields default to empty so incomplete rows are skipped by the
/// transformer instead of failing the whole response.
#[derive(Debug, Clone, Deserialize)]
pub struct MealRow {
    #[serde(rename = "MLSV_YMD", default)]
    pub mlsv_ymd: String,
    #[serde(rename = "MMEAL_SC_CODE", default)]
    pub meal_code: String,
    #[serde(rename = "DDISH_NM", default)]
    pub dish_text: String,
}

/// Success envelope: `mealServiceDietInfo` is a two-element array where
/// element 0 carries `head` (with a `RESULT`) and element 1 carries `row`.
/// Error payloads drop the array and put `RESULT` at the top level.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "mealServiceDietInfo")]
    service: Option<Vec<ServiceBlock>>,
    #[serde(rename = "RESULT")]
    result: Option<ResultInfo>,
}

#[derive(Debug, Deserialize)]
struct ServiceBlock {
    #[serde(default)]
    head: Vec<HeadEntry>,
    #[serde(default)]
    row: Vec<MealRow>,
}

#[derive(Debug, Deserialize)]
struct HeadEntry {
    #[serde(rename = "RESULT")]
    result: Option<ResultInfo>,
}

#[derive(Debug, Clone, Deserialize)]
struct ResultInfo {
    #[serde(rename = "CODE", default)]
    code: String,
    #[serde(rename = "MESSAGE", default)]
    message: String,
}

/// Validate a response body and pull out the meal rows.
///
/// Only `INFO-000` and `INFO-200` result codes are accepted; `INFO-200`
/// ("no data") yields an empty row set rather than an error.
pub fn parse_meal_rows(body: &str) -> Result<Vec<MealRow>, GenerateError> {
    let envelope: Envelope = serde_json::from_str(body)
        .map_err(|err| GenerateError::Protocol(format!("invalid JSON: {err}")))?;

    let blocks = match envelope.service {
        Some(blocks) => blocks,
        None => {
            let message = envelope
                .result
                .map(|info| info.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| "missing mealServiceDietInfo payload".to_string());
            return Err(GenerateError::Protocol(message));
        }
    };

    let result = blocks
        .first()
        .and_then(|block| block.head.iter().find_map(|entry| entry.result.clone()))
        .or(envelope.result);

    if let Some(info) = &result {
        if !info.code.is_empty() && info.code != RESULT_OK && info.code != RESULT_NO_DATA {
            return Err(GenerateError::Service {
                code: info.code.clone(),
                message: info.message.clone(),
            });
        }
    }

    let rows = blocks
        .into_iter()
        .nth(1)
        .map(|block| block.row)
        .unwrap_or_default();
    Ok(rows)
}

/// Fetch all meal rows for the school across an inclusive 8-digit date range.
/// One request, no retries.
pub async fn fetch_meal_rows(
    client: &Client,
    api_url: &str,
    api_key: &str,
    school: &SchoolConfig,
    from_ymd: &str,
    to_ymd: &str,
    page_size: u32,
) -> Result<Vec<MealRow>, GenerateError> {
    let page_size = page_size.to_string();
    let params = [
        ("KEY", api_key),
        ("Type", "json"),
        ("pIndex", "1"),
        ("pSize", page_size.as_str()),
        ("ATPT_OFCDC_SC_CODE", school.education_office_code.as_str()),
        ("SD_SCHUL_CODE", school.school_code.as_str()),
        ("MLSV_FROM_YMD", from_ymd),
        ("MLSV_TO_YMD", to_ymd),
    ];

    let response = client.get(api_url).query(&params).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(GenerateError::BadStatus(status));
    }

    let body = response.text().await?;
    parse_meal_rows(&body)
}
