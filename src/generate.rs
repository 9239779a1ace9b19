use crate::config::GenerateOptions;
use crate::dates::{monthly_range, ymd_from_date};
use crate::errors::GenerateError;
use crate::models::{DateRange, MenuSnapshot};
use crate::neis::fetch_meal_rows;
use crate::storage::write_snapshot;
use crate::transform::rows_to_menus;
use chrono::{Local, SecondsFormat, Utc};
use reqwest::Client;
use tracing::info;

/// One fetch-and-write run: compute the month window, call the meal API once,
/// transform the rows and persist the snapshot. The credential is checked
/// first so a missing key fails before any network traffic and writes nothing.
pub async fn generate_menu_data(options: &GenerateOptions) -> Result<MenuSnapshot, GenerateError> {
    let api_key = match options.api_key.as_deref().filter(|key| !key.is_empty()) {
        Some(key) => key,
        None => return Err(GenerateError::MissingApiKey),
    };

    let today = Local::now().date_naive();
    let (from, to) = monthly_range(today, options.past_months, options.future_months);
    let from_ymd = ymd_from_date(from);
    let to_ymd = ymd_from_date(to);

    info!(
        "fetching meal rows for {} ({from_ymd}..{to_ymd})",
        options.school.name
    );

    let client = Client::new();
    let rows = fetch_meal_rows(
        &client,
        &options.api_url,
        api_key,
        &options.school,
        &from_ymd,
        &to_ymd,
        options.page_size,
    )
    .await?;

    let snapshot = MenuSnapshot {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        menus: rows_to_menus(&rows),
        school: Some(options.school.info()),
        date_range: Some(DateRange {
            from: from_ymd,
            to: to_ymd,
        }),
    };

    write_snapshot(&options.output_path, &snapshot).await?;
    info!(
        "menu cache written to {} ({} dates)",
        options.output_path.display(),
        snapshot.menus.len()
    );

    Ok(snapshot)
}
