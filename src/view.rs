use crate::dates::{date_key, parse_date_key};
use crate::models::{DayView, MealType, MealView, MenuSnapshot, SnapshotView};
use chrono::{DateTime, Datelike, Local, NaiveDate};

const WEEK_DAYS: [&str; 7] = [
    "일요일",
    "월요일",
    "화요일",
    "수요일",
    "목요일",
    "금요일",
    "토요일",
];

const MSG_NO_DATES: &str = "교육정보개방포털에서 비공개된 자료로 급식정보가 없습니다.";
const MSG_DATE_NOT_PROVIDED: &str = "교육정보개방포털에서 제공하지 않은 날짜입니다.";
const MSG_DATE_OK: &str = "선택한 날짜의 급식 정보를 확인했습니다.";
const PLACEHOLDER_NO_MENU: &str = "선택한 날짜의 급식 정보가 없습니다.";
const FALLBACK_DATE_LABEL: &str = "선택한 날짜";

/// The date shown first: today when the cache covers it, otherwise the
/// earliest available date. `None` means there is nothing to show at all.
pub fn initial_date(available: &[String], today_key: &str) -> Option<String> {
    if available.iter().any(|key| key == today_key) {
        return Some(today_key.to_string());
    }
    available.first().cloned()
}

pub fn snapshot_view(snapshot: &MenuSnapshot, today: NaiveDate, fallback_school: &str) -> SnapshotView {
    let available_dates = snapshot.available_dates();
    let initial = initial_date(&available_dates, &date_key(today));
    let message = if available_dates.is_empty() {
        MSG_NO_DATES.to_string()
    } else {
        String::new()
    };

    SnapshotView {
        school_name: snapshot
            .school
            .as_ref()
            .map(|school| school.name.clone())
            .unwrap_or_else(|| fallback_school.to_string()),
        generated_at: snapshot.generated_at.clone(),
        updated_label: format_updated_label(&snapshot.generated_at),
        available_dates,
        initial_date: initial,
        message,
    }
}

/// Render one day. A date the cache does not cover yields a placeholder view,
/// never an error; empty or garbage keys take the same path.
pub fn day_view(snapshot: &MenuSnapshot, key: &str) -> DayView {
    match snapshot.menus.get(key) {
        Some(entry) => DayView {
            date: key.to_string(),
            date_label: format_date_label(key),
            available: true,
            meals: MealType::ALL
                .iter()
                .map(|&meal| MealView {
                    meal: meal.key(),
                    label: meal.label(),
                    dishes: entry.dishes(meal).to_vec(),
                })
                .collect(),
            placeholder: String::new(),
            message: MSG_DATE_OK.to_string(),
        },
        None => DayView {
            date: key.to_string(),
            date_label: format_date_label(key),
            available: false,
            meals: Vec::new(),
            placeholder: PLACEHOLDER_NO_MENU.to_string(),
            message: MSG_DATE_NOT_PROVIDED.to_string(),
        },
    }
}

/// `2024년 01월 15일 (월요일)` for a valid key, a neutral fallback otherwise.
pub fn format_date_label(key: &str) -> String {
    match parse_date_key(key) {
        Some(date) => {
            let weekday = WEEK_DAYS[date.weekday().num_days_from_sunday() as usize];
            format!(
                "{}년 {:02}월 {:02}일 ({weekday})",
                date.year(),
                date.month(),
                date.day()
            )
        }
        None => FALLBACK_DATE_LABEL.to_string(),
    }
}

/// `2024-01-15 12:30 기준` in local time; empty when the timestamp is absent
/// or unparsable.
pub fn format_updated_label(timestamp: &str) -> String {
    if timestamp.is_empty() {
        return String::new();
    }
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => {
            let local = parsed.with_timezone(&Local);
            format!("{} 기준", local.format("%Y-%m-%d %H:%M"))
        }
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuEntry;

    fn snapshot_with_dates(dates: &[&str]) -> MenuSnapshot {
        let mut snapshot = MenuSnapshot {
            generated_at: "2024-01-15T03:00:00.000Z".to_string(),
            ..MenuSnapshot::default()
        };
        for date in dates {
            snapshot.menus.insert(
                date.to_string(),
                MenuEntry {
                    lunch: vec!["김치".to_string()],
                    ..MenuEntry::default()
                },
            );
        }
        snapshot
    }

    #[test]
    fn initial_date_prefers_today() {
        let available = vec!["2024-01-10".to_string(), "2024-01-11".to_string()];
        assert_eq!(
            initial_date(&available, "2024-01-11"),
            Some("2024-01-11".to_string())
        );
        assert_eq!(
            initial_date(&available, "2024-01-12"),
            Some("2024-01-10".to_string())
        );
        assert_eq!(initial_date(&[], "2024-01-12"), None);
    }

    #[test]
    fn snapshot_view_reports_empty_state() {
        let view = snapshot_view(
            &MenuSnapshot::default(),
            NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
            "테스트고등학교",
        );
        assert!(view.available_dates.is_empty());
        assert_eq!(view.initial_date, None);
        assert_eq!(view.message, MSG_NO_DATES);
        assert_eq!(view.school_name, "테스트고등학교");
        assert!(view.updated_label.is_empty());
    }

    #[test]
    fn snapshot_view_sorts_dates_and_formats_timestamp() {
        let snapshot = snapshot_with_dates(&["2024-01-11", "2024-01-10"]);
        let view = snapshot_view(
            &snapshot,
            NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
            "",
        );
        assert_eq!(view.available_dates, vec!["2024-01-10", "2024-01-11"]);
        assert_eq!(view.initial_date, Some("2024-01-10".to_string()));
        assert!(view.message.is_empty());
        assert!(view.updated_label.ends_with("기준"));
    }

    #[test]
    fn day_view_for_missing_date_is_a_placeholder() {
        let snapshot = snapshot_with_dates(&["2024-01-10", "2024-01-11"]);
        let view = day_view(&snapshot, "2024-01-12");
        assert!(!view.available);
        assert!(view.meals.is_empty());
        assert_eq!(view.placeholder, PLACEHOLDER_NO_MENU);
        assert_eq!(view.message, MSG_DATE_NOT_PROVIDED);
    }

    #[test]
    fn day_view_lists_all_three_meals_in_order() {
        let snapshot = snapshot_with_dates(&["2024-01-10"]);
        let view = day_view(&snapshot, "2024-01-10");
        assert!(view.available);
        let meals: Vec<_> = view.meals.iter().map(|meal| meal.meal).collect();
        assert_eq!(meals, vec!["breakfast", "lunch", "dinner"]);
        assert_eq!(view.meals[1].dishes, vec!["김치"]);
        assert!(view.meals[0].dishes.is_empty());
    }

    #[test]
    fn date_label_includes_weekday() {
        assert_eq!(format_date_label("2024-01-15"), "2024년 01월 15일 (월요일)");
        assert_eq!(format_date_label("nonsense"), FALLBACK_DATE_LABEL);
    }

    #[test]
    fn updated_label_is_empty_for_bad_timestamps() {
        assert_eq!(format_updated_label(""), "");
        assert_eq!(format_updated_label("yesterday"), "");
    }
}
