use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Meal slots as coded by the meal API: `1` breakfast, `2` lunch, `3` dinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "1" => Some(MealType::Breakfast),
            "2" => Some(MealType::Lunch),
            "3" => Some(MealType::Dinner),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "아침",
            MealType::Lunch => "점심",
            MealType::Dinner => "저녁",
        }
    }
}

/// One day's menu: an ordered dish list per meal slot, possibly empty.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MenuEntry {
    #[serde(default)]
    pub breakfast: Vec<String>,
    #[serde(default)]
    pub lunch: Vec<String>,
    #[serde(default)]
    pub dinner: Vec<String>,
}

impl MenuEntry {
    pub fn dishes(&self, meal: MealType) -> &[String] {
        match meal {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
        }
    }

    pub fn dishes_mut(&mut self, meal: MealType) -> &mut Vec<String> {
        match meal {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolInfo {
    pub name: String,
    pub education_office_code: String,
    pub school_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

/// The whole generated menu document, persisted as the JSON cache. Regenerated
/// wholesale on each fetch run and consumed read-only by the web handlers.
/// `menus` is keyed by date key, so iteration order is ascending by date.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MenuSnapshot {
    #[serde(default)]
    pub generated_at: String,
    #[serde(default)]
    pub menus: BTreeMap<String, MenuEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<SchoolInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

impl MenuSnapshot {
    pub fn available_dates(&self) -> Vec<String> {
        self.menus.keys().cloned().collect()
    }
}

/// Overview payload for the page: date bounds plus the date to show first.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotView {
    pub school_name: String,
    pub generated_at: String,
    pub updated_label: String,
    pub available_dates: Vec<String>,
    pub initial_date: Option<String>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MealView {
    pub meal: &'static str,
    pub label: &'static str,
    pub dishes: Vec<String>,
}

/// One rendered day. `available` is false when the cache has no entry for the
/// requested date; the page then shows `placeholder` instead of meal rows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayView {
    pub date: String,
    pub date_label: String,
    pub available: bool,
    pub meals: Vec<MealView>,
    pub placeholder: String,
    pub message: String,
}
