use crate::dates::ymd_to_key;
use crate::dishes::parse_dish_list;
use crate::models::{MealType, MenuEntry};
use crate::neis::MealRow;
use std::collections::BTreeMap;

/// Fold raw API rows into a date-keyed menu map. Rows with an unrecognized
/// date or meal-type code are skipped. Duplicate (date, meal) pairs overwrite:
/// the last row wins, no merge.
pub fn rows_to_menus(rows: &[MealRow]) -> BTreeMap<String, MenuEntry> {
    let mut menus = BTreeMap::new();
    for row in rows {
        let date_key = ymd_to_key(&row.mlsv_ymd);
        if date_key.is_empty() {
            continue;
        }
        let meal = match MealType::from_code(&row.meal_code) {
            Some(meal) => meal,
            None => continue,
        };
        let entry: &mut MenuEntry = menus.entry(date_key).or_default();
        *entry.dishes_mut(meal) = parse_dish_list(&row.dish_text);
    }
    menus
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(ymd: &str, code: &str, dishes: &str) -> MealRow {
        MealRow {
            mlsv_ymd: ymd.to_string(),
            meal_code: code.to_string(),
            dish_text: dishes.to_string(),
        }
    }

    #[test]
    fn groups_rows_by_date_and_meal() {
        let rows = vec![
            row("20240110", "1", "보리밥"),
            row("20240110", "2", "김치(1.2)<br>된장국(5.6)"),
            row("20240111", "3", "불고기"),
        ];

        let menus = rows_to_menus(&rows);
        assert_eq!(menus.len(), 2);

        let first = &menus["2024-01-10"];
        assert_eq!(first.breakfast, vec!["보리밥"]);
        assert_eq!(first.lunch, vec!["김치", "된장국"]);
        assert!(first.dinner.is_empty());

        let second = &menus["2024-01-11"];
        assert_eq!(second.dinner, vec!["불고기"]);
    }

    #[test]
    fn duplicate_date_and_meal_keeps_the_later_row() {
        let rows = vec![
            row("20240110", "2", "첫번째"),
            row("20240110", "2", "두번째"),
        ];

        let menus = rows_to_menus(&rows);
        assert_eq!(menus["2024-01-10"].lunch, vec!["두번째"]);
    }

    #[test]
    fn skips_unrecognized_rows() {
        let rows = vec![
            row("2024011", "2", "잘린 날짜"),
            row("20240110", "9", "없는 코드"),
            row("", "", ""),
        ];

        assert!(rows_to_menus(&rows).is_empty());
    }

    #[test]
    fn keys_iterate_in_ascending_date_order() {
        let rows = vec![
            row("20240212", "2", "b"),
            row("20240110", "2", "a"),
            row("20240131", "2", "c"),
        ];

        let keys: Vec<_> = rows_to_menus(&rows).into_keys().collect();
        assert_eq!(keys, vec!["2024-01-10", "2024-01-31", "2024-02-12"]);
    }
}
