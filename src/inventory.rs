//! Inventory Derivations
//!
//! Pure helpers computing the filtered list and the total value.

use crate::models::Consumable;

/// Keep items whose name or reference contains `query`, case-insensitive.
/// An empty query keeps everything. Source order is preserved.
pub fn filter_items(items: &[Consumable], query: &str) -> Vec<Consumable> {
    if query.is_empty() {
        return items.to_vec();
    }
    let q = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.name.as_deref().unwrap_or("").to_lowercase().contains(&q)
                || item
                    .reference
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&q)
        })
        .cloned()
        .collect()
}

/// Total value of the whole collection, independent of any active filter.
pub fn total_value(items: &[Consumable]) -> f64 {
    // Folded from +0.0: f64's Sum starts at -0.0, which an empty
    // inventory would render as "-0.00 €".
    items
        .iter()
        .map(|item| item.quantity * item.price_eur)
        .fold(0.0, |acc, value| acc + value)
}

/// Two decimal places, euro-suffixed: `35.00 €`.
pub fn format_eur(value: f64) -> String {
    format!("{value:.2} €")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, name: &str, reference: &str, quantity: f64, price_eur: f64) -> Consumable {
        Consumable {
            id,
            name: Some(name.to_string()),
            reference: Some(reference.to_string()),
            quantity,
            price_eur,
        }
    }

    fn sample_inventory() -> Vec<Consumable> {
        vec![
            make_item(1, "Gants", "G-01", 10.0, 2.5),
            make_item(2, "Masques", "M-02", 100.0, 0.1),
        ]
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let items = sample_inventory();
        let filtered = filter_items(&items, "");
        assert_eq!(filtered, items);
    }

    #[test]
    fn query_matches_reference_case_insensitively() {
        let items = sample_inventory();
        let filtered = filter_items(&items, "g-01");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let items = sample_inventory();
        let filtered = filter_items(&items, "MASQ");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn unmatched_query_yields_empty_list_and_leaves_total_alone() {
        let items = sample_inventory();
        assert!(filter_items(&items, "zzz").is_empty());
        assert_eq!(format_eur(total_value(&items)), "35.00 €");
    }

    #[test]
    fn missing_name_and_reference_match_as_empty_strings() {
        let items = vec![Consumable {
            id: 9,
            name: None,
            reference: None,
            quantity: 1.0,
            price_eur: 1.0,
        }];
        // Empty query still matches, any non-empty query does not.
        assert_eq!(filter_items(&items, "").len(), 1);
        assert!(filter_items(&items, "a").is_empty());
    }

    #[test]
    fn total_sums_quantity_times_price() {
        assert_eq!(format_eur(total_value(&sample_inventory())), "35.00 €");
    }

    #[test]
    fn zeroed_fields_contribute_nothing_to_the_total() {
        let mut items = sample_inventory();
        // An item decoded from `quantity: null, price_eur: undefined`.
        items.push(Consumable {
            id: 3,
            name: Some("Divers".to_string()),
            reference: None,
            quantity: 0.0,
            price_eur: 0.0,
        });
        assert_eq!(format_eur(total_value(&items)), "35.00 €");
    }

    #[test]
    fn empty_collection_formats_as_zero() {
        assert!(total_value(&[]).is_sign_positive());
        assert_eq!(format_eur(total_value(&[])), "0.00 €");
    }
}
