//! Cost derivation: campaign duration in inclusive days, the four-band hour
//! multiplier schedule, and the per-screen/grand-total breakdown.

use chrono::NaiveDate;
use screenbook_core::draft::CampaignDraft;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Derived cost for a single selected screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenCost {
    pub screen_id: String,
    pub screen_name: String,
    /// Segments purchased per day on this screen.
    pub slots_count: usize,
    /// Physical duplicates purchased at the site.
    pub quantity: u32,
    pub daily_cost: f64,
    pub total_cost: f64,
}

/// Full cost breakdown for a draft. Always recomputed from the draft,
/// never mutated directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingBreakdown {
    /// Campaign duration, inclusive of both endpoint dates.
    pub days: u32,
    pub screens: Vec<ScreenCost>,
    pub grand_total: f64,
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Price multiplier for one hourly segment. The four bands are half-open
/// and partition the full day with no gap or overlap.
pub fn hour_multiplier(hour: u8) -> f64 {
    match hour {
        6..=11 => 1.0,  // Morning (6AM - 12PM)
        12..=17 => 1.2, // Afternoon (12PM - 6PM)
        18..=21 => 1.5, // Evening (6PM - 10PM)
        _ => 0.8,       // Night (10PM - 6AM)
    }
}

/// Campaign duration in whole days, inclusive of both endpoints. A
/// single-day campaign (`end == start`) lasts one day.
pub fn campaign_days(start: NaiveDate, end: NaiveDate) -> u32 {
    (end - start).num_days().unsigned_abs() as u32 + 1
}

/// Derive the cost breakdown for the given draft.
///
/// With either date missing the draft is not priceable yet (steps are
/// navigable out of order), so the result degrades to an empty zero-valued
/// breakdown rather than an error. No rounding is applied anywhere in the
/// computation; formatting is left to the presentation layer.
pub fn compute_pricing(draft: &CampaignDraft) -> PricingBreakdown {
    let (Some(start), Some(end)) = (draft.start_date, draft.end_date) else {
        return PricingBreakdown::default();
    };
    let days = campaign_days(start, end);

    let mut screens = Vec::with_capacity(draft.selected_screens.len());
    let mut grand_total = 0.0;

    for screen in &draft.selected_screens {
        let hours = draft.slots_for(&screen.id);
        let daily_cost: f64 = hours
            .iter()
            .map(|&h| screen.base_price_per_hour * hour_multiplier(h))
            .sum();
        let quantity = draft.quantity_for(&screen.id);
        let total_cost = daily_cost * f64::from(days) * f64::from(quantity);
        grand_total += total_cost;

        screens.push(ScreenCost {
            screen_id: screen.id.clone(),
            screen_name: screen.name.clone(),
            slots_count: hours.len(),
            quantity,
            daily_cost,
            total_cost,
        });
    }

    PricingBreakdown {
        days,
        screens,
        grand_total,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use screenbook_core::types::{Screen, ScreenType};

    fn screen(id: &str, price: f64) -> Screen {
        Screen {
            id: id.to_string(),
            name: format!("Screen {}", id),
            location: "Mubrakiya".to_string(),
            governorate: "Capital".to_string(),
            country: "Kuwait".to_string(),
            screen_type: ScreenType::Outdoor,
            resolution: "1920x1080".to_string(),
            size: "40ft x 20ft".to_string(),
            total_quantity: 5,
            base_price_per_hour: price,
            audience: String::new(),
            description: String::new(),
            tags: Vec::new(),
            specs: Default::default(),
            metrics: Default::default(),
            demographics: Default::default(),
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_multiplier_band_edges() {
        assert_eq!(hour_multiplier(5), 0.8);
        assert_eq!(hour_multiplier(6), 1.0);
        assert_eq!(hour_multiplier(11), 1.0);
        assert_eq!(hour_multiplier(12), 1.2);
        assert_eq!(hour_multiplier(17), 1.2);
        assert_eq!(hour_multiplier(18), 1.5);
        assert_eq!(hour_multiplier(21), 1.5);
        assert_eq!(hour_multiplier(22), 0.8);
        assert_eq!(hour_multiplier(0), 0.8);
        assert_eq!(hour_multiplier(23), 0.8);
    }

    #[test]
    fn test_multiplier_partitions_the_day() {
        // Every hour lands in exactly one band; band sizes 6/6/4/8.
        let mut counts = std::collections::BTreeMap::new();
        for h in 0..24u8 {
            let m = hour_multiplier(h);
            assert!([0.8, 1.0, 1.2, 1.5].contains(&m), "hour {} -> {}", h, m);
            *counts.entry(m.to_string()).or_insert(0) += 1;
        }
        assert_eq!(counts["0.8"], 8);
        assert_eq!(counts["1"], 6);
        assert_eq!(counts["1.2"], 6);
        assert_eq!(counts["1.5"], 4);
    }

    #[test]
    fn test_days_are_inclusive_of_both_endpoints() {
        assert_eq!(campaign_days(date("2024-01-01"), date("2024-01-01")), 1);
        assert_eq!(campaign_days(date("2024-01-01"), date("2024-01-02")), 2);
        assert_eq!(campaign_days(date("2024-01-15"), date("2024-02-15")), 32);
    }

    #[test]
    fn test_missing_dates_degrade_to_zero_breakdown() {
        let mut draft = CampaignDraft::new();
        draft.select_screen(screen("SCR-001", 50.0));
        draft.toggle_hour("SCR-001", 8).unwrap();

        let breakdown = compute_pricing(&draft);
        assert_eq!(breakdown.days, 0);
        assert!(breakdown.screens.is_empty());
        assert_eq!(breakdown.grand_total, 0.0);
    }

    #[test]
    fn test_morning_hours_over_two_days() {
        let mut draft = CampaignDraft::new();
        draft.start_date = Some(date("2024-01-01"));
        draft.end_date = Some(date("2024-01-02"));
        draft.select_screen(screen("SCR-001", 50.0));
        for hour in [8, 9, 10] {
            draft.toggle_hour("SCR-001", hour).unwrap();
        }

        let breakdown = compute_pricing(&draft);
        assert_eq!(breakdown.days, 2);
        assert_eq!(breakdown.screens.len(), 1);

        let cost = &breakdown.screens[0];
        assert_eq!(cost.slots_count, 3);
        assert_eq!(cost.daily_cost, 150.0);
        assert_eq!(cost.total_cost, 300.0);
        assert_eq!(breakdown.grand_total, 300.0);
    }

    #[test]
    fn test_evening_hours_single_day() {
        let mut draft = CampaignDraft::new();
        draft.start_date = Some(date("2024-01-01"));
        draft.end_date = Some(date("2024-01-01"));
        draft.select_screen(screen("SCR-001", 50.0));
        for hour in [19, 20] {
            draft.toggle_hour("SCR-001", hour).unwrap();
        }

        let breakdown = compute_pricing(&draft);
        assert_eq!(breakdown.days, 1);
        assert_eq!(breakdown.screens[0].daily_cost, 150.0);
        assert_eq!(breakdown.screens[0].total_cost, 150.0);
    }

    #[test]
    fn test_quantity_multiplies_screen_total() {
        let mut draft = CampaignDraft::new();
        draft.start_date = Some(date("2024-01-01"));
        draft.end_date = Some(date("2024-01-01"));
        draft.select_screen(screen("SCR-001", 50.0));
        draft.toggle_hour("SCR-001", 8).unwrap();
        draft.set_quantity("SCR-001", 3).unwrap();

        let breakdown = compute_pricing(&draft);
        assert_eq!(breakdown.screens[0].quantity, 3);
        assert_eq!(breakdown.screens[0].daily_cost, 50.0);
        assert_eq!(breakdown.screens[0].total_cost, 150.0);
    }

    #[test]
    fn test_screen_without_slots_costs_nothing_but_is_listed() {
        let mut draft = CampaignDraft::new();
        draft.start_date = Some(date("2024-01-01"));
        draft.end_date = Some(date("2024-01-03"));
        draft.select_screen(screen("SCR-001", 50.0));
        draft.select_screen(screen("SCR-002", 30.0));
        draft.toggle_hour("SCR-001", 12).unwrap();

        let breakdown = compute_pricing(&draft);
        assert_eq!(breakdown.screens.len(), 2);
        assert_eq!(breakdown.screens[1].slots_count, 0);
        assert_eq!(breakdown.screens[1].total_cost, 0.0);
        assert_eq!(breakdown.grand_total, 50.0 * 1.2 * 3.0);
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let mut draft = CampaignDraft::new();
        draft.start_date = Some(date("2024-03-10"));
        draft.end_date = Some(date("2024-03-20"));
        draft.select_screen(screen("SCR-001", 25.0));
        draft.select_range("SCR-001", (6..=21).collect()).unwrap();

        let first = compute_pricing(&draft);
        let second = compute_pricing(&draft);
        assert_eq!(first.days, second.days);
        assert_eq!(first.grand_total, second.grand_total);
        assert_eq!(first.screens.len(), second.screens.len());
        for (a, b) in first.screens.iter().zip(&second.screens) {
            assert_eq!(a.daily_cost, b.daily_cost);
            assert_eq!(a.total_cost, b.total_cost);
        }
    }
}
