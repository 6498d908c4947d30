//! The static data source: a mock catalog and history seed. Stands in for
//! the backend until the fetch API lands; everything resets on reload.

use chrono::NaiveDate;

use crate::redemption::RedemptionEntry;
use crate::redemption::RedemptionStatus;
use crate::reward::Reward;
use crate::reward::RewardCategory;
use crate::reward::RewardId;

/// The mock balance every session starts from.
pub const STARTING_BALANCE: u32 = 120;

/// The redeemable catalog, fixed for the session.
pub fn reward_catalog() -> Vec<Reward> {
    vec![
        Reward {
            id: RewardId(1),
            name: "Free Coffee".into(),
            description: "One regular coffee at any partner café".into(),
            points_cost: 100,
            category: RewardCategory::Food,
            image: "/assets/img/rewards/coffee.jpg".into(),
        },
        Reward {
            id: RewardId(2),
            name: "Haircut Discount".into(),
            description: "50% off a haircut at participating salons".into(),
            points_cost: 250,
            category: RewardCategory::Services,
            image: "/assets/img/rewards/haircut.jpg".into(),
        },
        Reward {
            id: RewardId(3),
            name: "Branded T-Shirt".into(),
            description: "Limited edition program t-shirt".into(),
            points_cost: 400,
            category: RewardCategory::Clothing,
            image: "/assets/img/rewards/tshirt.jpg".into(),
        },
        Reward {
            id: RewardId(4),
            name: "Weekly Bus Pass".into(),
            description: "Seven days of unlimited local bus travel".into(),
            points_cost: 150,
            category: RewardCategory::Transportation,
            image: "/assets/img/rewards/buspass.jpg".into(),
        },
    ]
}

/// Past redemptions shown on first load, newest first.
pub fn redemption_history_seed() -> Vec<RedemptionEntry> {
    vec![
        RedemptionEntry {
            id: 2,
            reward_name: "Free Coffee".into(),
            date: NaiveDate::from_ymd_opt(2026, 7, 21).expect("valid fixture date"),
            points_cost: 100,
            status: RedemptionStatus::Completed,
        },
        RedemptionEntry {
            id: 1,
            reward_name: "Weekly Bus Pass".into(),
            date: NaiveDate::from_ymd_opt(2026, 7, 3).expect("valid fixture date"),
            points_cost: 150,
            status: RedemptionStatus::Completed,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn catalog_ids_are_unique_and_costs_positive() {
        let catalog = reward_catalog();
        let ids: BTreeSet<_> = catalog.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), catalog.len());
        assert!(catalog.iter().all(|r| r.points_cost > 0));
    }

    #[test]
    fn history_seed_is_newest_first() {
        let seed = redemption_history_seed();
        assert!(seed.windows(2).all(|w| w[0].date >= w[1].date));
    }
}
