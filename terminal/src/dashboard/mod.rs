//! # Dashboard Data
//!
//! Fixed demo records behind the Network Overview and User Terminal screens.
//! Nothing here is live; the only generated part is the revenue bar series,
//! rebuilt each time the overview is entered.

use rand::Rng;

/// Account shown in the dashboard sub-header
pub const ACCOUNT_BADGE: &str = "0x71C...3d92";

/// Revenue chart range chips. `1M` is the active one.
pub const REVENUE_RANGES: [&str; 4] = ["1D", "1W", "1M", "1Y"];
pub const ACTIVE_REVENUE_RANGE: &str = "1M";

pub const REVENUE_BARS: usize = 30;

pub const VAULT_BALANCE: &str = "$241,084.04";

pub const POOLS_REBALANCING: u32 = 4_821;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub positive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeCluster {
    pub location: &'static str,
    pub status: &'static str,
    /// Load percentage, 0..=100
    pub load: u8,
    pub warning: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetHolding {
    pub name: &'static str,
    pub amount: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakingPosition {
    pub strategy: &'static str,
    pub apy: &'static str,
    pub earnings: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivitySign {
    Credit,
    Debit,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityEntry {
    pub kind: &'static str,
    pub when: &'static str,
    pub value: &'static str,
}

impl ActivityEntry {
    /// Colour class from the leading sign of the value
    pub fn sign(&self) -> ActivitySign {
        if self.value.starts_with('+') {
            ActivitySign::Credit
        } else if self.value.starts_with('-') {
            ActivitySign::Debit
        } else {
            ActivitySign::Neutral
        }
    }
}

pub const STAT_CARDS: [StatCard; 2] = [
    StatCard {
        title: "Total Value Locked",
        value: "$12,482,001,492",
        change: "+2.4%",
        positive: true,
    },
    StatCard {
        title: "24h Volume",
        value: "$841,209,122",
        change: "-0.8%",
        positive: false,
    },
];

pub const NODE_CLUSTERS: [NodeCluster; 4] = [
    NodeCluster { location: "US-East-1", status: "Operational", load: 62, warning: false },
    NodeCluster { location: "EU-West-2", status: "Operational", load: 48, warning: false },
    NodeCluster { location: "AP-South-1", status: "Maintenance", load: 0, warning: true },
    NodeCluster { location: "Neural-Sync-0", status: "Synchronizing", load: 92, warning: false },
];

pub const ASSETS: [AssetHolding; 3] = [
    AssetHolding { name: "AE-CORE", amount: "12.42", value: "$84,201" },
    AssetHolding { name: "NEURAL-GAS", amount: "4,821.00", value: "$12,110" },
    AssetHolding { name: "ETH-WRAP", amount: "42.1", value: "$144,773" },
];

pub const STAKING_POSITIONS: [StakingPosition; 3] = [
    StakingPosition { strategy: "Aetheris-Prime", apy: "12.4%", earnings: "+$1,402", status: "Active" },
    StakingPosition { strategy: "Neural-Flash-LP", apy: "24.8%", earnings: "+$842", status: "Active" },
    StakingPosition { strategy: "Stable-Mesh", apy: "4.2%", earnings: "+$12", status: "Locked" },
];

pub const ACTIVITY: [ActivityEntry; 3] = [
    ActivityEntry { kind: "Deposit", when: "2h ago", value: "+12.4 AE" },
    ActivityEntry { kind: "Withdraw", when: "1d ago", value: "-0.5 ETH" },
    ActivityEntry { kind: "Stake", when: "3d ago", value: "12.4k AE" },
];

/// Bar heights in percent: `20 + sin(i·0.5)·40 + u·30`.
///
/// The sine term can pull early troughs below zero; callers clamp when drawing.
pub fn revenue_series<R: Rng + ?Sized>(rng: &mut R) -> Vec<f64> {
    (0..REVENUE_BARS)
        .map(|i| 20.0 + (i as f64 * 0.5).sin() * 40.0 + rng.random::<f64>() * 30.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_revenue_series_shape() {
        let mut rng = StdRng::seed_from_u64(4);
        let bars = revenue_series(&mut rng);
        assert_eq!(bars.len(), REVENUE_BARS);
        for (i, h) in bars.iter().enumerate() {
            let base = 20.0 + (i as f64 * 0.5).sin() * 40.0;
            assert!(*h >= base && *h < base + 30.0, "bar {} = {}", i, h);
        }
    }

    #[test]
    fn test_activity_sign() {
        assert_eq!(ACTIVITY[0].sign(), ActivitySign::Credit);
        assert_eq!(ACTIVITY[1].sign(), ActivitySign::Debit);
        assert_eq!(ACTIVITY[2].sign(), ActivitySign::Neutral);
    }

    #[test]
    fn test_only_maintenance_cluster_warns() {
        let warnings: Vec<_> = NODE_CLUSTERS.iter().filter(|n| n.warning).collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].location, "AP-South-1");
        assert_eq!(warnings[0].load, 0);
    }

    #[test]
    fn test_active_range_is_listed() {
        assert!(REVENUE_RANGES.contains(&ACTIVE_REVENUE_RANGE));
    }
}
