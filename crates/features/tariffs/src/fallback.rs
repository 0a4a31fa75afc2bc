//! The embedded default tier table.
//!
//! Served when the backend cannot be reached: stale default pricing is
//! acceptable, a broken pricing page is not. Keep this table in sync with
//! the tiers provisioned in the backend.

use aivo_domain::tariff::TariffPlan;

/// The three default tiers, prices in UZS.
#[must_use]
pub fn default_tariffs() -> Vec<TariffPlan> {
    vec![
        TariffPlan {
            id: 1,
            name: "basic".to_owned(),
            price: 199_000.0,
            currency: "UZS".to_owned(),
            features: to_strings(&[
                "messages_limit_10000",
                "leads_limit_1000",
                "instagram_integration",
                "amocrm_integration",
                "telegram_integration",
                "task_automation",
                "ai_support_24_7",
                "multilingual_support",
                "analytics_panel",
            ]),
        },
        TariffPlan {
            id: 2,
            name: "standard".to_owned(),
            price: 399_000.0,
            currency: "UZS".to_owned(),
            features: to_strings(&[
                "messages_limit_30000",
                "leads_limit_3000",
                "instagram_integration",
                "amocrm_integration",
                "telegram_integration",
                "task_automation",
                "ai_support_24_7",
                "multilingual_support",
                "analytics_panel",
                "priority_support",
                "unlimited_integrations",
            ]),
        },
        TariffPlan {
            id: 3,
            name: "premium".to_owned(),
            price: 599_000.0,
            currency: "UZS".to_owned(),
            features: to_strings(&[
                "messages_limit_50000",
                "leads_limit_5000",
                "instagram_integration",
                "amocrm_integration",
                "telegram_integration",
                "task_automation",
                "ai_support_24_7",
                "multilingual_support",
                "analytics_panel",
                "account_management",
                "advanced_analytics",
                "custom_ai_training",
            ]),
        },
    ]
}

fn to_strings(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|key| (*key).to_owned()).collect()
}
