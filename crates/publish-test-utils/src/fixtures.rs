use chrono::{DateTime, TimeZone, Utc};
use publish_core::{Clock, PublishConfig, RawChainSettings};
use serde_json::json;

/// Well-known development key; never holds funds.
pub const TEST_PRIVATE_KEY: &str =
    "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

/// Address derived from [`TEST_PRIVATE_KEY`].
pub const TEST_ADDRESS: &str = "0x2c7536E3605D9C16a7a3D7b1898e529396a65c23";

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_instant())
}

/// Configuration with mixed-form chain settings and `README.md` docs.
pub fn sample_config() -> PublishConfig {
    PublishConfig {
        agent_name: "agent name".into(),
        display_name: "agent display name".into(),
        description: "some description".into(),
        long_description: Some("some long description".into()),
        agent_id: "0xagentId".into(),
        version: "0.1".into(),
        documentation: "README.md".into(),
        repository: Some("github.com/myrepository".into()),
        license_url: Some("github.com/myrepository".into()),
        promo_url: Some("github.com/myrepository".into()),
        cli_version: "0.2".into(),
        chain_ids: vec![1, 1337],
        external: false,
        chain_settings: Some(
            RawChainSettings::new()
                .with("default", json!({"shards": 1, "target": 1}))
                .with(1u64, json!({"shards": "5", "target": "10"}))
                .with("137", json!({"shards": "2", "targets": 3})),
        ),
    }
}
