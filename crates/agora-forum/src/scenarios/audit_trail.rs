//! Scenario 2: Audit trail.
//!
//! A staff session the way calling code runs one: ask the guardian first,
//! record the permitted action through the logger, then export the chain
//! and confirm its integrity.

use tracing::info;

use agora_contracts::{actor::Actor, error::AgoraResult};
use agora_audit::{ActionLogger, InMemoryActionLog};
use agora_guardian::Guardian;

use crate::fixtures::SampleSite;

pub fn run_scenario() -> AgoraResult<()> {
    info!("running audit trail scenario");
    let site = SampleSite::build();

    println!("Scenario: Audit Trail");
    println!("---------------------");

    let acting = Actor::Authenticated(site.admin.clone());
    let guardian = Guardian::new(acting.clone(), site.settings.clone());

    let store = InMemoryActionLog::new();
    let logger = ActionLogger::new(&acting, Box::new(store.clone()))?;

    // Each staff action is gated by the guardian before it is recorded.
    if guardian.can_suspend(Some(&site.suspended)) {
        let record = logger.log_user_suspend(Some(&site.suspended), Some("repeated spam"))?;
        println!("recorded: suspend eve ({})", record.id);
    }

    if guardian.can_change_trust_level(Some(&site.member)) {
        let record = logger.log_trust_level_change(Some(&site.member), 2, 3)?;
        println!("recorded: promote carol ({})", record.id);
    }

    let record = logger.log_site_setting_change(Some("title"), Some("Agora"), Some("Agora Beta"))?;
    println!("recorded: retitle site ({})", record.id);

    let record = logger.log_roll_up(&["10.0.0.0/8".to_string(), "192.168.0.0/16".to_string()])?;
    println!("recorded: roll up subnets ({})", record.id);

    let log = store.export();
    println!();
    println!("events in chain:  {}", log.events.len());
    println!("terminal hash:    {}", log.terminal_hash);
    println!(
        "chain integrity:  {}",
        if store.verify_integrity() { "ok" } else { "BROKEN" }
    );
    println!();

    Ok(())
}
