//! Scenario 1: Access review.
//!
//! Builds the sample site, constructs one guardian per actor the way a web
//! layer would per request, and walks a grid of permission queries across
//! the spectrum: anonymous, newcomer, member, moderator, admin.

use tracing::info;

use agora_contracts::{actor::Actor, error::AgoraResult, target::Target};
use agora_guardian::Guardian;

use crate::fixtures::SampleSite;

pub fn run_scenario() -> AgoraResult<()> {
    info!("running access review scenario");
    let site = SampleSite::build();

    println!("Scenario: Access Review");
    println!("-----------------------");

    let actors = [
        ("anonymous", Actor::Anonymous),
        ("dana (newcomer)", Actor::Authenticated(site.newcomer.clone())),
        ("carol (member)", Actor::Authenticated(site.member.clone())),
        ("bob (moderator)", Actor::Authenticated(site.moderator.clone())),
        ("alice (admin)", Actor::Authenticated(site.admin.clone())),
    ];

    for (label, actor) in actors {
        let guardian = Guardian::new(actor, site.settings.clone());

        println!("{label}:");
        println!(
            "  sees #general:            {}",
            yes_no(guardian.can_see(Some(&Target::Category(&site.general))) == Some(true))
        );
        println!(
            "  sees #lounge (restricted): {}",
            yes_no(guardian.can_see(Some(&Target::Category(&site.lounge))) == Some(true))
        );
        println!(
            "  edits welcome topic:      {}",
            yes_no(guardian.can_edit(Some(&Target::Topic(&site.welcome_topic))))
        );
        println!(
            "  sees staff group:         {}",
            yes_no(guardian.can_see_group(Some(&site.staff_group)))
        );
        println!(
            "  invites to the forum:     {}",
            yes_no(guardian.can_invite_to_forum(None))
        );
        println!(
            "  messages carol:           {}",
            yes_no(guardian.can_send_private_message(Some(&Target::User(&site.member))))
        );
        println!(
            "  messages eve (suspended): {}",
            yes_no(guardian.can_send_private_message(Some(&Target::User(&site.suspended))))
        );
        println!(
            "  suspends eve:             {}",
            yes_no(guardian.can_suspend(Some(&site.suspended)))
        );
        println!(
            "  grants badges:            {}",
            yes_no(guardian.can_grant_badges())
        );
        println!();
    }

    Ok(())
}

fn yes_no(allowed: bool) -> &'static str {
    if allowed {
        "yes"
    } else {
        "no"
    }
}
