//! # agora-guardian
//!
//! The per-request authorization guardian for the Agora discussion
//! platform.
//!
//! ## Overview
//!
//! This crate provides [`Guardian`], the single decision point for every
//! (actor, action, target) question the platform asks: trust-level gating,
//! staff escalation, ownership, moderation, invitations, private
//! messaging, and type-specific see/edit/delete/create rules.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use agora_contracts::{actor::Actor, settings::SiteSettings};
//! use agora_guardian::Guardian;
//!
//! let guardian = Guardian::new(Actor::Authenticated(user), settings);
//! if guardian.can_edit(Some(&Target::Post(&post))) {
//!     // perform the edit, then record it through the audit sink
//! }
//! ```
//!
//! ## Dispatch model
//!
//! See/edit/delete/create resolve through an explicit rule table keyed by
//! (action, target kind, optional parent kind). A missing key means the
//! action is allowed: rules subtract permission from a permissive base.
//! Everything else is a named predicate with its policy spelled out in
//! `engine.rs`.

pub mod config;
mod domains;
pub mod engine;
pub mod rules;

pub use engine::Guardian;
pub use rules::{Action, RuleKey, RuleTable};

// ── Tests ─────────────────────────────────────────────────────────────────────
