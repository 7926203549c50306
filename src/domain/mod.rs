//! # Domain Module
//!
//! Contains all business logic for the medication tracker.
//!
//! ## Module Organization
//!
//! - **models**: The `Medication` record and its supporting types
//! - **schedule**: Derivation of dosing slots from the per-day count
//! - **medication_form**: Add-medication draft state and validation
//! - **medication_service**: Collection management and persistence
//! - **presenter**: Per-day display state and refill warnings
//! - **clock** / **confirm**: Injected capabilities for "today" and
//!   destructive-action confirmation
//!
//! ## Core Concepts
//!
//! - **Time slot**: a named dosing occasion within a day (morning,
//!   afternoon, evening, bedtime)
//! - **Schedule**: the ordered slots assigned to a medication, derived
//!   solely from its per-day dose count
//! - **Active day**: a weekday on which a medication is taken
//! - **Refill alert threshold**: days of supply at or below which a
//!   warning is shown

pub mod clock;
pub mod confirm;
pub mod medication_form;
pub mod medication_service;
pub mod models;
pub mod presenter;
pub mod schedule;
