//! Repository functions for the domain layer.
//!
//! Repos wrap the SeaORM adapters, convert rows into domain models and map
//! `DbErr` into `DomainError`.

pub mod cards;
pub mod drafts;
pub mod events;
pub mod packs;
pub mod seats;
pub mod users;
