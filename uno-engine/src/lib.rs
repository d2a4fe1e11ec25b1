//! A turn-based UNO-style rule engine.
//!
//! The engine validates and applies externally supplied moves, resolves
//! special-card effects, advances turn order, recycles the discard pile
//! into the draw pile, and reports termination and the winner. Move
//! selection itself belongs to the [`provider::DecisionProvider`] boundary;
//! saved games live behind [`replay`].

pub mod card;
pub mod config;
mod constants;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod provider;
pub mod replay;
pub mod turn;
