//! A rules engine for Secret Hitler, with computer-controlled players.
//!
//! [game::Game] holds the authoritative state of a single game and validates every command
//! issued against it. [cpu::CpuAgent] plays a seat on its own, and [session::Session] ties a
//! game to its computer players and publishes every change to it.

pub mod config;
pub mod cpu;
pub mod error;
pub mod game;
pub mod session;
