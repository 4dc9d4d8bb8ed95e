//! Tests for the game engine, grouped by the part of the rules they exercise.

#![cfg(test)]
#![allow(clippy::bool_assert_comparison)]

pub mod role_assignment;
