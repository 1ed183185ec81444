//! Integration test modules.

mod gym_session_test;
mod menu_test;
