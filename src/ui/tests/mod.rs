//! UI module tests
//!
//! Test for the MVC Controller logic
