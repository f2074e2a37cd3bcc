//! Integration tests for pget
//!
//! These tests use wiremock to create mock HTTP servers and run complete
//! crawls against them.

mod crawl_tests;
