//! Integration tests for ai-reply-extract
//!
//! These tests run the complete locate pipeline end-to-end against page
//! snapshots shaped like each supported chat site.

mod edge_cases;
mod sites;
