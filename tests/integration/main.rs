//! Integration tests against a mock Graph API server.

mod error_handling;
mod mock_server;
mod sending;
