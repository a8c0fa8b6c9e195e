#![allow(dead_code)]

pub mod failing_store;
pub mod recording_notifier;
pub mod stub_server;
pub mod temp_db;
