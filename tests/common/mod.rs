// Shared test helpers

#![allow(dead_code)]

use goblin_monitor::models::*;

pub fn record(time: i64, speed: f64) -> RequestRecord {
    RequestRecord { time, speed }
}

pub fn snapshot(json: &str) -> Snapshot {
    Snapshot::from_json(json).expect("valid snapshot")
}

/// `Query: {ping: [{time: 0, speed: 10}, {time: 1500, speed: 20}]}`
pub const PING_SNAPSHOT: &str = r#"{
    "Query": { "ping": [ { "time": 0, "speed": 10 }, { "time": 1500, "speed": 20 } ] }
}"#;

/// One entrypoint plus one custom-type resolver.
pub const WIDGET_SNAPSHOT: &str = r#"{
    "Query": { "a": [ { "time": 0, "speed": 5 } ] },
    "Widget": { "resolve": [ { "time": 0, "speed": 10 }, { "time": 500, "speed": 30 } ] }
}"#;

pub const EMPTY_SNAPSHOT: &str = r#"{ "Query": {} }"#;
