use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unit of simulated work living on a specific Worker.
///
/// `percent_complete` is monotonically non-decreasing; once it reaches 100,
/// `finish_time` is set and the Job becomes immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub percent_complete: f32,
    pub start_time: DateTime<Utc>,
    pub duration_seconds: f32,
    pub finish_time: Option<DateTime<Utc>>,
}

impl Job {
    pub fn new(id: Uuid, start_time: DateTime<Utc>) -> Self {
        Self {
            id,
            percent_complete: 0.0,
            start_time,
            duration_seconds: 0.0,
            finish_time: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.percent_complete >= 100.0
    }
}

/// A registered Worker as known to the Repository.
///
/// `jobs_count` and `jobs` are a cached, eventually-consistent mirror of the
/// Worker's own state, refreshed only by the Repository's sweep loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: Uuid,
    pub name: String,
    pub ip: String,
    pub port: String,
    pub jobs_count: i32,
    pub jobs: Vec<Job>,
}

impl Node {
    pub fn new(id: Uuid, name: String, ip: String, port: String) -> Self {
        Self {
            id,
            name,
            ip,
            port,
            jobs_count: 0,
            jobs: Vec::new(),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

/// Attributes supplied by a Worker registering itself with the Repository.
#[derive(Debug, Clone)]
pub struct NewNode {
    pub name: String,
    pub ip: String,
    pub port: String,
}
