//! Conversions between domain types and the generated `rpc::cluster` wire
//! types. Errors are transmitted as strings on the wire (see `err` fields);
//! an empty string means no error.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::models::{Job, Node};

pub fn datetime_to_millis(dt: DateTime<Utc>) -> i64 {
    dt.timestamp_millis()
}

pub fn millis_to_datetime(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis).single().unwrap_or(Utc::now())
}

impl From<&Job> for rpc::cluster::Job {
    fn from(job: &Job) -> Self {
        rpc::cluster::Job {
            id: job.id.to_string(),
            percent: job.percent_complete,
            duration: job.duration_seconds,
            start_time_unix_ms: datetime_to_millis(job.start_time),
            finish_time_unix_ms: job.finish_time.map(datetime_to_millis),
        }
    }
}

impl TryFrom<rpc::cluster::Job> for Job {
    type Error = uuid::Error;

    fn try_from(proto: rpc::cluster::Job) -> Result<Self, Self::Error> {
        Ok(Job {
            id: Uuid::parse_str(&proto.id)?,
            percent_complete: proto.percent,
            start_time: millis_to_datetime(proto.start_time_unix_ms),
            duration_seconds: proto.duration,
            finish_time: proto.finish_time_unix_ms.map(millis_to_datetime),
        })
    }
}

impl From<&Node> for rpc::cluster::Node {
    fn from(node: &Node) -> Self {
        rpc::cluster::Node {
            id: node.id.to_string(),
            name: node.name.clone(),
            ip: node.ip.clone(),
            port: node.port.clone(),
            jobs_count: node.jobs_count,
            jobs: node.jobs.iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<rpc::cluster::Node> for Node {
    type Error = uuid::Error;

    fn try_from(proto: rpc::cluster::Node) -> Result<Self, Self::Error> {
        Ok(Node {
            id: Uuid::parse_str(&proto.id)?,
            name: proto.name,
            ip: proto.ip,
            port: proto.port,
            jobs_count: proto.jobs_count,
            jobs: proto.jobs.into_iter().filter_map(|j| j.try_into().ok()).collect(),
        })
    }
}
