//! NATS implementation of [`crate::MessageBroker`].

use async_nats::Client;
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};

use crate::error::{BusError, BusResult};
use crate::event::{EventEnvelope, ReceivedMessage};
use crate::{MessageBroker, MessageStream};

pub struct NatsBroker {
    client: Client,
}

impl NatsBroker {
    pub async fn connect(url: &str) -> BusResult<Self> {
        let client = async_nats::connect(url)
            .await
            .map_err(|source| BusError::Connect {
                url: url.to_string(),
                source,
            })?;

        Ok(Self { client })
    }

    pub async fn connect_with_name(url: &str, name: &str) -> BusResult<Self> {
        let client = async_nats::ConnectOptions::new()
            .name(name)
            .connect(url)
            .await
            .map_err(|source| BusError::Connect {
                url: url.to_string(),
                source,
            })?;

        Ok(Self { client })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl MessageBroker for NatsBroker {
    #[instrument(skip(self, event), fields(subject = %subject))]
    async fn publish<T: Serialize + Send + Sync>(
        &self,
        subject: &str,
        event: &EventEnvelope<T>,
    ) -> BusResult<()> {
        let payload = serde_json::to_vec(event)?;
        self.client
            .publish(subject.to_string(), payload.into())
            .await
            .map_err(|source| BusError::Publish {
                subject: subject.to_string(),
                source,
            })?;

        debug!(event_id = %event.id, "published event");
        Ok(())
    }

    async fn subscribe(&self, subject: &str) -> BusResult<Box<dyn MessageStream>> {
        let subscriber = self
            .client
            .subscribe(subject.to_string())
            .await
            .map_err(|source| BusError::Subscribe {
                subject: subject.to_string(),
                source,
            })?;

        Ok(Box::new(NatsMessageStream { subscriber }))
    }

    #[instrument(skip(self, request), fields(subject = %subject))]
    async fn request<T: Serialize + Send + Sync, R: DeserializeOwned>(
        &self,
        subject: &str,
        request: &EventEnvelope<T>,
    ) -> BusResult<R> {
        let payload = serde_json::to_vec(request)?;
        let response = self
            .client
            .request(subject.to_string(), payload.into())
            .await
            .map_err(|source| BusError::Request {
                subject: subject.to_string(),
                source,
            })?;

        Ok(serde_json::from_slice(&response.payload)?)
    }

    async fn queue_subscribe(
        &self,
        subject: &str,
        queue_group: &str,
    ) -> BusResult<Box<dyn MessageStream>> {
        let subscriber = self
            .client
            .queue_subscribe(subject.to_string(), queue_group.to_string())
            .await
            .map_err(|source| BusError::Subscribe {
                subject: subject.to_string(),
                source,
            })?;

        Ok(Box::new(NatsMessageStream { subscriber }))
    }
}

struct NatsMessageStream {
    subscriber: async_nats::Subscriber,
}

#[async_trait]
impl MessageStream for NatsMessageStream {
    async fn next(&mut self) -> Option<ReceivedMessage> {
        use futures::StreamExt;

        self.subscriber.next().await.map(|msg| ReceivedMessage {
            subject: msg.subject.to_string(),
            payload: msg.payload.to_vec(),
            reply: msg.reply.map(|s| s.to_string()),
        })
    }
}
