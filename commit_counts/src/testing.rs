use crate::api::{Endpoint, Error, Payload, Result, Source};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// In-memory `Source` recording every requested endpoint.
/// Unknown endpoints answer 404, `unreachable` ones fail like a dropped connection.
#[derive(Default)]
pub(crate) struct FakeSource {
    responses: HashMap<Endpoint, Payload>,
    unreachable: HashSet<Endpoint>,
    requests: Mutex<Vec<Endpoint>>,
}

impl FakeSource {
    pub(crate) fn respond(mut self, endpoint: Endpoint, status: u16, body: &str) -> Self {
        self.responses.insert(endpoint, Payload::new(status, body.to_string()));
        self
    }

    pub(crate) fn unreachable(mut self, endpoint: Endpoint) -> Self {
        self.unreachable.insert(endpoint);
        self
    }

    pub(crate) fn requests(&self) -> Vec<Endpoint> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Source for FakeSource {
    async fn get(&self, endpoint: &Endpoint) -> Result<Payload> {
        self.requests.lock().unwrap().push(endpoint.clone());
        if self.unreachable.contains(endpoint) {
            return Err(Error::Transport {
                endpoint: endpoint.clone(),
                source: anyhow::anyhow!("connection reset by peer"),
            });
        }
        Ok(self
            .responses
            .get(endpoint)
            .cloned()
            .unwrap_or_else(|| Payload::new(404, r#"{"message": "Not Found"}"#.to_string())))
    }
}
