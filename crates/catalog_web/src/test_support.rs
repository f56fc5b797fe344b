//! Fakes for the browser seams.

use crate::{
    config::Config,
    context::client::{Client, ClientBuilder},
    error::{WebError, WebResult},
    navigation::Navigator,
    storage::MemoryStore,
    transport::{HttpRequest, HttpResponse, Transport},
};
use futures_util::{future::LocalBoxFuture, FutureExt};
use serde_json::Value;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};
use tokio::sync::oneshot;

pub const BASE_URL: &str = "http://api.test";

pub fn client_with(transport: &Arc<MockTransport>, store: &MemoryStore) -> Client {
    ClientBuilder::new(Config::new(BASE_URL))
        .transport(transport.clone())
        .store(Arc::new(store.clone()))
        .build()
}

enum Reply {
    Ready(WebResult<HttpResponse>),
    Gated {
        started: oneshot::Sender<()>,
        reply: oneshot::Receiver<WebResult<HttpResponse>>,
    },
}

/// Answers requests from a queue, in order.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<HttpRequest>>,
    replies: Mutex<VecDeque<Reply>>,
}

/// Holds a queued reply back until released.
pub struct Gate {
    started: Option<oneshot::Receiver<()>>,
    reply: oneshot::Sender<WebResult<HttpResponse>>,
}

impl Gate {
    /// Resolves once the gated request has been sent.
    pub async fn sent(&mut self) {
        if let Some(started) = self.started.take() {
            let _ = started.await;
        }
    }

    pub fn release(self, status: u16, body: Value) {
        let _ = self.reply.send(Ok(json_response(status, &body)));
    }
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, status: u16, body: Value) {
        self.push(Reply::Ready(Ok(json_response(status, &body))));
    }

    pub fn reply_raw(&self, status: u16, body: &str) {
        self.push(Reply::Ready(Ok(HttpResponse {
            status,
            body: body.as_bytes().to_vec(),
        })));
    }

    pub fn fail(&self, message: &str) {
        self.push(Reply::Ready(Err(WebError::Transport {
            message: message.to_string(),
        })));
    }

    pub fn gate(&self) -> Gate {
        let (started_tx, started_rx) = oneshot::channel();
        let (reply_tx, reply_rx) = oneshot::channel();
        self.push(Reply::Gated {
            started: started_tx,
            reply: reply_rx,
        });
        Gate {
            started: Some(started_rx),
            reply: reply_tx,
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }

    fn push(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }
}

impl Transport for MockTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, WebResult<HttpResponse>> {
        self.requests.lock().unwrap().push(request);
        let reply = self.replies.lock().unwrap().pop_front();
        async move {
            match reply {
                Some(Reply::Ready(res)) => res,
                Some(Reply::Gated { started, reply }) => {
                    let _ = started.send(());
                    reply.await.unwrap_or_else(|_| {
                        Err(WebError::Transport {
                            message: "gate dropped".to_string(),
                        })
                    })
                }
                None => Err(WebError::Transport {
                    message: "no reply queued".to_string(),
                }),
            }
        }
        .boxed_local()
    }
}

fn json_response(status: u16, body: &Value) -> HttpResponse {
    HttpResponse {
        status,
        body: serde_json::to_vec(body).unwrap(),
    }
}

/// Remembers where it was asked to go.
#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_string());
    }
}
