/// Scripted stand-in for the backend boundary, used by the façade tests.
///
/// Responses are handed out in the order they were queued; every
/// `(command, args)` pair that crosses the boundary is recorded so tests can
/// assert the exact wire shape of a call.
use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value;

use crate::modules::error::{CovaultError, CovaultResult};
use crate::modules::remote::RemoteCall;

#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<CovaultResult<Value>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockTransport {
    /// A transport that answers the next call with `payload`.
    pub fn replying(payload: Value) -> Self {
        let transport = Self::default();
        transport.push(Ok(payload));
        transport
    }

    /// A transport that fails the next call with `error`.
    pub fn failing(error: CovaultError) -> Self {
        let transport = Self::default();
        transport.push(Err(error));
        transport
    }

    pub fn push(&self, response: CovaultResult<Value>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    /// The single call a test expects to have been issued.
    pub fn only_call(&self) -> (String, Value) {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one remote call");
        calls.into_iter().next().unwrap()
    }
}

impl RemoteCall for MockTransport {
    async fn invoke(&self, command: &str, args: Value) -> CovaultResult<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((command.to_string(), args));

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }
}
