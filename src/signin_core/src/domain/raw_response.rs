/// Decoded JSON body of a 2xx response from the login endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    body: serde_json::Value,
}

impl RawResponse {
    pub fn new(body: serde_json::Value) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &serde_json::Value {
        &self.body
    }

    pub fn into_body(self) -> serde_json::Value {
        self.body
    }
}
