use serde_json::Value;

use crate::{
    domain::{
        auth_outcome::{AuthOutcome, UserRecord},
        raw_response::RawResponse,
    },
    ports::services::TransportFailure,
};

const USER_FIELD: &str = "user";

/// Classify the result of a login request.
///
/// Only the presence of a truthy `user` field is inspected. A body that is
/// not a JSON object counts as a server error, as does any transport failure.
pub fn interpret(result: Result<RawResponse, TransportFailure>) -> AuthOutcome {
    let Ok(response) = result else {
        return AuthOutcome::ServerError;
    };

    let Value::Object(mut body) = response.into_body() else {
        return AuthOutcome::ServerError;
    };

    match body.remove(USER_FIELD) {
        Some(user) if is_truthy(&user) => AuthOutcome::Success(UserRecord::new(user)),
        _ => AuthOutcome::InvalidCredentials,
    }
}

// null, false, 0 and "" do not count as a user
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
