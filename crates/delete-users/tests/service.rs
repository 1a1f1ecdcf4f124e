//! Integration tests for the bulk delete service.
//!
//! These tests wire [`DeleteUsersService`] to in-memory gateways to check the
//! public surface end to end.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use delete_users::{
    BatchDeleteResponse, DeleteUsersError, DeleteUsersService, DeletionGateway,
    FixtureDeletionGateway, GatewayError, ResponseError,
};
use rstest::rstest;

/// Gateway replaying a canned JSON body and recording what it was sent.
struct JsonGateway {
    body: &'static str,
    submitted: Mutex<Vec<Vec<String>>>,
}

impl JsonGateway {
    fn new(body: &'static str) -> Self {
        Self {
            body,
            submitted: Mutex::new(Vec::new()),
        }
    }

    fn submitted(&self) -> Vec<Vec<String>> {
        self.submitted.lock().expect("submissions lock").clone()
    }
}

#[async_trait]
impl DeletionGateway for JsonGateway {
    async fn delete_accounts(&self, uids: &[String]) -> Result<BatchDeleteResponse, GatewayError> {
        self.submitted
            .lock()
            .expect("submissions lock")
            .push(uids.to_vec());
        Ok(BatchDeleteResponse::from_json(self.body)?)
    }
}

fn uids(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

#[rstest]
#[tokio::test]
async fn fixture_gateway_deletes_everything() {
    let service = DeleteUsersService::new(Arc::new(FixtureDeletionGateway));
    let outcome = service
        .delete_users(&uids(&["a", "b", "c"]))
        .await
        .expect("bulk delete succeeds");

    assert_eq!(outcome.success_count(), 3);
    assert!(outcome.is_complete_success());
}

#[rstest]
#[tokio::test]
async fn decoded_backend_errors_reach_the_caller() {
    let gateway = Arc::new(JsonGateway::new(
        r#"{"errors": [
            {"index": 2, "localId": "carol", "message": "USER_NOT_FOUND"},
            {"index": 0, "localId": "alice", "message": "INSUFFICIENT_PERMISSION"}
        ]}"#,
    ));
    let requested = uids(&["alice", "bob", "carol"]);

    let service = DeleteUsersService::new(Arc::clone(&gateway));
    let outcome = service
        .delete_users(&requested)
        .await
        .expect("bulk delete succeeds");

    assert_eq!(gateway.submitted(), vec![requested.clone()]);
    assert_eq!(outcome.success_count(), 1);
    assert_eq!(outcome.failure_count(), 2);
    let messages: Vec<&str> = outcome.errors().iter().map(|e| e.message()).collect();
    assert_eq!(messages, ["USER_NOT_FOUND", "INSUFFICIENT_PERMISSION"]);
    assert_eq!(
        outcome.failed_items(&requested),
        vec![&"carol".to_owned(), &"alice".to_owned()]
    );
}

#[rstest]
#[tokio::test]
async fn malformed_backend_body_surfaces_as_decode_error() {
    let gateway = Arc::new(JsonGateway::new("<html>bad gateway</html>"));

    let service = DeleteUsersService::new(gateway);
    let error = service
        .delete_users(&uids(&["alice"]))
        .await
        .expect_err("malformed body");

    assert!(
        matches!(
            error,
            DeleteUsersError::Gateway(GatewayError::Decode(ResponseError::Parse { .. }))
        ),
        "unexpected error: {error}"
    );
}
