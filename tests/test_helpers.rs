//! Test helpers and mocks shared by integration tests

#![allow(dead_code)]

use demo_api_client::{ApiClient, ClientFactory, ClientResult};
use mockall::mock;

mock! {
    pub Client {}
    impl ApiClient for Client {
        fn connect(&mut self) -> ClientResult<()>;
        fn send(&mut self, message: &str) -> ClientResult<()>;
        fn close(&mut self) -> ClientResult<()>;
    }
}

mock! {
    pub Factory {}
    impl ClientFactory for Factory {
        type Client = MockClient;
        fn create(&self) -> MockClient;
    }
}
