use std::fmt::Debug;

use actix_http::{
    header::{HeaderMap, HeaderName, HeaderValue},
    StatusCode,
};
use actix_web::{body::MessageBody, dev::ServiceResponse, test};
use bytes::Bytes;
use serde::Deserialize;

pub struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body_bytes: Bytes,
}

impl TestResponse {
    pub(crate) async fn from_service_response<B>(response: ServiceResponse<B>) -> Self
    where
        B: MessageBody,
    {
        let status = response.status();
        let headers = response.headers().to_owned();
        let body_bytes = test::read_body(response).await;

        Self {
            status,
            headers,
            body_bytes,
        }
    }

    pub fn assert_status_equals(&self, status_code: StatusCode) {
        assert_eq!(self.status, status_code);
    }

    pub fn assert_header_exists<N>(&self, header_name: N)
    where
        N: Into<HeaderName>,
    {
        let header_name: HeaderName = header_name.into();

        self.headers.get(&header_name).unwrap_or_else(|| {
            panic!(
                "header {} does not exist on response",
                header_name.as_str()
            )
        });
    }

    pub fn assert_header_matches_value<N, V>(&self, header_name: N, header_value: V)
    where
        N: Into<HeaderName>,
        V: Into<HeaderValue>,
    {
        let header_name: HeaderName = header_name.into();
        let expected_header_value: HeaderValue = header_value.into();

        let actual_header_value = self.headers.get(&header_name).unwrap_or_else(|| {
            panic!(
                "header {} does not exist on response",
                header_name.as_str()
            )
        });

        assert_eq!(expected_header_value, actual_header_value);
    }

    pub fn json_body<'de, D>(&'de self) -> D
    where
        D: Deserialize<'de>,
    {
        serde_json::from_slice::<D>(&self.body_bytes).expect("failed to deserialize body as JSON")
    }

    pub fn assert_json_body_matches<'de, D>(&'de self, expected_content: D)
    where
        D: Deserialize<'de> + PartialEq + Eq + Debug,
    {
        let data = self.json_body::<D>();

        assert_eq!(data, expected_content);
    }
}
