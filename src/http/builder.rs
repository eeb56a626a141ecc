use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder};

use crate::env::resolver::VarResolver;
use crate::state::request::{ApiRequest, HttpMethod, RequestBody};

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
        HttpMethod::Head => Method::HEAD,
        HttpMethod::Options => Method::OPTIONS,
    }
}

/// Translate a request record into a reqwest builder.
///
/// Variables are resolved in the URL only. Disabled header and parameter
/// rows are dropped silently, and the body is attached only for methods
/// that carry one — a populated body on a GET is ignored.
pub fn build_request(
    client: &Client,
    request: &ApiRequest,
    resolver: &VarResolver,
) -> RequestBuilder {
    let url = resolver.resolve(&request.url);
    let mut builder = client.request(to_reqwest_method(request.method), url);

    for param in &request.params {
        if param.enabled && !param.key.is_empty() {
            builder = builder.query(&[(&param.key, &param.value)]);
        }
    }

    for header in &request.headers {
        if header.enabled && !header.key.is_empty() {
            builder = builder.header(&header.key, &header.value);
        }
    }

    if request.method.allows_body() {
        builder = match &request.body {
            RequestBody::None => builder,
            RequestBody::Json(json) => builder
                .body(json.clone())
                .header(CONTENT_TYPE, mime::APPLICATION_JSON.as_ref()),
            RequestBody::Raw(text) => builder
                .body(text.clone())
                .header(CONTENT_TYPE, mime::TEXT_PLAIN.as_ref()),
            RequestBody::Form(pairs) => {
                let form: Vec<(String, String)> = pairs
                    .iter()
                    .filter(|p| p.enabled)
                    .map(|p| (p.key.clone(), p.value.clone()))
                    .collect();
                builder.form(&form)
            }
            RequestBody::Binary(bytes) => builder.body(bytes.clone()),
        };
    }

    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialGenerator;
    use crate::state::environment::{EnvVariable, Environment};
    use crate::state::request::KeyValuePair;
    use chrono::DateTime;

    fn make_request(method: HttpMethod, url: &str) -> ApiRequest {
        let mut ids = SequentialGenerator::new("req");
        let mut request = ApiRequest::new(&mut ids, DateTime::UNIX_EPOCH);
        request.method = method;
        request.url = url.to_string();
        request
    }

    #[test]
    fn test_get_carries_no_body() {
        let mut request = make_request(HttpMethod::Get, "http://localhost/users");
        request.body = RequestBody::Json(r#"{"k":"v"}"#.to_string());

        let client = Client::new();
        let built = build_request(&client, &request, &VarResolver::default())
            .build()
            .unwrap();
        assert!(built.body().is_none());
        assert!(!built.headers().contains_key(CONTENT_TYPE));
    }

    #[test]
    fn test_post_carries_json_body_and_content_type() {
        let mut request = make_request(HttpMethod::Post, "http://localhost/posts");
        request.body = RequestBody::Json(r#"{"k":"v"}"#.to_string());

        let client = Client::new();
        let built = build_request(&client, &request, &VarResolver::default())
            .build()
            .unwrap();
        assert!(built.body().is_some());
        assert_eq!(
            built.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_disabled_rows_are_dropped() {
        let mut request = make_request(HttpMethod::Get, "http://localhost/users");
        request.headers = vec![
            KeyValuePair::new("x-on", "1"),
            KeyValuePair {
                key: "x-off".to_string(),
                value: "2".to_string(),
                enabled: false,
            },
        ];
        request.params = vec![
            KeyValuePair::new("page", "1"),
            KeyValuePair {
                key: "debug".to_string(),
                value: "true".to_string(),
                enabled: false,
            },
        ];

        let client = Client::new();
        let built = build_request(&client, &request, &VarResolver::default())
            .build()
            .unwrap();
        assert!(built.headers().contains_key("x-on"));
        assert!(!built.headers().contains_key("x-off"));
        assert_eq!(built.url().query(), Some("page=1"));
    }

    #[test]
    fn test_url_placeholders_are_resolved() {
        let mut ids = SequentialGenerator::new("var");
        let env = Environment {
            id: "env-1".to_string(),
            name: "Dev".to_string(),
            variables: vec![EnvVariable::new(&mut ids, "baseUrl", "http://localhost:3000")],
        };
        let resolver = VarResolver::from_environment(Some(&env));
        let request = make_request(HttpMethod::Get, "{{baseUrl}}/users");

        let client = Client::new();
        let built = build_request(&client, &request, &resolver).build().unwrap();
        assert_eq!(built.url().as_str(), "http://localhost:3000/users");
    }
}
