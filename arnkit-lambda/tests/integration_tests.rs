#[cfg(test)]
mod tests {
    use lambda_http::{Body, Response};
    use serde_json::{json, Value};

    use arnkit_lambda::router::handle_lambda;
    use arnkit_shared::utilities::test::{attach_lambda_context, json_request, lambda_context_with_arn};

    fn response_json(response: &Response<Body>) -> Value {
        match response.body() {
            Body::Text(body) => serde_json::from_str(body).unwrap(),
            _ => panic!("Response body is not text"),
        }
    }

    #[tokio::test]
    async fn status_path_reports_ok() {
        let request = json_request("GET", "/dev/status", json!({}));

        let response = handle_lambda(request).await.unwrap();

        assert_eq!(response.status(), 200);
        let body = response_json(&response);
        assert_eq!(body["status"], "OK");
    }

    #[tokio::test]
    async fn resolve_uses_the_invocation_context() {
        let request = attach_lambda_context(
            json_request(
                "POST",
                "/dev/arn/resolve",
                json!({"service": "lambda", "name": "billing-report"}),
            ),
            lambda_context_with_arn("arn:aws:lambda:eu-west-2:210987654321:function:arnkit-lambda"),
        );

        let response = handle_lambda(request).await.unwrap();

        assert_eq!(response.status(), 200);
        let body = response_json(&response);
        assert_eq!(
            body["arn"],
            "arn:aws:lambda:eu-west-2:210987654321:function:billing-report"
        );
    }

    #[tokio::test]
    async fn resolve_prefers_explicit_region_and_account() {
        let request = json_request(
            "POST",
            "/prod/arn/resolve",
            json!({
                "service": "states",
                "name": "order-flow",
                "region": "us-east-1",
                "account_id": "123456789012"
            }),
        );

        let response = handle_lambda(request).await.unwrap();

        assert_eq!(response.status(), 200);
        let body = response_json(&response);
        assert_eq!(
            body["arn"],
            "arn:aws:states:us-east-1:123456789012:stateMachine:order-flow"
        );
    }

    #[tokio::test]
    async fn resolve_builds_role_arns_without_a_region() {
        let request = json_request(
            "POST",
            "/dev/arn/resolve",
            json!({"service": "iam", "name": "deployer", "account_id": "123456789012"}),
        );

        let response = handle_lambda(request).await.unwrap();

        assert_eq!(response.status(), 200);
        let body = response_json(&response);
        assert_eq!(body["arn"], "arn:aws:iam::123456789012:role/deployer");
    }

    #[tokio::test]
    async fn resolve_passes_qualified_arns_through() {
        let already = "arn:aws:states:us-east-1:123456789012:stateMachine:already";
        let request = json_request(
            "POST",
            "/dev/arn/resolve",
            json!({"service": "states", "name": already}),
        );

        let response = handle_lambda(request).await.unwrap();

        assert_eq!(response.status(), 200);
        let body = response_json(&response);
        assert_eq!(body["arn"], already);
    }

    #[tokio::test]
    async fn resolve_rejects_unknown_services() {
        let request = json_request(
            "POST",
            "/dev/arn/resolve",
            json!({"service": "dynamodb", "name": "orders"}),
        );

        let response = handle_lambda(request).await.unwrap();

        assert_eq!(response.status(), 400);
        let body = response_json(&response);
        assert_eq!(body["error"], "Unknown service: dynamodb");
    }

    #[tokio::test]
    async fn resolve_requires_a_name() {
        let request = json_request("POST", "/dev/arn/resolve", json!({"service": "lambda"}));

        let response = handle_lambda(request).await.unwrap();

        assert_eq!(response.status(), 400);
        let body = response_json(&response);
        assert_eq!(body["error"], "Missing name");
    }

    #[tokio::test]
    async fn decompose_returns_the_sections() {
        let request = json_request(
            "POST",
            "/dev/arn/decompose",
            json!({"arn": "arn:aws:lambda:us-east-1:123456789012:function:my-fn:PROD"}),
        );

        let response = handle_lambda(request).await.unwrap();

        assert_eq!(response.status(), 200);
        let body = response_json(&response);
        assert_eq!(body["partition"], "aws");
        assert_eq!(body["service"], "lambda");
        assert_eq!(body["region"], "us-east-1");
        assert_eq!(body["account_id"], "123456789012");
        assert_eq!(body["resource"], "function:my-fn:PROD");
    }

    #[tokio::test]
    async fn decompose_rejects_malformed_input() {
        let request = json_request("POST", "/dev/arn/decompose", json!({"arn": "not-an-arn"}));

        let response = handle_lambda(request).await.unwrap();

        assert_eq!(response.status(), 400);
        let body = response_json(&response);
        assert_eq!(body["error"], "not an ARN: missing 'arn:' prefix");
    }

    #[tokio::test]
    async fn interpolate_renders_the_template() {
        let request = json_request(
            "POST",
            "/dev/arn/interpolate",
            json!({
                "template": "{{aws_region}}:{{aws_account}}:{{lambda_name}}",
                "region": "us-east-1",
                "account_id": "123",
                "lambda_name": "fn"
            }),
        );

        let response = handle_lambda(request).await.unwrap();

        assert_eq!(response.status(), 200);
        let body = response_json(&response);
        assert_eq!(body["rendered"], "us-east-1:123:fn");
    }

    #[tokio::test]
    async fn interpolate_requires_the_lambda_name() {
        let request = json_request(
            "POST",
            "/dev/arn/interpolate",
            json!({
                "template": "{{aws_region}}",
                "region": "us-east-1",
                "account_id": "123"
            }),
        );

        let response = handle_lambda(request).await.unwrap();

        assert_eq!(response.status(), 400);
        let body = response_json(&response);
        assert_eq!(body["error"], "missing value for template variable {{lambda_name}}");
    }

    #[tokio::test]
    async fn unknown_paths_are_not_found() {
        let request = json_request("GET", "/dev/unknown", json!({}));

        let response = handle_lambda(request).await.unwrap();

        assert_eq!(response.status(), 404);
        let body = response_json(&response);
        assert_eq!(body["error"], "Not Found");
    }
}
