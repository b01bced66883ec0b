#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, json_request, make_test_app, send};
    use axum::http::StatusCode;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn healthcheck_is_public() {
        let (app, _state, _tmp) = make_test_app().await;

        let response = send(&app, json_request("GET", "/api/v1/healthcheck", None, None)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "OK");
        assert_eq!(json["message"], "Health check passed");
    }
}
