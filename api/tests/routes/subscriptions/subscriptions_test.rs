#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, json_request, make_test_app, send, token_for};
    use axum::http::StatusCode;
    use db::test_utils::create_test_user;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn cannot_subscribe_to_self() {
        let (app, state, _tmp) = make_test_app().await;
        let user = create_test_user(state.db(), "loner").await;

        let uri = format!("/api/v1/subscriptions/c/{}", user.id);
        let response = send(&app, json_request("POST", &uri, Some(&token_for(&user)), None)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            get_json_body(response).await["message"],
            "You cannot subscribe to yourself"
        );
    }

    #[tokio::test]
    #[serial]
    async fn toggle_and_list_both_directions() {
        let (app, state, _tmp) = make_test_app().await;
        let db = state.db();
        let fan = create_test_user(db, "fan").await;
        let channel = create_test_user(db, "channel").await;
        let token = token_for(&fan);
        let toggle = format!("/api/v1/subscriptions/c/{}", channel.id);

        let response = send(&app, json_request("POST", &toggle, Some(&token), None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_json_body(response).await["data"]["subscribed"], true);

        let response = send(&app, json_request("GET", &toggle, Some(&token), None)).await;
        let json = get_json_body(response).await;
        let subscribers = json["data"].as_array().unwrap();
        assert_eq!(subscribers.len(), 1);
        assert_eq!(subscribers[0]["subscriber"]["username"], "fan");
        assert!(subscribers[0]["subscribedAt"].as_str().is_some());

        let uri = format!("/api/v1/subscriptions/u/{}", fan.id);
        let response = send(&app, json_request("GET", &uri, Some(&token), None)).await;
        let json = get_json_body(response).await;
        assert_eq!(json["data"][0]["channel"]["username"], "channel");

        let response = send(&app, json_request("POST", &toggle, Some(&token), None)).await;
        assert_eq!(get_json_body(response).await["data"]["subscribed"], false);

        let response = send(&app, json_request("GET", &toggle, Some(&token), None)).await;
        assert_eq!(get_json_body(response).await["data"], serde_json::json!([]));
    }

    #[tokio::test]
    #[serial]
    async fn unknown_channel_is_not_found() {
        let (app, state, _tmp) = make_test_app().await;
        let fan = create_test_user(state.db(), "fan").await;

        let response = send(
            &app,
            json_request("POST", "/api/v1/subscriptions/c/9999", Some(&token_for(&fan)), None),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await["message"], "Channel not found");
    }
}
