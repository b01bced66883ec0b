#[cfg(test)]
mod tests {
    use crate::helpers::{
        Part, get_json_body, json_request, make_test_app, multipart_request, send, token_for,
    };
    use axum::http::{StatusCode, header};
    use db::models::user::Model as UserModel;
    use db::test_utils::create_test_user;
    use serde_json::json;
    use serial_test::serial;

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake-image-bytes";

    fn register_parts<'a>(username: &'a str, email: &'a str) -> Vec<Part<'a>> {
        vec![
            Part::Text("fullName", "Alice Doe"),
            Part::Text("email", email),
            Part::Text("username", username),
            Part::Text("password", "password123"),
            Part::File("avatar", "avatar.png", "image/png", PNG),
        ]
    }

    fn set_cookies(response: &axum::response::Response) -> Vec<String> {
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    #[serial]
    async fn register_creates_user_and_stores_avatar() {
        let (app, _state, tmp) = make_test_app().await;

        let req = multipart_request(
            "POST",
            "/api/v1/users/register",
            None,
            &register_parts("  Alice ", "ALICE@Example.com"),
        );
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "User registered successfully");
        assert_eq!(json["data"]["username"], "alice");
        assert_eq!(json["data"]["email"], "alice@example.com");
        assert_eq!(json["data"]["coverImage"], serde_json::Value::Null);
        assert!(json["data"].get("password").is_none());
        assert!(json["data"].get("refreshToken").is_none());

        let avatar = json["data"]["avatar"].as_str().unwrap();
        assert!(avatar.starts_with("http://localhost:8000/media/images/"));
        let stored = std::fs::read_dir(tmp.path().join("media/images")).unwrap().count();
        assert_eq!(stored, 1);
    }

    #[tokio::test]
    #[serial]
    async fn register_rejects_missing_fields_and_duplicates() {
        let (app, state, _tmp) = make_test_app().await;
        create_test_user(state.db(), "taken").await;

        let req = multipart_request(
            "POST",
            "/api/v1/users/register",
            None,
            &[Part::Text("fullName", "No Email")],
        );
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get_json_body(response).await["message"], "Email is required");

        let req = multipart_request(
            "POST",
            "/api/v1/users/register",
            None,
            &register_parts("someone", "not-an-email"),
        );
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get_json_body(response).await["message"], "Invalid email address");

        let req = multipart_request(
            "POST",
            "/api/v1/users/register",
            None,
            &register_parts("taken", "fresh@example.com"),
        );
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(get_json_body(response).await["message"], "User already exists");

        let mut parts = register_parts("newbie", "newbie@example.com");
        parts.pop();
        let req = multipart_request("POST", "/api/v1/users/register", None, &parts);
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get_json_body(response).await["message"], "Avatar image is required");
    }

    #[tokio::test]
    #[serial]
    async fn register_rejects_non_image_avatar() {
        let (app, _state, _tmp) = make_test_app().await;
        let req = multipart_request(
            "POST",
            "/api/v1/users/register",
            None,
            &[
                Part::Text("fullName", "Alice Doe"),
                Part::Text("email", "alice@example.com"),
                Part::Text("username", "alice"),
                Part::Text("password", "password123"),
                Part::File("avatar", "avatar.mp4", "video/mp4", b"not an image"),
            ],
        );
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[serial]
    async fn login_sets_cookies_and_returns_tokens() {
        let (app, state, _tmp) = make_test_app().await;
        create_test_user(state.db(), "alice").await;

        let req = json_request(
            "POST",
            "/api/v1/users/login",
            None,
            Some(json!({ "email": "alice@example.com", "password": "password123" })),
        );
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::OK);

        let cookies = set_cookies(&response);
        assert!(cookies.iter().any(|c| c.starts_with("accessToken=") && c.contains("HttpOnly")));
        assert!(cookies.iter().any(|c| c.starts_with("refreshToken=")));

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "User logged in successfully");
        assert_eq!(json["data"]["user"]["username"], "alice");
        assert!(json["data"]["accessToken"].as_str().is_some());

        let stored = UserModel::find_by_username(state.db(), "alice")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            stored.refresh_token.as_deref(),
            json["data"]["refreshToken"].as_str()
        );
    }

    #[tokio::test]
    #[serial]
    async fn login_failures() {
        let (app, state, _tmp) = make_test_app().await;
        create_test_user(state.db(), "alice").await;

        let cases = [
            (json!({ "password": "password123" }), StatusCode::BAD_REQUEST, "Username or email is required"),
            (json!({ "username": "nobody", "password": "x" }), StatusCode::NOT_FOUND, "User does not exist"),
            (json!({ "username": "alice", "password": "wrong" }), StatusCode::UNAUTHORIZED, "Invalid user credentials"),
        ];

        for (body, status, message) in cases {
            let req = json_request("POST", "/api/v1/users/login", None, Some(body));
            let response = send(&app, req).await;
            assert_eq!(response.status(), status);
            assert_eq!(get_json_body(response).await["message"], message);
        }
    }

    #[tokio::test]
    #[serial]
    async fn refresh_rotates_and_rejects_reuse() {
        let (app, state, _tmp) = make_test_app().await;
        create_test_user(state.db(), "alice").await;

        let req = json_request(
            "POST",
            "/api/v1/users/login",
            None,
            Some(json!({ "username": "alice", "password": "password123" })),
        );
        let login = get_json_body(send(&app, req).await).await;
        let first = login["data"]["refreshToken"].as_str().unwrap().to_string();

        let req = json_request(
            "POST",
            "/api/v1/users/refresh-token",
            None,
            Some(json!({ "refreshToken": first })),
        );
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Access token refreshed");
        let second = json["data"]["refreshToken"].as_str().unwrap();
        assert_ne!(second, first);

        let req = json_request(
            "POST",
            "/api/v1/users/refresh-token",
            None,
            Some(json!({ "refreshToken": first })),
        );
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            get_json_body(response).await["message"],
            "Refresh token is expired or used"
        );
    }

    #[tokio::test]
    #[serial]
    async fn refresh_reads_cookie_and_validates() {
        let (app, state, _tmp) = make_test_app().await;
        create_test_user(state.db(), "alice").await;

        let req = json_request("POST", "/api/v1/users/refresh-token", None, None);
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(get_json_body(response).await["message"], "Unauthorized request");

        let mut req = json_request("POST", "/api/v1/users/refresh-token", None, None);
        req.headers_mut()
            .insert(header::COOKIE, "refreshToken=garbage".parse().unwrap());
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(get_json_body(response).await["message"], "Invalid refresh token");
    }

    #[tokio::test]
    #[serial]
    async fn logout_revokes_refresh_token_and_clears_cookies() {
        let (app, state, _tmp) = make_test_app().await;
        let user = create_test_user(state.db(), "alice").await;
        UserModel::set_refresh_token(state.db(), user.id, Some("stored".into()))
            .await
            .unwrap();

        let req = json_request("POST", "/api/v1/users/logout", Some(&token_for(&user)), None);
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::OK);

        let cookies = set_cookies(&response);
        assert!(cookies.iter().any(|c| c.starts_with("accessToken=")));
        assert!(cookies.iter().any(|c| c.starts_with("refreshToken=")));

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "User logged out");
        assert_eq!(json["data"], json!({}));

        let stored = UserModel::find_by_username(state.db(), "alice")
            .await
            .unwrap()
            .unwrap();
        assert!(stored.refresh_token.is_none());
    }

    #[tokio::test]
    #[serial]
    async fn change_password_checks_old_password() {
        let (app, state, _tmp) = make_test_app().await;
        let user = create_test_user(state.db(), "alice").await;
        let token = token_for(&user);

        let req = json_request(
            "POST",
            "/api/v1/users/change-password",
            Some(&token),
            Some(json!({ "oldPassword": "wrong-one", "newPassword": "brand-new-pass" })),
        );
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get_json_body(response).await["message"], "Invalid old password");

        let req = json_request(
            "POST",
            "/api/v1/users/change-password",
            Some(&token),
            Some(json!({ "oldPassword": "password123", "newPassword": "brand-new-pass" })),
        );
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::OK);

        let stored = UserModel::find_by_username(state.db(), "alice")
            .await
            .unwrap()
            .unwrap();
        assert!(stored.verify_password("brand-new-pass"));
        assert!(!stored.verify_password("password123"));
    }

    #[tokio::test]
    #[serial]
    async fn protected_routes_require_a_valid_token() {
        let (app, _state, _tmp) = make_test_app().await;

        let req = json_request("GET", "/api/v1/users/current-user", None, None);
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(get_json_body(response).await["message"], "Unauthorized request");

        let req = json_request("GET", "/api/v1/users/current-user", Some("not-a-jwt"), None);
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(get_json_body(response).await["message"], "Invalid access token");
    }
}
