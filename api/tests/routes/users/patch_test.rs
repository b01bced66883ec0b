#[cfg(test)]
mod tests {
    use crate::helpers::{
        Part, get_json_body, json_request, make_test_app, multipart_request, send, token_for,
    };
    use axum::http::StatusCode;
    use db::test_utils::create_test_user;
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn update_account_details_validates_and_saves() {
        let (app, state, _tmp) = make_test_app().await;
        let user = create_test_user(state.db(), "alice").await;
        create_test_user(state.db(), "bob").await;
        let token = token_for(&user);

        let req = json_request(
            "PATCH",
            "/api/v1/users/update-account",
            Some(&token),
            Some(json!({ "fullName": "Alice" })),
        );
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get_json_body(response).await["message"], "All fields are required");

        let req = json_request(
            "PATCH",
            "/api/v1/users/update-account",
            Some(&token),
            Some(json!({ "fullName": "Alice", "email": "bob@example.com" })),
        );
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let req = json_request(
            "PATCH",
            "/api/v1/users/update-account",
            Some(&token),
            Some(json!({ "fullName": "Alice Cooper", "email": "Alice.C@Example.com" })),
        );
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["fullName"], "Alice Cooper");
        assert_eq!(json["data"]["email"], "alice.c@example.com");
    }

    #[tokio::test]
    #[serial]
    async fn avatar_and_cover_image_updates() {
        let (app, state, tmp) = make_test_app().await;
        let user = create_test_user(state.db(), "alice").await;
        let token = token_for(&user);

        let req = multipart_request("PATCH", "/api/v1/users/avatar", Some(&token), &[]);
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get_json_body(response).await["message"], "Avatar file is missing");

        let req = multipart_request(
            "PATCH",
            "/api/v1/users/avatar",
            Some(&token),
            &[Part::File("avatar", "new.png", "image/png", b"png-bytes")],
        );
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::OK);
        let first_avatar = get_json_body(response).await["data"]["avatar"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(first_avatar.contains("/media/images/"));

        let req = multipart_request(
            "PATCH",
            "/api/v1/users/avatar",
            Some(&token),
            &[Part::File("avatar", "newer.png", "image/png", b"more-png-bytes")],
        );
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::OK);

        // the replaced avatar is removed from disk
        let images = std::fs::read_dir(tmp.path().join("media/images")).unwrap().count();
        assert_eq!(images, 1);

        let req = multipart_request(
            "PATCH",
            "/api/v1/users/cover-image",
            Some(&token),
            &[Part::File("coverImage", "cover.jpg", "image/jpeg", b"jpeg-bytes")],
        );
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Cover image updated successfully");
        assert!(json["data"]["coverImage"].as_str().unwrap().ends_with(".jpg"));
    }
}
