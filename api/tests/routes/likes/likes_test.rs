#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, json_request, make_test_app, send, token_for};
    use axum::http::StatusCode;
    use db::models::{comment, like, tweet, video};
    use db::test_utils::{create_test_user, create_test_video};
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn toggles_flip_each_target() {
        let (app, state, _tmp) = make_test_app().await;
        let db = state.db();
        let user = create_test_user(db, "fan").await;
        let clip = create_test_video(db, user.id, "clip").await;
        let note = comment::Model::create(db, clip.id, user.id, "nice").await.unwrap();
        let post = tweet::Model::create(db, user.id, "hello").await.unwrap();
        let token = token_for(&user);

        for uri in [
            format!("/api/v1/likes/toggle/v/{}", clip.id),
            format!("/api/v1/likes/toggle/c/{}", note.id),
            format!("/api/v1/likes/toggle/t/{}", post.id),
        ] {
            let response = send(&app, json_request("POST", &uri, Some(&token), None)).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(get_json_body(response).await["data"]["isLiked"], true);

            let response = send(&app, json_request("POST", &uri, Some(&token), None)).await;
            assert_eq!(get_json_body(response).await["data"]["isLiked"], false);
        }
    }

    #[tokio::test]
    #[serial]
    async fn toggle_on_missing_target_is_not_found() {
        let (app, state, _tmp) = make_test_app().await;
        let user = create_test_user(state.db(), "fan").await;

        let response = send(
            &app,
            json_request("POST", "/api/v1/likes/toggle/t/42", Some(&token_for(&user)), None),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await["message"], "Tweet not found");
    }

    #[tokio::test]
    #[serial]
    async fn liked_videos_newest_like_first() {
        let (app, state, _tmp) = make_test_app().await;
        let db = state.db();
        let owner = create_test_user(db, "owner").await;
        let fan = create_test_user(db, "fan").await;
        let first = create_test_video(db, owner.id, "first").await;
        let second = create_test_video(db, owner.id, "second").await;
        let hidden = create_test_video(db, owner.id, "hidden").await;

        for v in [&hidden, &first, &second] {
            like::Model::toggle(db, like::LikeTarget::Video(v.id), fan.id).await.unwrap();
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        video::Model::set_published(db, hidden.id, false).await.unwrap();

        let response = send(
            &app,
            json_request("GET", "/api/v1/likes/videos", Some(&token_for(&fan)), None),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        let items = json["data"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], second.id);
        assert_eq!(items[1]["id"], first.id);
        assert_eq!(items[0]["owner"]["fullName"], "owner");
    }
}
