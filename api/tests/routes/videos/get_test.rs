#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, json_request, make_test_app, send, token_for};
    use axum::http::StatusCode;
    use db::models::{
        like::{self, LikeTarget},
        subscription, video, watch_history,
    };
    use db::test_utils::{create_test_user, create_test_video};
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn list_paginates_published_videos() {
        let (app, state, _tmp) = make_test_app().await;
        let db = state.db();
        let owner = create_test_user(db, "owner").await;
        let viewer = create_test_user(db, "viewer").await;
        for i in 0..5 {
            create_test_video(db, owner.id, &format!("video {i}")).await;
        }
        let hidden = create_test_video(db, owner.id, "hidden").await;
        video::Model::set_published(db, hidden.id, false).await.unwrap();

        let req = json_request(
            "GET",
            "/api/v1/videos/get-all-videos?page=2&limit=2",
            Some(&token_for(&viewer)),
            None,
        );
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Videos fetched successfully");
        assert_eq!(json["data"]["total"], 5);
        assert_eq!(json["data"]["totalPages"], 3);
        assert_eq!(json["data"]["page"], 2);
        assert_eq!(json["data"]["limit"], 2);
        let videos = json["data"]["videos"].as_array().unwrap();
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0]["owner"]["username"], "owner");
    }

    #[tokio::test]
    #[serial]
    async fn list_clamps_out_of_range_paging() {
        let (app, state, _tmp) = make_test_app().await;
        let viewer = create_test_user(state.db(), "viewer").await;

        let req = json_request(
            "GET",
            "/api/v1/videos/get-all-videos?page=0&limit=1000",
            Some(&token_for(&viewer)),
            None,
        );
        let json = get_json_body(send(&app, req).await).await;
        assert_eq!(json["data"]["page"], 1);
        assert_eq!(json["data"]["limit"], 100);
        assert_eq!(json["data"]["total"], 0);
        assert_eq!(json["data"]["totalPages"], 0);
    }

    #[tokio::test]
    #[serial]
    async fn list_with_enormous_page_returns_empty_page() {
        let (app, state, _tmp) = make_test_app().await;
        let viewer = create_test_user(state.db(), "viewer").await;
        create_test_video(state.db(), viewer.id, "only one").await;

        let req = json_request(
            "GET",
            "/api/v1/videos/get-all-videos?page=18446744073709551615&limit=100",
            Some(&token_for(&viewer)),
            None,
        );
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["total"], 1);
        assert_eq!(json["data"]["videos"], serde_json::json!([]));
    }

    #[tokio::test]
    #[serial]
    async fn search_treats_wildcards_literally() {
        let (app, state, _tmp) = make_test_app().await;
        let db = state.db();
        let viewer = create_test_user(db, "viewer").await;
        create_test_video(db, viewer.id, "hello world").await;
        let percent = create_test_video(db, viewer.id, "100% rust").await;
        let token = token_for(&viewer);

        let req = json_request(
            "GET",
            "/api/v1/videos/get-all-videos?query=%25",
            Some(&token),
            None,
        );
        let json = get_json_body(send(&app, req).await).await;
        assert_eq!(json["data"]["total"], 1);
        assert_eq!(json["data"]["videos"][0]["id"], percent.id);

        let req = json_request(
            "GET",
            "/api/v1/videos/get-all-videos?query=hello_world",
            Some(&token),
            None,
        );
        let json = get_json_body(send(&app, req).await).await;
        assert_eq!(json["data"]["total"], 0);
    }

    #[tokio::test]
    #[serial]
    async fn list_searches_sorts_and_filters_by_owner() {
        let (app, state, _tmp) = make_test_app().await;
        let db = state.db();
        let alice = create_test_user(db, "alice").await;
        let bob = create_test_user(db, "bob").await;

        let rust = create_test_video(db, alice.id, "Learning Rust").await;
        let cooking = create_test_video(db, alice.id, "Cooking pasta").await;
        let drafts = create_test_video(db, alice.id, "Rust drafts").await;
        video::Model::set_published(db, drafts.id, false).await.unwrap();
        create_test_video(db, bob.id, "Bob on rust").await;
        for _ in 0..3 {
            video::Model::increment_views(db, cooking.id).await.unwrap();
        }

        let bob_token = token_for(&bob);
        let req = json_request(
            "GET",
            "/api/v1/videos/get-all-videos?query=RUST&sortBy=title&sortType=asc",
            Some(&bob_token),
            None,
        );
        let json = get_json_body(send(&app, req).await).await;
        let titles: Vec<&str> = json["data"]["videos"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Bob on rust", "Learning Rust"]);

        let req = json_request(
            "GET",
            &format!("/api/v1/videos/get-all-videos?userId={}&sortBy=views", alice.id),
            Some(&bob_token),
            None,
        );
        let json = get_json_body(send(&app, req).await).await;
        assert_eq!(json["data"]["total"], 2);
        assert_eq!(json["data"]["videos"][0]["id"], cooking.id);
        assert_eq!(json["data"]["videos"][1]["id"], rust.id);

        // owners see their own unpublished videos in their channel listing
        let req = json_request(
            "GET",
            &format!("/api/v1/videos/get-all-videos?userId={}", alice.id),
            Some(&token_for(&alice)),
            None,
        );
        let json = get_json_body(send(&app, req).await).await;
        assert_eq!(json["data"]["total"], 3);
    }

    #[tokio::test]
    #[serial]
    async fn get_video_counts_view_and_records_history() {
        let (app, state, _tmp) = make_test_app().await;
        let db = state.db();
        let owner = create_test_user(db, "owner").await;
        let viewer = create_test_user(db, "viewer").await;
        let clip = create_test_video(db, owner.id, "clip").await;
        like::Model::toggle(db, LikeTarget::Video(clip.id), viewer.id).await.unwrap();
        subscription::Model::toggle(db, viewer.id, owner.id).await.unwrap();

        let req = json_request(
            "GET",
            &format!("/api/v1/videos/{}", clip.id),
            Some(&token_for(&viewer)),
            None,
        );
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["views"], 1);
        assert_eq!(json["data"]["likesCount"], 1);
        assert_eq!(json["data"]["isLiked"], true);
        assert_eq!(json["data"]["owner"]["username"], "owner");
        assert_eq!(json["data"]["owner"]["subscribersCount"], 1);
        assert_eq!(json["data"]["owner"]["isSubscribed"], true);

        let history = watch_history::Model::video_ids(db, viewer.id).await.unwrap();
        assert_eq!(history, vec![clip.id]);
    }

    #[tokio::test]
    #[serial]
    async fn unpublished_video_is_hidden_from_others() {
        let (app, state, _tmp) = make_test_app().await;
        let db = state.db();
        let owner = create_test_user(db, "owner").await;
        let viewer = create_test_user(db, "viewer").await;
        let clip = create_test_video(db, owner.id, "clip").await;
        video::Model::set_published(db, clip.id, false).await.unwrap();

        let uri = format!("/api/v1/videos/{}", clip.id);
        let response = send(&app, json_request("GET", &uri, Some(&token_for(&viewer)), None)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await["message"], "Video not found");

        let response = send(&app, json_request("GET", &uri, Some(&token_for(&owner)), None)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    #[serial]
    async fn invalid_and_unknown_ids() {
        let (app, state, _tmp) = make_test_app().await;
        let viewer = create_test_user(state.db(), "viewer").await;
        let token = token_for(&viewer);

        let response = send(&app, json_request("GET", "/api/v1/videos/abc", Some(&token), None)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            get_json_body(response).await["message"],
            "Invalid video_id: 'abc'. Must be an integer."
        );

        let response = send(&app, json_request("GET", "/api/v1/videos/999", Some(&token), None)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await["message"], "Video not found");
    }
}
