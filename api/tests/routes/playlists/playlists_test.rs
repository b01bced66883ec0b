#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, json_request, make_test_app, send, token_for};
    use axum::http::StatusCode;
    use db::models::{playlist, playlist_video, video};
    use db::test_utils::{create_test_user, create_test_video};
    use sea_orm::EntityTrait;
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn create_requires_name() {
        let (app, state, _tmp) = make_test_app().await;
        let user = create_test_user(state.db(), "curator").await;
        let token = token_for(&user);

        let response = send(
            &app,
            json_request("POST", "/api/v1/playlist", Some(&token), Some(json!({ "description": "x" }))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get_json_body(response).await["message"], "Name is required");

        let response = send(
            &app,
            json_request(
                "POST",
                "/api/v1/playlist",
                Some(&token),
                Some(json!({ "name": "Rust talks", "description": "Conference recordings" })),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["name"], "Rust talks");
        assert_eq!(json["data"]["ownerId"], user.id);
    }

    #[tokio::test]
    #[serial]
    async fn add_remove_and_view_playlist() {
        let (app, state, _tmp) = make_test_app().await;
        let db = state.db();
        let curator = create_test_user(db, "curator").await;
        let creator = create_test_user(db, "creator").await;
        let first = create_test_video(db, creator.id, "first").await;
        let second = create_test_video(db, creator.id, "second").await;
        video::Model::increment_views(db, second.id).await.unwrap();
        let list = playlist::Model::create(db, curator.id, "Faves", "").await.unwrap();
        let token = token_for(&curator);

        for v in [&second, &first] {
            let uri = format!("/api/v1/playlist/add/{}/{}", v.id, list.id);
            let response = send(&app, json_request("PATCH", &uri, Some(&token), None)).await;
            assert_eq!(response.status(), StatusCode::OK);
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }

        let uri = format!("/api/v1/playlist/add/{}/{}", first.id, list.id);
        let response = send(&app, json_request("PATCH", &uri, Some(&token), None)).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(get_json_body(response).await["message"], "Video already in playlist");

        let uri = format!("/api/v1/playlist/{}", list.id);
        let response = send(&app, json_request("GET", &uri, Some(&token_for(&creator)), None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["owner"]["username"], "curator");
        assert_eq!(json["data"]["totalVideos"], 2);
        assert_eq!(json["data"]["totalViews"], 1);
        assert_eq!(json["data"]["videos"][0]["id"], second.id);
        assert_eq!(json["data"]["videos"][1]["id"], first.id);

        let uri = format!("/api/v1/playlist/remove/{}/{}", second.id, list.id);
        let response = send(&app, json_request("PATCH", &uri, Some(&token), None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let response = send(&app, json_request("PATCH", &uri, Some(&token), None)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await["message"], "Video not in playlist");

        assert_eq!(
            playlist_video::Model::video_ids(db, list.id).await.unwrap(),
            vec![first.id]
        );
    }

    #[tokio::test]
    #[serial]
    async fn user_playlists_report_totals_and_skip_hidden_videos() {
        let (app, state, _tmp) = make_test_app().await;
        let db = state.db();
        let curator = create_test_user(db, "curator").await;
        let creator = create_test_user(db, "creator").await;
        let shown = create_test_video(db, creator.id, "shown").await;
        let hidden = create_test_video(db, creator.id, "hidden").await;
        for _ in 0..4 {
            video::Model::increment_views(db, shown.id).await.unwrap();
        }
        let list = playlist::Model::create(db, curator.id, "Mixed", "both").await.unwrap();
        playlist::Model::create(db, curator.id, "Empty", "").await.unwrap();
        playlist_video::Model::add(db, list.id, shown.id).await.unwrap();
        playlist_video::Model::add(db, list.id, hidden.id).await.unwrap();
        video::Model::set_published(db, hidden.id, false).await.unwrap();

        let uri = format!("/api/v1/playlist/user/{}", curator.id);
        let response = send(&app, json_request("GET", &uri, Some(&token_for(&curator)), None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        let items = json["data"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        let mixed = items.iter().find(|p| p["name"] == "Mixed").unwrap();
        assert_eq!(mixed["totalVideos"], 1);
        assert_eq!(mixed["totalViews"], 4);
        let empty = items.iter().find(|p| p["name"] == "Empty").unwrap();
        assert_eq!(empty["totalVideos"], 0);
    }

    #[tokio::test]
    #[serial]
    async fn only_owner_modifies_or_deletes() {
        let (app, state, _tmp) = make_test_app().await;
        let db = state.db();
        let curator = create_test_user(db, "curator").await;
        let stranger = create_test_user(db, "stranger").await;
        let clip = create_test_video(db, curator.id, "clip").await;
        let list = playlist::Model::create(db, curator.id, "Mine", "").await.unwrap();
        let uri = format!("/api/v1/playlist/{}", list.id);
        let stranger_token = token_for(&stranger);

        let response = send(
            &app,
            json_request("PATCH", &uri, Some(&stranger_token), Some(json!({ "name": "Ours" }))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let add = format!("/api/v1/playlist/add/{}/{}", clip.id, list.id);
        let response = send(&app, json_request("PATCH", &add, Some(&stranger_token), None)).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = send(&app, json_request("PATCH", &uri, Some(&token_for(&curator)), Some(json!({})))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(
            &app,
            json_request("PATCH", &uri, Some(&token_for(&curator)), Some(json!({ "description": "updated" }))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["name"], "Mine");
        assert_eq!(json["data"]["description"], "updated");

        let response = send(&app, json_request("DELETE", &uri, Some(&stranger_token), None)).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = send(&app, json_request("DELETE", &uri, Some(&token_for(&curator)), None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(playlist::Entity::find_by_id(list.id).one(db).await.unwrap().is_none());
        assert!(video::Entity::find_by_id(clip.id).one(db).await.unwrap().is_some());
    }
}
