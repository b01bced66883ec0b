#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, json_request, make_test_app, send, token_for};
    use axum::http::StatusCode;
    use db::models::{
        comment,
        like::{self, LikeTarget},
    };
    use db::test_utils::{create_test_user, create_test_video};
    use sea_orm::EntityTrait;
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn add_and_list_comments() {
        let (app, state, _tmp) = make_test_app().await;
        let db = state.db();
        let owner = create_test_user(db, "owner").await;
        let viewer = create_test_user(db, "viewer").await;
        let clip = create_test_video(db, owner.id, "clip").await;
        let token = token_for(&viewer);
        let uri = format!("/api/v1/comments/{}", clip.id);

        let response = send(
            &app,
            json_request("POST", &uri, Some(&token), Some(json!({ "content": "  " }))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get_json_body(response).await["message"], "Content is required");

        for text in ["first", "second", "third"] {
            let response = send(
                &app,
                json_request("POST", &uri, Some(&token), Some(json!({ "content": text }))),
            )
            .await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let newest = comment::Entity::find().all(db).await.unwrap();
        let third = newest.iter().find(|c| c.content == "third").unwrap();
        like::Model::toggle(db, LikeTarget::Comment(third.id), viewer.id).await.unwrap();
        like::Model::toggle(db, LikeTarget::Comment(third.id), owner.id).await.unwrap();

        let response = send(
            &app,
            json_request("GET", &format!("{uri}?limit=2"), Some(&token), None),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["total"], 3);
        assert_eq!(json["data"]["page"], 1);
        assert_eq!(json["data"]["limit"], 2);
        let comments = json["data"]["comments"].as_array().unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0]["content"], "third");
        assert_eq!(comments[0]["likesCount"], 2);
        assert_eq!(comments[0]["isLiked"], true);
        assert_eq!(comments[0]["owner"]["username"], "viewer");
        assert_eq!(comments[1]["likesCount"], 0);
        assert_eq!(comments[1]["isLiked"], false);
    }

    #[tokio::test]
    #[serial]
    async fn empty_page_is_still_ok() {
        let (app, state, _tmp) = make_test_app().await;
        let owner = create_test_user(state.db(), "owner").await;
        let clip = create_test_video(state.db(), owner.id, "clip").await;

        let uri = format!("/api/v1/comments/{}?page=5", clip.id);
        let response = send(&app, json_request("GET", &uri, Some(&token_for(&owner)), None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["comments"], json!([]));
        assert_eq!(json["data"]["total"], 0);
    }

    #[tokio::test]
    #[serial]
    async fn only_author_edits_or_deletes() {
        let (app, state, _tmp) = make_test_app().await;
        let db = state.db();
        let author = create_test_user(db, "author").await;
        let stranger = create_test_user(db, "stranger").await;
        let clip = create_test_video(db, author.id, "clip").await;
        let note = comment::Model::create(db, clip.id, author.id, "original").await.unwrap();
        like::Model::toggle(db, LikeTarget::Comment(note.id), stranger.id).await.unwrap();
        let uri = format!("/api/v1/comments/c/{}", note.id);

        let response = send(
            &app,
            json_request("PATCH", &uri, Some(&token_for(&stranger)), Some(json!({ "content": "hacked" }))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = send(
            &app,
            json_request("PATCH", &uri, Some(&token_for(&author)), Some(json!({ "content": "edited" }))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_json_body(response).await["data"]["content"], "edited");

        let response = send(&app, json_request("DELETE", &uri, Some(&token_for(&stranger)), None)).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = send(&app, json_request("DELETE", &uri, Some(&token_for(&author)), None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(comment::Entity::find_by_id(note.id).one(db).await.unwrap().is_none());
        assert!(like::Entity::find().all(db).await.unwrap().is_empty());

        let response = send(&app, json_request("DELETE", &uri, Some(&token_for(&author)), None)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await["message"], "Comment not found");
    }
}
