#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, json_request, make_test_app, send, token_for};
    use axum::http::StatusCode;
    use db::models::{
        like::{self, LikeTarget},
        tweet,
    };
    use db::test_utils::create_test_user;
    use sea_orm::EntityTrait;
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn create_and_list_tweets() {
        let (app, state, _tmp) = make_test_app().await;
        let db = state.db();
        let author = create_test_user(db, "author").await;
        let reader = create_test_user(db, "reader").await;
        let token = token_for(&author);

        let response = send(
            &app,
            json_request("POST", "/api/v1/tweets", Some(&token), Some(json!({ "content": "" }))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let mut ids = Vec::new();
        for text in ["older", "newer"] {
            let response = send(
                &app,
                json_request("POST", "/api/v1/tweets", Some(&token), Some(json!({ "content": text }))),
            )
            .await;
            assert_eq!(response.status(), StatusCode::CREATED);
            ids.push(get_json_body(response).await["data"]["id"].as_i64().unwrap());
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        like::Model::toggle(db, LikeTarget::Tweet(ids[1]), reader.id).await.unwrap();

        let uri = format!("/api/v1/tweets/user/{}", author.id);
        let response = send(&app, json_request("GET", &uri, Some(&token_for(&reader)), None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        let items = json["data"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["content"], "newer");
        assert_eq!(items[0]["likesCount"], 1);
        assert_eq!(items[0]["isLiked"], true);
        assert_eq!(items[1]["isLiked"], false);
        assert_eq!(items[1]["owner"]["username"], "author");
        assert!(items[0]["updatedAt"].as_str().is_some());
    }

    #[tokio::test]
    #[serial]
    async fn only_author_updates_or_deletes() {
        let (app, state, _tmp) = make_test_app().await;
        let db = state.db();
        let author = create_test_user(db, "author").await;
        let stranger = create_test_user(db, "stranger").await;
        let post = tweet::Model::create(db, author.id, "draft").await.unwrap();
        let uri = format!("/api/v1/tweets/{}", post.id);

        let response = send(
            &app,
            json_request("PATCH", &uri, Some(&token_for(&stranger)), Some(json!({ "content": "x" }))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            get_json_body(response).await["message"],
            "Only the owner can edit this tweet"
        );

        let response = send(
            &app,
            json_request("PATCH", &uri, Some(&token_for(&author)), Some(json!({ "content": "  " }))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(
            &app,
            json_request("PATCH", &uri, Some(&token_for(&author)), Some(json!({ "content": "final" }))),
        )
        .await;
        assert_eq!(get_json_body(response).await["data"]["content"], "final");

        let response = send(&app, json_request("DELETE", &uri, Some(&token_for(&stranger)), None)).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = send(&app, json_request("DELETE", &uri, Some(&token_for(&author)), None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(tweet::Entity::find_by_id(post.id).one(db).await.unwrap().is_none());
    }
}
