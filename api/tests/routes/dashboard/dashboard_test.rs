#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, json_request, make_test_app, send, token_for};
    use axum::http::StatusCode;
    use db::models::{
        comment,
        like::{self, LikeTarget},
        subscription, tweet, video,
    };
    use db::test_utils::{create_test_user, create_test_video};
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn stats_aggregate_the_callers_channel() {
        let (app, state, _tmp) = make_test_app().await;
        let db = state.db();
        let creator = create_test_user(db, "creator").await;
        let fan = create_test_user(db, "fan").await;
        let other = create_test_user(db, "other").await;

        let a = create_test_video(db, creator.id, "a").await;
        let b = create_test_video(db, creator.id, "b").await;
        video::Model::set_published(db, b.id, false).await.unwrap();
        let elsewhere = create_test_video(db, other.id, "elsewhere").await;

        for _ in 0..3 {
            video::Model::increment_views(db, a.id).await.unwrap();
        }
        video::Model::increment_views(db, b.id).await.unwrap();
        like::Model::toggle(db, LikeTarget::Video(a.id), fan.id).await.unwrap();
        like::Model::toggle(db, LikeTarget::Video(b.id), fan.id).await.unwrap();
        like::Model::toggle(db, LikeTarget::Video(elsewhere.id), fan.id).await.unwrap();
        comment::Model::create(db, a.id, fan.id, "wow").await.unwrap();
        comment::Model::create(db, elsewhere.id, fan.id, "meh").await.unwrap();
        subscription::Model::toggle(db, fan.id, creator.id).await.unwrap();
        tweet::Model::create(db, creator.id, "hi").await.unwrap();

        let response = send(
            &app,
            json_request("GET", "/api/v1/dashboard/stats", Some(&token_for(&creator)), None),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(
            json["data"],
            json!({
                "totalVideos": 2,
                "totalViews": 4,
                "totalSubscribers": 1,
                "totalLikes": 2,
                "totalComments": 1,
                "totalTweets": 1
            })
        );
    }

    #[tokio::test]
    #[serial]
    async fn channel_videos_include_unpublished_with_counts() {
        let (app, state, _tmp) = make_test_app().await;
        let db = state.db();
        let creator = create_test_user(db, "creator").await;
        let fan = create_test_user(db, "fan").await;
        let older = create_test_video(db, creator.id, "older").await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let newer = create_test_video(db, creator.id, "newer").await;
        video::Model::set_published(db, newer.id, false).await.unwrap();
        like::Model::toggle(db, LikeTarget::Video(older.id), fan.id).await.unwrap();
        comment::Model::create(db, older.id, fan.id, "one").await.unwrap();
        comment::Model::create(db, older.id, fan.id, "two").await.unwrap();

        let response = send(
            &app,
            json_request("GET", "/api/v1/dashboard/videos", Some(&token_for(&creator)), None),
        )
        .await;
        let json = get_json_body(response).await;
        let items = json["data"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], newer.id);
        assert_eq!(items[0]["isPublished"], false);
        assert_eq!(items[0]["likesCount"], 0);
        assert_eq!(items[1]["likesCount"], 1);
        assert_eq!(items[1]["commentsCount"], 2);
    }
}
