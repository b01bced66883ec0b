pub mod m202610180001_create_users;
pub mod m202610180002_create_videos;
pub mod m202610180003_create_comments;
pub mod m202610180004_create_tweets;
pub mod m202610180005_create_likes;
pub mod m202610180006_create_playlists;
pub mod m202610180007_create_subscriptions;
pub mod m202610180008_create_watch_history;
