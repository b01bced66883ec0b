use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202610180005_create_likes"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("likes"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("video_id")).integer())
                    .col(ColumnDef::new(Alias::new("comment_id")).integer())
                    .col(ColumnDef::new(Alias::new("tweet_id")).integer())
                    .col(ColumnDef::new(Alias::new("liked_by")).integer().not_null())
                    .col(
                        ColumnDef::new(Alias::new("created_at"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    // Exactly one target per like.
                    .check(Expr::cust(
                        "(video_id IS NOT NULL) + (comment_id IS NOT NULL) + (tweet_id IS NOT NULL) = 1",
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("likes"), Alias::new("video_id"))
                            .to(Alias::new("videos"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("likes"), Alias::new("comment_id"))
                            .to(Alias::new("comments"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("likes"), Alias::new("tweet_id"))
                            .to(Alias::new("tweets"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("likes"), Alias::new("liked_by"))
                            .to(Alias::new("users"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_likes_video_user", "video_id"),
            ("idx_likes_comment_user", "comment_id"),
            ("idx_likes_tweet_user", "tweet_id"),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Alias::new("likes"))
                        .col(Alias::new(column))
                        .col(Alias::new("liked_by"))
                        .unique()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("likes")).to_owned())
            .await
    }
}
