use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{Condition, Set};

/// Represents a user (and their channel) in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique handle, stored lowercase.
    pub username: String,
    /// Unique email address, stored lowercase.
    pub email: String,
    pub full_name: String,
    /// Public URL of the avatar image.
    pub avatar: String,
    /// Public URL of the channel cover image.
    pub cover_image: Option<String>,
    /// Argon2 PHC string.
    pub password_hash: String,
    /// The single refresh token currently allowed to rotate this session.
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::video::Entity")]
    Videos,
    #[sea_orm(has_many = "super::tweet::Entity")]
    Tweets,
    #[sea_orm(has_many = "super::playlist::Entity")]
    Playlists,
}

impl Related<super::video::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Videos.def()
    }
}

impl Related<super::tweet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tweets.def()
    }
}

impl Related<super::playlist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Playlists.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields required to register a user.
#[derive(Debug, Clone)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub full_name: &'a str,
    pub password: &'a str,
    pub avatar: &'a str,
    pub cover_image: Option<&'a str>,
}

/// Usernames and emails are matched case-insensitively by storing them normalized.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

impl Model {
    pub async fn create(db: &DbConn, new: NewUser<'_>) -> Result<Model, DbErr> {
        let now = Utc::now();
        let user = ActiveModel {
            username: Set(normalize(new.username)),
            email: Set(normalize(new.email)),
            full_name: Set(new.full_name.trim().to_owned()),
            avatar: Set(new.avatar.to_owned()),
            cover_image: Set(new.cover_image.map(str::to_owned)),
            password_hash: Set(Self::hash_password(new.password)?),
            refresh_token: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        user.insert(db).await
    }

    pub async fn find_by_username(db: &DbConn, username: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Username.eq(normalize(username)))
            .one(db)
            .await
    }

    /// Finds the user matching either identifier. Blank identifiers are ignored.
    pub async fn find_by_username_or_email(
        db: &DbConn,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<Model>, DbErr> {
        let mut any = Condition::any();
        let mut has_condition = false;
        if let Some(u) = username.filter(|u| !u.trim().is_empty()) {
            any = any.add(Column::Username.eq(normalize(u)));
            has_condition = true;
        }
        if let Some(e) = email.filter(|e| !e.trim().is_empty()) {
            any = any.add(Column::Email.eq(normalize(e)));
            has_condition = true;
        }
        if !has_condition {
            return Ok(None);
        }
        Entity::find().filter(any).one(db).await
    }

    /// Whether `email` belongs to a user other than `except_id`.
    pub async fn email_taken(db: &DbConn, email: &str, except_id: i64) -> Result<bool, DbErr> {
        let found = Entity::find()
            .filter(Column::Email.eq(normalize(email)))
            .filter(Column::Id.ne(except_id))
            .one(db)
            .await?;
        Ok(found.is_some())
    }

    pub fn hash_password(password: &str) -> Result<String, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| DbErr::Custom(format!("password hashing failed: {}", e)))
    }

    pub fn verify_password(&self, password: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.password_hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    pub async fn set_password(db: &DbConn, id: i64, password: &str) -> Result<(), DbErr> {
        ActiveModel {
            id: Set(id),
            password_hash: Set(Self::hash_password(password)?),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(db)
        .await?;
        Ok(())
    }

    pub async fn update_details(
        db: &DbConn,
        id: i64,
        full_name: &str,
        email: &str,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(id),
            full_name: Set(full_name.trim().to_owned()),
            email: Set(normalize(email)),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(db)
        .await
    }

    pub async fn set_avatar(db: &DbConn, id: i64, url: &str) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(id),
            avatar: Set(url.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(db)
        .await
    }

    pub async fn set_cover_image(db: &DbConn, id: i64, url: &str) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(id),
            cover_image: Set(Some(url.to_owned())),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(db)
        .await
    }

    /// Stores (or with `None`, revokes) the user's refresh token.
    pub async fn set_refresh_token(
        db: &DbConn,
        id: i64,
        token: Option<String>,
    ) -> Result<(), DbErr> {
        ActiveModel {
            id: Set(id),
            refresh_token: Set(token),
            ..Default::default()
        }
        .update(db)
        .await?;
        Ok(())
    }

    /// Replaces the stored refresh token with `next` only if it still equals `current`.
    ///
    /// A single conditional `UPDATE`, so of two callers presenting the same token
    /// at most one wins. Returns `false` when the token was already rotated or revoked.
    pub async fn swap_refresh_token(
        db: &DbConn,
        id: i64,
        current: &str,
        next: &str,
    ) -> Result<bool, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::RefreshToken, Expr::value(next))
            .filter(Column::Id.eq(id))
            .filter(Column::RefreshToken.eq(current))
            .exec(db)
            .await?;
        Ok(res.rows_affected == 1)
    }
}
