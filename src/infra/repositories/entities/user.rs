//! `users` table row.

use sea_orm::entity::prelude::*;

use crate::domain::{User, UserRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Login identifier
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 PHC string
    pub password_hash: String,
    pub name: String,
    /// Stored as its lowercase name; unknown values load as `UserRole::User`
    pub role: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(row: Model) -> Self {
        let role = UserRole::from(row.role.as_str());
        User {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            name: row.name,
            role,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(role: &str) -> Model {
        let now = Utc::now();
        Model {
            id: Uuid::new_v4(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            name: "Alice".to_string(),
            role: role.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_row_converts_to_domain_user() {
        let model = row("admin");
        let user = User::from(model.clone());

        assert_eq!(user.id, model.id);
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.password_hash, "$argon2id$hash");
        assert_eq!(user.name, "Alice");
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn test_unknown_role_loads_as_user() {
        assert_eq!(User::from(row("superuser")).role, UserRole::User);
    }
}
