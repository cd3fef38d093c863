//! PostgreSQL Repository Implementations

use platform::password::StoredPassword;
use sqlx::PgPool;

use crate::domain::entity::AdminUser;
use crate::domain::repository::AdminUserRepository;
use crate::error::AuthResult;

/// PostgreSQL-backed admin user lookup
#[derive(Clone)]
pub struct PgAdminUserRepository {
    pool: PgPool,
}

impl PgAdminUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AdminUserRepository for PgAdminUserRepository {
    async fn find_active_by_email(&self, email: &str) -> AuthResult<Option<AdminUser>> {
        let row = sqlx::query_as::<_, AdminUserRow>(
            r#"
            SELECT
                email,
                password_hash,
                password_salt,
                active,
                role
            FROM admin_users
            WHERE LOWER(TRIM(email)) = $1
              AND active = true
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_admin_user()))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AdminUserRow {
    email: String,
    password_hash: String,
    password_salt: String,
    active: bool,
    role: Option<String>,
}

impl AdminUserRow {
    fn into_admin_user(self) -> AdminUser {
        AdminUser {
            email: self.email,
            password: StoredPassword::new(self.password_hash, self.password_salt),
            active: self.active,
            role: self.role.unwrap_or_else(|| "admin".to_string()),
        }
    }
}
