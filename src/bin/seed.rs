//! Wipes the users table and inserts two sample accounts for local
//! development. Run with `cargo run --bin seed`.

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use sqlx::postgres::PgPoolOptions;

const SAMPLE_USERS: &[(&str, &str, &str)] = &[
    ("Alice Johnson", "alice@example.com", "password123"),
    ("Bob Smith", "bob@example.com", "password456"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let database_url = std::env::var("DATABASE_URL")?;
    let db = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await?;

    sqlx::query("DELETE FROM users").execute(&db).await?;
    tracing::info!("cleared existing users");

    for &(name, email, password) in SAMPLE_USERS {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?
            .to_string();

        let (id,): (uuid::Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(hash)
        .fetch_one(&db)
        .await?;

        tracing::info!(user_id = %id, email, "seeded user");
    }

    Ok(())
}
