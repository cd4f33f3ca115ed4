use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum_marketplace_api::{config::AppConfig, db::create_pool};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    let designer_user = ensure_user(
        &pool,
        "designer@example.com",
        "designer123",
        "Dana Designer",
        "designer",
    )
    .await?;
    let producer_user = ensure_user(
        &pool,
        "producer@example.com",
        "producer123",
        "Paul Producer",
        "producer",
    )
    .await?;

    let designer_id = ensure_designer(&pool, designer_user).await?;
    let producer_id = ensure_producer(&pool, producer_user).await?;
    seed_catalog(&pool, designer_id).await?;

    println!("Seed completed. Designer: {designer_id}, Producer: {producer_id}");
    Ok(())
}

async fn ensure_user(
    pool: &sqlx::PgPool,
    email: &str,
    password: &str,
    full_name: &str,
    user_type: &str,
) -> anyhow::Result<Uuid> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let (user_id,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO users (id, email, password_hash, full_name, user_type)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (email) DO UPDATE SET user_type = EXCLUDED.user_type
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(password_hash)
    .bind(full_name)
    .bind(user_type)
    .fetch_one(pool)
    .await?;

    println!("Ensured user {email} (type={user_type})");
    Ok(user_id)
}

async fn ensure_designer(pool: &sqlx::PgPool, user_id: Uuid) -> anyhow::Result<Uuid> {
    let (id,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO designers (id, user_id, brand_name, bio)
        VALUES ($1, $2, 'Dana Prints', 'Poster and apparel designs')
        ON CONFLICT (user_id) DO UPDATE SET brand_name = EXCLUDED.brand_name
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

async fn ensure_producer(pool: &sqlx::PgPool, user_id: Uuid) -> anyhow::Result<Uuid> {
    let capabilities = serde_json::json!({
        "capabilities": ["screen-printing", "dtg", "embroidery"]
    });
    let (id,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO producers (id, user_id, business_name, description, production_capabilities, verified)
        VALUES ($1, $2, 'Sharp Press Co', 'Full-service print shop', $3, TRUE)
        ON CONFLICT (user_id) DO UPDATE SET business_name = EXCLUDED.business_name
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(capabilities)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

async fn seed_catalog(pool: &sqlx::PgPool, designer_id: Uuid) -> anyhow::Result<()> {
    let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM designs WHERE title = $1")
        .bind("City Skyline Poster")
        .fetch_optional(pool)
        .await?;

    let design_id = match existing {
        Some((id,)) => id,
        None => {
            let (id,): (Uuid,) = sqlx::query_as(
                r#"
                INSERT INTO designs (id, designer_id, title, description, status)
                VALUES ($1, $2, 'City Skyline Poster', 'Two-color skyline print', 'active')
                RETURNING id
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(designer_id)
            .fetch_one(pool)
            .await?;
            id
        }
    };

    sqlx::query(
        r#"
        INSERT INTO product_listings (id, design_id, sku, base_price, available_sizes)
        VALUES ($1, $2, 'POSTER-SKY-001', 2500, '["18x24", "24x36"]')
        ON CONFLICT (sku) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(design_id)
    .execute(pool)
    .await?;

    println!("Seeded catalog");
    Ok(())
}
