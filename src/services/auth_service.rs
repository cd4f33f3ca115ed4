use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use password_hash::rand_core::OsRng;
use uuid::Uuid;

use crate::{
    db::DbPool,
    dto::auth::{LoginRequest, LoginResponse, PublicUser, RegisterRequest},
    error::{AppError, AppResult},
    models::User,
    response::ApiMessage,
};

pub async fn register_user(pool: &DbPool, payload: RegisterRequest) -> AppResult<ApiMessage> {
    let RegisterRequest {
        email,
        password,
        full_name,
        phone,
        user_type,
        business_name,
    } = payload;

    if user_type != "designer" && user_type != "producer" {
        return Err(AppError::BadRequest(
            "userType must be 'designer' or 'producer'".to_string(),
        ));
    }

    let exist: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
        .bind(email.as_str())
        .fetch_optional(pool)
        .await?;

    if exist.is_some() {
        return Err(AppError::BadRequest("Email already registered".to_string()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();

    // The user row and its profile row land together or not at all.
    let mut tx = pool.begin().await?;

    let user_id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO users (id, email, password_hash, full_name, phone, user_type)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(user_id)
    .bind(email.as_str())
    .bind(password_hash)
    .bind(full_name.as_str())
    .bind(phone.as_deref())
    .bind(user_type.as_str())
    .execute(&mut *tx)
    .await?;

    if user_type == "designer" {
        sqlx::query("INSERT INTO designers (id, user_id) VALUES ($1, $2)")
            .bind(Uuid::new_v4())
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
    } else {
        sqlx::query("INSERT INTO producers (id, user_id, business_name) VALUES ($1, $2, $3)")
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(business_name.unwrap_or_default())
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    tracing::info!(user_id = %user_id, user_type = %user_type, "user registered");

    Ok(ApiMessage::ok("Registration successful"))
}

pub async fn login_user(pool: &DbPool, payload: LoginRequest) -> AppResult<LoginResponse> {
    let LoginRequest { email, password } = payload;
    let user: Option<User> = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email.as_str())
        .fetch_optional(pool)
        .await?;

    // Same response whether the email is unknown or the password is wrong.
    let user = match user {
        Some(u) => u,
        None => return Err(AppError::Unauthorized("Invalid credentials".into())),
    };

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;

    let argon2 = Argon2::default();
    if argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    }

    Ok(LoginResponse {
        success: true,
        user: PublicUser {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            user_type: user.user_type,
        },
    })
}
