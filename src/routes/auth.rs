use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::IntoResponse,
    routing::post,
};
use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::id::{IdGenerator, RandomIdGenerator, USER_PREFIX};
use crate::models::{LoginUser, RegisterUser, RegisteredUser, TokenResponse, User};
use crate::routes::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(register))
        .route("/authentications", post(login))
}

fn jwt_secret() -> String {
    std::env::var("SECRET_KEY").unwrap_or_else(|_| "forum-api-dev-secret".to_string())
}

async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterUser>,
) -> Result<impl IntoResponse, AppError> {
    let username = input.username.trim();

    if username.is_empty() || input.password.is_empty() {
        return Err(AppError::BadRequest(
            "username and password are required".to_string(),
        ));
    }

    if username.len() > 50 || username.contains(char::is_whitespace) {
        return Err(AppError::BadRequest("invalid username".to_string()));
    }

    let existing =
        sqlx::query_as::<_, (String,)>("SELECT id FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&state.pool)
            .await?;

    if existing.is_some() {
        return Err(AppError::BadRequest(
            "username already registered".to_string(),
        ));
    }

    let hashed = hash(&input.password, DEFAULT_COST)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let id = RandomIdGenerator.generate(USER_PREFIX);

    sqlx::query("INSERT INTO users (id, username, hashed_password, date) VALUES (?, ?, ?, ?)")
        .bind(&id)
        .bind(username)
        .bind(&hashed)
        .bind(Utc::now())
        .execute(&state.pool)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisteredUser {
            id,
            username: username.to_string(),
        }),
    ))
}

async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginUser>,
) -> Result<impl IntoResponse, AppError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
        .bind(&input.username)
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| AppError::Unauthorized("incorrect username or password".to_string()))?;

    let valid = verify(&input.password, &user.hashed_password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::Unauthorized(
            "incorrect username or password".to_string(),
        ));
    }

    let token = generate_jwt(&user.id)?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            access_token: token,
            token_type: "bearer".to_string(),
        }),
    ))
}

fn generate_jwt(user_id: &str) -> Result<String, AppError> {
    let expiration = Utc::now()
        .checked_add_signed(chrono::Duration::hours(24))
        .ok_or_else(|| AppError::Internal("invalid expiration timestamp".to_string()))?
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret().as_bytes()),
    )
    .map_err(|e| AppError::Internal(e.to_string()))
}

/// Resolves the bearer token in `Authorization` to the stored user row.
pub async fn extract_current_user(
    pool: &SqlitePool,
    headers: &HeaderMap,
) -> Result<User, AppError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("invalid authorization header".to_string()))?;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret().as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized("invalid token".to_string()))?;

    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(&token_data.claims.sub)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::Unauthorized("invalid token".to_string()))
}
