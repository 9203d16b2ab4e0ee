//! Account registration, login, and token resolution.

use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::adapters::{gamers_sea, tokens_sea, users_sea};
use crate::entities::{gamers, users};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::utils::password::{hash_password, verify_password};
use crate::utils::token::generate_token;

/// Profile fields accepted at registration.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
}

/// Register a new account: user row, gamer profile, and first auth token.
///
/// The caller supplies the transaction, so the three inserts land or vanish
/// together. Returns the created user, its gamer profile, and the token.
pub async fn register_account(
    conn: &(impl ConnectionTrait + Send + Sync),
    account: NewAccount,
) -> Result<(users::Model, gamers::Model, String), AppError> {
    if account.username.trim().is_empty() {
        return Err(AppError::invalid(
            ErrorCode::InvalidUsername,
            "Username cannot be empty",
        ));
    }
    if account.password.is_empty() {
        return Err(AppError::invalid(
            ErrorCode::InvalidPassword,
            "Password cannot be empty",
        ));
    }

    if users_sea::find_by_username(conn, &account.username)
        .await?
        .is_some()
    {
        return Err(AppError::conflict(
            ErrorCode::UsernameTaken,
            format!("Username '{}' is already registered", account.username),
        ));
    }

    let user = users_sea::create_user(
        conn,
        users_sea::UserCreate {
            username: account.username,
            password_hash: hash_password(&account.password),
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
        },
    )
    .await?;

    let gamer = gamers_sea::create_gamer(
        conn,
        gamers_sea::GamerCreate {
            user_id: user.id,
            bio: account.bio,
            address: account.address,
            phone_number: account.phone_number,
        },
    )
    .await?;

    let token = issue_token(conn, user.id).await?;

    info!(user_id = user.id, gamer_id = gamer.id, "Registered new account");

    Ok((user, gamer, token))
}

/// Authenticate by username/password and issue a fresh token.
///
/// Unknown username and wrong password are indistinguishable to the caller.
pub async fn login(
    conn: &(impl ConnectionTrait + Send + Sync),
    username: &str,
    password: &str,
) -> Result<String, AppError> {
    let user = match users_sea::find_by_username(conn, username).await? {
        Some(user) => user,
        None => {
            debug!(username, "Login attempt for unknown username");
            return Err(AppError::invalid_credentials());
        }
    };

    if !verify_password(password, &user.password_hash)? {
        debug!(user_id = user.id, "Login attempt with wrong password");
        return Err(AppError::invalid_credentials());
    }

    issue_token(conn, user.id).await
}

/// Mint and persist a new opaque token for the user.
async fn issue_token(conn: &(impl ConnectionTrait + Send + Sync), user_id: i64) -> Result<String, AppError> {
    let token = generate_token();
    tokens_sea::insert_token(conn, user_id, token.clone()).await?;
    Ok(token)
}

/// Resolve an opaque token to the owning gamer profile.
///
/// Returns the user and gamer; an unknown token is a 401, a token whose user
/// lost its gamer profile is a 403-shaped data error surfaced as not-found.
pub async fn gamer_for_token(
    conn: &(impl ConnectionTrait + Send + Sync),
    token: &str,
) -> Result<(users::Model, gamers::Model), AppError> {
    let token_row = tokens_sea::find_by_token(conn, token)
        .await?
        .ok_or_else(AppError::unauthorized_invalid_token)?;

    let user = users_sea::find_by_id(conn, token_row.user_id)
        .await?
        .ok_or_else(AppError::unauthorized_invalid_token)?;

    let gamer = gamers_sea::find_by_user_id(conn, user.id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(
                ErrorCode::GamerNotFound,
                format!("No gamer profile for user {}", user.id),
            )
        })?;

    Ok((user, gamer))
}
