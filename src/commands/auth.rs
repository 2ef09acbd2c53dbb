use std::sync::atomic::Ordering;
use std::thread;

use rand::Rng;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::{
    models::{Account, Role, User},
    util::storage::{self, Loaded},
    AppState,
};

pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const CURRENT_USER_KEY: &str = "current_user";
pub const REGISTERED_USERS_KEY: &str = "registered_users";

// Placeholder token; presence of the key is what marks a session as active.
const PLACEHOLDER_TOKEN: &str = "mock_jwt_token";

// Demo bypass credentials, always accepted as the implicit administrator.
const DEMO_EMAIL: &str = "admin@example.com";
const DEMO_PASSWORD: &str = "admin123";
const DEMO_AVATAR: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face";
const SIGNUP_AVATAR: &str =
    "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=150&h=150&fit=crop&crop=face";

/// Attempt to log in. Wrong credentials or a failed persistence step report
/// `false`; every failed attempt is immediately retryable.
pub fn login(state: &AppState, email: &str, password: &str) -> bool {
    state.pending.store(true, Ordering::SeqCst);
    thread::sleep(state.auth_delay); // simulated network latency
    let ok = apply_login(state, email, password);
    state.pending.store(false, Ordering::SeqCst);
    ok
}

/// Register a new account and log it in. Fails when the email is already
/// taken (case-sensitive exact match); the registered set is left untouched.
pub fn signup(state: &AppState, email: &str, password: &str, name: &str) -> bool {
    state.pending.store(true, Ordering::SeqCst);
    thread::sleep(state.auth_delay);
    let ok = apply_signup(state, email, password, name);
    state.pending.store(false, Ordering::SeqCst);
    ok
}

/// Drop the current identity and both persisted session keys. Always
/// succeeds, from any prior state.
pub fn logout(state: &AppState) {
    *state.session.lock().unwrap() = None;
    clear_persisted(state);
}

/// Process-start rehydration. The token and the user snapshot must both be
/// present and parsable; anything else (missing half, tampered or corrupt
/// entries) clears both keys and lands in anonymous state.
pub fn restore_session(state: &AppState) -> Option<User> {
    let token: Loaded<String> = storage::read_key(&state.app_dir, AUTH_TOKEN_KEY);
    let snapshot: Loaded<User> = storage::read_key(&state.app_dir, CURRENT_USER_KEY);
    match (token, snapshot) {
        (Loaded::Present(_), Loaded::Present(user)) => {
            *state.session.lock().unwrap() = Some(user.clone());
            Some(user)
        }
        (Loaded::Absent, Loaded::Absent) => None,
        _ => {
            tracing::warn!("discarding unusable persisted session");
            clear_persisted(state);
            None
        }
    }
}

pub fn current_user(state: &AppState) -> Option<User> {
    state.session.lock().unwrap().clone()
}

pub fn is_authenticated(state: &AppState) -> bool {
    state.session.lock().unwrap().is_some()
}

// In-flight flag for the presentation layer; never persisted.
pub fn is_pending(state: &AppState) -> bool {
    state.pending.load(Ordering::SeqCst)
}

fn apply_login(state: &AppState, email: &str, password: &str) -> bool {
    let user = match find_match(state, email, password) {
        Some(user) => user,
        None => return false,
    };
    let mut session = state.session.lock().unwrap();
    if persist_session(state, &user).is_err() {
        tracing::warn!("login for {} failed to persist", email);
        return false;
    }
    *session = Some(user);
    true
}

fn apply_signup(state: &AppState, email: &str, password: &str, name: &str) -> bool {
    let mut session = state.session.lock().unwrap();
    let mut accounts = registered_accounts(state);
    if email == DEMO_EMAIL || accounts.iter().any(|a| a.email == email) {
        return false;
    }

    let salt = new_salt();
    let account = Account {
        id: Uuid::now_v7().to_string(),
        email: email.to_string(),
        name: name.to_string(),
        role: Role::User,
        avatar: Some(SIGNUP_AVATAR.to_string()),
        password_digest: digest_password(&salt, password),
        salt,
        created_at: now_rfc3339(),
    };
    let user = public_user(&account);
    accounts.push(account);

    if storage::write_key(&state.app_dir, REGISTERED_USERS_KEY, &accounts).is_err() {
        tracing::warn!("signup for {} failed to persist account", email);
        return false;
    }
    if persist_session(state, &user).is_err() {
        tracing::warn!("signup for {} failed to persist session", email);
        return false;
    }
    *session = Some(user);
    true
}

fn find_match(state: &AppState, email: &str, password: &str) -> Option<User> {
    if email == DEMO_EMAIL && password == DEMO_PASSWORD {
        return Some(User {
            id: "1".to_string(),
            email: DEMO_EMAIL.to_string(),
            name: "Admin User".to_string(),
            role: Role::Admin,
            avatar: Some(DEMO_AVATAR.to_string()),
        });
    }
    registered_accounts(state)
        .iter()
        .find(|a| a.email == email && a.password_digest == digest_password(&a.salt, password))
        .map(public_user)
}

fn registered_accounts(state: &AppState) -> Vec<Account> {
    match storage::read_key(&state.app_dir, REGISTERED_USERS_KEY) {
        Loaded::Present(accounts) => accounts,
        Loaded::Absent => vec![],
        Loaded::Corrupt => {
            tracing::warn!("registered account set unreadable, treating as empty");
            vec![]
        }
    }
}

fn persist_session(state: &AppState, user: &User) -> Result<(), storage::StorageError> {
    storage::write_key(&state.app_dir, CURRENT_USER_KEY, user)?;
    storage::write_key(&state.app_dir, AUTH_TOKEN_KEY, &PLACEHOLDER_TOKEN)
}

fn clear_persisted(state: &AppState) {
    storage::remove_key(&state.app_dir, AUTH_TOKEN_KEY);
    storage::remove_key(&state.app_dir, CURRENT_USER_KEY);
}

fn public_user(account: &Account) -> User {
    User {
        id: account.id.clone(),
        email: account.email.clone(),
        name: account.name.clone(),
        role: account.role,
        avatar: account.avatar.clone(),
    }
}

fn digest_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

fn new_salt() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill(&mut bytes);
    hex::encode(bytes)
}

fn now_rfc3339() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "".into())
}
