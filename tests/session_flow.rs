use std::time::Duration;

use folio::models::Role;
use folio::{auth, search, servers, AppState};
use rand::{rngs::SmallRng, SeedableRng};
use tempfile::TempDir;

fn app(dir: &TempDir) -> AppState {
    AppState::with_auth_delay(dir.path().to_path_buf(), Duration::ZERO)
}

#[test]
fn a_session_survives_a_restart() {
    let dir = TempDir::new().unwrap();

    let first = app(&dir);
    assert!(auth::restore_session(&first).is_none());
    assert!(auth::signup(&first, "a@b.com", "x", "A"));
    assert_eq!(auth::current_user(&first).unwrap().role, Role::User);

    // a second process start over the same data dir picks the session up
    let second = app(&dir);
    let user = auth::restore_session(&second).unwrap();
    assert_eq!(user.name, "A");
    assert!(auth::is_authenticated(&second));

    auth::logout(&second);
    let third = app(&dir);
    assert!(auth::restore_session(&third).is_none());
    // the account itself outlives the session
    assert!(auth::login(&third, "a@b.com", "x"));
}

#[test]
fn site_search_is_quiet_until_asked() {
    assert!(search::search("").is_empty());
    let hits = search::search("profile");
    assert!(hits.iter().any(|r| r.title == "Profile"));
}

#[test]
fn the_fleet_drifts_under_refresh() {
    let dir = TempDir::new().unwrap();
    let state = app(&dir);
    let before = servers::server_fleet(&state);
    let mut rng = SmallRng::seed_from_u64(11);
    let after = servers::refresh_servers(&state, &mut rng);
    assert_eq!(before.len(), after.len());
    assert!(after.iter().all(|s| s.last_update == "a few seconds ago"));
    // the snapshot reflects the mutation
    assert_eq!(servers::server_fleet(&state), after);
}
