use rand::Rng;

use crate::models::{Performance, Players, ServerState, ServerStatus};
use crate::AppState;

pub fn initial_fleet() -> Vec<ServerStatus> {
    vec![
        ServerStatus {
            id: "survival".to_string(),
            name: "Survival Server".to_string(),
            status: ServerState::Online,
            players: Players { online: 12, max: 50 },
            version: "1.20.4".to_string(),
            uptime: "5d 12h 34m".to_string(),
            performance: Performance { cpu: 45.0, ram: 68.0, tps: 19.8 },
            last_update: "2 minutes ago".to_string(),
        },
        ServerStatus {
            id: "creative".to_string(),
            name: "Creative Server".to_string(),
            status: ServerState::Online,
            players: Players { online: 8, max: 30 },
            version: "1.20.4".to_string(),
            uptime: "2d 8h 15m".to_string(),
            performance: Performance { cpu: 23.0, ram: 42.0, tps: 20.0 },
            last_update: "1 minute ago".to_string(),
        },
        ServerStatus {
            id: "modded".to_string(),
            name: "Modded Server".to_string(),
            status: ServerState::Maintenance,
            players: Players { online: 0, max: 25 },
            version: "1.19.2 (Forge)".to_string(),
            uptime: "0d 0h 0m".to_string(),
            performance: Performance { cpu: 0.0, ram: 0.0, tps: 0.0 },
            last_update: "30 minutes ago".to_string(),
        },
    ]
}

/// One simulation step. There is no real server behind this: online servers
/// drift a player in or out and wobble their load figures, everything else
/// just reads as empty.
pub fn tick<R: Rng>(servers: &mut [ServerStatus], rng: &mut R) {
    for server in servers.iter_mut() {
        if server.status == ServerState::Online {
            server.players.online = if rng.gen_bool(0.5) {
                server.players.online + 1
            } else {
                server.players.online.saturating_sub(1)
            };
            server.performance.cpu =
                (server.performance.cpu + (rng.gen::<f32>() - 0.5) * 10.0).clamp(0.0, 100.0);
            server.performance.ram =
                (server.performance.ram + (rng.gen::<f32>() - 0.5) * 5.0).clamp(0.0, 100.0);
            server.performance.tps =
                (server.performance.tps + (rng.gen::<f32>() - 0.5) * 0.5).clamp(0.0, 20.0);
        } else {
            server.players.online = 0;
        }
        server.last_update = "a few seconds ago".to_string();
    }
}

pub fn server_fleet(state: &AppState) -> Vec<ServerStatus> {
    state.servers.lock().unwrap().clone()
}

pub fn refresh_servers<R: Rng>(state: &AppState, rng: &mut R) -> Vec<ServerStatus> {
    let mut servers = state.servers.lock().unwrap();
    tick(&mut servers, rng);
    servers.clone()
}
