//! Runtime objects of the active system.

use std::collections::HashMap;

use glam::DVec3;
use serde::Serialize;

use super::body::BodyId;

/// Index of a live body inside [`Space`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LiveId(pub(crate) usize);

/// A currently simulated object. Ships have no system body.
#[derive(Debug, Clone, Serialize)]
pub struct LiveBody {
    pub id: LiveId,
    pub name: String,
    pub system_body: Option<BodyId>,
    /// Metres, system frame
    pub position: DVec3,
    /// Metres per second, system frame
    pub velocity: DVec3,
}

impl LiveBody {
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}

/// Live state of the system the player is currently in.
#[derive(Debug, Clone)]
pub struct Space {
    system: String,
    player: DVec3,
    bodies: Vec<LiveBody>,
    by_body: HashMap<BodyId, LiveId>,
}

impl Space {
    pub fn new(system: impl Into<String>, player: impl Into<DVec3>) -> Self {
        Self {
            system: system.into(),
            player: player.into(),
            bodies: Vec::new(),
            by_body: HashMap::new(),
        }
    }

    /// Add a live body and return its id.
    pub fn spawn(
        &mut self,
        name: impl Into<String>,
        system_body: Option<BodyId>,
        position: impl Into<DVec3>,
        velocity: impl Into<DVec3>,
    ) -> LiveId {
        let id = LiveId(self.bodies.len());
        if let Some(body) = system_body {
            self.by_body.insert(body, id);
        }
        self.bodies.push(LiveBody {
            id,
            name: name.into(),
            system_body,
            position: position.into(),
            velocity: velocity.into(),
        });
        id
    }

    /// Name of the system the player is in.
    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn is_current(&self, system_name: &str) -> bool {
        self.system == system_name
    }

    pub fn player_position(&self) -> DVec3 {
        self.player
    }

    pub fn get(&self, id: LiveId) -> Option<&LiveBody> {
        self.bodies.get(id.0)
    }

    pub fn live_for(&self, body: BodyId) -> Option<&LiveBody> {
        self.by_body.get(&body).and_then(|id| self.get(*id))
    }

    pub fn bodies(&self) -> impl Iterator<Item = &LiveBody> {
        self.bodies.iter()
    }

    pub fn distance_to_player(&self, live: &LiveBody) -> f64 {
        live.position.distance(self.player)
    }

    /// Live distance of a system body, if it is instantiated.
    pub fn body_distance(&self, body: BodyId) -> Option<f64> {
        self.live_for(body).map(|live| self.distance_to_player(live))
    }
}
