use std::collections::{HashMap, VecDeque};
use std::fs;
use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{OrreryError, Result, SystemError};

use super::body::{BodyCategory, BodyId, BodyType, StarSystem, SystemBody};
use super::live::Space;

const SOL: &str = include_str!("../../systems/sol.toml");

/// On-disk description of a star system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemFile {
    pub name: String,
    #[serde(default, rename = "body")]
    pub bodies: Vec<BodyRecord>,
    /// Present when the player is in this system
    #[serde(default)]
    pub player: Option<PlayerRecord>,
    #[serde(default, rename = "ship")]
    pub ships: Vec<ShipRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyRecord {
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub body_type: BodyType,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub periapsis: f64,
    #[serde(default)]
    pub apoapsis: f64,
    #[serde(default)]
    pub mass: Option<f64>,
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub orbital_period: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub population: Option<f64>,
    #[serde(default)]
    pub live: Option<LiveRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveRecord {
    pub position: DVec3,
    #[serde(default)]
    pub velocity: DVec3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub position: DVec3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipRecord {
    pub name: String,
    pub position: DVec3,
    #[serde(default)]
    pub velocity: DVec3,
}

/// A star system together with its live state, if the player is there.
#[derive(Debug, Clone)]
pub struct LoadedSystem {
    pub system: StarSystem,
    pub space: Option<Space>,
}

/// Load a system file. `.json` files are read as JSON, anything else as TOML.
pub fn load_system(path: &Path) -> Result<LoadedSystem> {
    let content = fs::read_to_string(path).map_err(|e| OrreryError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let file: SystemFile = if is_json {
        serde_json::from_str(&content).map_err(SystemError::from)?
    } else {
        toml::from_str(&content).map_err(SystemError::from)?
    };

    let loaded = assemble(file)?;
    tracing::info!(
        path = %path.display(),
        system = loaded.system.name(),
        bodies = loaded.system.len(),
        live = loaded.space.is_some(),
        "Loaded star system"
    );
    Ok(loaded)
}

/// Parse a system from TOML text.
pub fn parse_system(toml_text: &str) -> Result<LoadedSystem> {
    let file: SystemFile = toml::from_str(toml_text).map_err(SystemError::from)?;
    Ok(assemble(file)?)
}

/// The embedded Sol system, with the player near Earth.
pub fn builtin_sol() -> Result<LoadedSystem> {
    parse_system(SOL)
}

/// Resolve parent links, validate the hierarchy and build the arena.
pub fn assemble(file: SystemFile) -> std::result::Result<LoadedSystem, SystemError> {
    let SystemFile {
        name,
        bodies: records,
        player,
        ships,
    } = file;

    let mut index: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        if index.insert(record.key.as_str(), i).is_some() {
            return Err(SystemError::DuplicateKey(record.key.clone()));
        }
    }

    let mut parents = Vec::with_capacity(records.len());
    for record in &records {
        let parent = match &record.parent {
            Some(key) => Some(*index.get(key.as_str()).ok_or_else(|| {
                SystemError::UnknownParent {
                    body: record.key.clone(),
                    parent: key.clone(),
                }
            })?),
            None => None,
        };
        parents.push(parent);
    }

    let mut roots = parents
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_none())
        .map(|(i, _)| i);
    let root = roots.next().ok_or(SystemError::NoRoot)?;
    if let Some(second) = roots.next() {
        return Err(SystemError::MultipleRoots {
            first: records[root].key.clone(),
            second: records[second].key.clone(),
        });
    }

    let mut children: Vec<Vec<BodyId>> = vec![Vec::new(); records.len()];
    for (i, parent) in parents.iter().enumerate() {
        if let Some(p) = parent {
            children[*p].push(BodyId(i));
        }
    }

    // Everything must hang off the root; a parent cycle leaves its members stranded
    let mut reached = vec![false; records.len()];
    let mut queue = VecDeque::from([root]);
    reached[root] = true;
    while let Some(i) = queue.pop_front() {
        for child in &children[i] {
            if !reached[child.0] {
                reached[child.0] = true;
                queue.push_back(child.0);
            }
        }
    }
    let stranded: Vec<String> = records
        .iter()
        .zip(&reached)
        .filter(|(_, ok)| !**ok)
        .map(|(r, _)| r.key.clone())
        .collect();
    if !stranded.is_empty() {
        return Err(SystemError::Unreachable(stranded));
    }

    let types: Vec<BodyType> = records.iter().map(|r| r.body_type).collect();
    let mut live_records = Vec::new();
    let bodies: Vec<SystemBody> = records
        .into_iter()
        .zip(parents)
        .zip(children)
        .enumerate()
        .map(|(i, ((record, parent), children))| {
            let parent_type = parent.map(|p| types[p]);
            if let Some(live) = record.live {
                live_records.push((BodyId(i), record.name.clone(), live));
            }
            SystemBody {
                id: BodyId(i),
                key: record.key,
                name: record.name,
                body_type: record.body_type,
                category: BodyCategory::classify(record.body_type, parent_type),
                parent: parent.map(BodyId),
                children,
                periapsis: record.periapsis,
                apoapsis: record.apoapsis,
                mass: record.mass,
                radius: record.radius,
                orbital_period: record.orbital_period,
                latitude: record.latitude,
                longitude: record.longitude,
                population: record.population,
            }
        })
        .collect();

    let space = match player {
        Some(player) => {
            let mut space = Space::new(name.clone(), player.position);
            for (id, body_name, live) in live_records {
                space.spawn(body_name, Some(id), live.position, live.velocity);
            }
            for ship in ships {
                space.spawn(ship.name, None, ship.position, ship.velocity);
            }
            Some(space)
        }
        None => {
            if !live_records.is_empty() || !ships.is_empty() {
                tracing::warn!(
                    system = %name,
                    "Live positions ignored: the player is not in this system"
                );
            }
            None
        }
    };

    Ok(LoadedSystem {
        system: StarSystem {
            name,
            bodies,
            root: BodyId(root),
        },
        space,
    })
}

/// Fluent construction of systems in code.
#[derive(Debug, Clone, Default)]
pub struct SystemBuilder {
    file: SystemFile,
}

impl SystemBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            file: SystemFile {
                name: name.into(),
                ..Default::default()
            },
        }
    }

    /// Add a body; later calls such as [`orbit`](Self::orbit) apply to it.
    pub fn body(
        mut self,
        key: impl Into<String>,
        name: impl Into<String>,
        body_type: BodyType,
        parent: Option<&str>,
    ) -> Self {
        self.file.bodies.push(BodyRecord {
            key: key.into(),
            name: name.into(),
            body_type,
            parent: parent.map(str::to_string),
            periapsis: 0.0,
            apoapsis: 0.0,
            mass: None,
            radius: None,
            orbital_period: None,
            latitude: None,
            longitude: None,
            population: None,
            live: None,
        });
        self
    }

    pub fn orbit(mut self, periapsis: f64, apoapsis: f64) -> Self {
        if let Some(last) = self.file.bodies.last_mut() {
            last.periapsis = periapsis;
            last.apoapsis = apoapsis;
        }
        self
    }

    pub fn mass(mut self, kg: f64) -> Self {
        if let Some(last) = self.file.bodies.last_mut() {
            last.mass = Some(kg);
        }
        self
    }

    pub fn surface(mut self, latitude: f64, longitude: f64) -> Self {
        if let Some(last) = self.file.bodies.last_mut() {
            last.latitude = Some(latitude);
            last.longitude = Some(longitude);
        }
        self
    }

    pub fn live(mut self, position: impl Into<DVec3>) -> Self {
        if let Some(last) = self.file.bodies.last_mut() {
            last.live = Some(LiveRecord {
                position: position.into(),
                velocity: DVec3::ZERO,
            });
        }
        self
    }

    pub fn player(mut self, position: impl Into<DVec3>) -> Self {
        self.file.player = Some(PlayerRecord {
            position: position.into(),
        });
        self
    }

    pub fn ship(mut self, name: impl Into<String>, position: impl Into<DVec3>) -> Self {
        self.file.ships.push(ShipRecord {
            name: name.into(),
            position: position.into(),
            velocity: DVec3::ZERO,
        });
        self
    }

    pub fn build(self) -> std::result::Result<LoadedSystem, SystemError> {
        assemble(self.file)
    }
}
