use serde::{Deserialize, Serialize};

/// Index of a body inside its [`StarSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BodyId(pub(crate) usize);

impl BodyId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Kind of body as described in a system file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    /// Barycentre of a multiple-star system
    Gravpoint,
    Star,
    GasGiant,
    RockyPlanet,
    Asteroid,
    OrbitalStation,
    SurfaceStation,
}

impl BodyType {
    fn is_planetary(self) -> bool {
        matches!(
            self,
            BodyType::GasGiant | BodyType::RockyPlanet | BodyType::Asteroid
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            BodyType::Gravpoint => "Gravpoint",
            BodyType::Star => "Star",
            BodyType::GasGiant => "Gas giant",
            BodyType::RockyPlanet => "Rocky planet",
            BodyType::Asteroid => "Asteroid",
            BodyType::OrbitalStation => "Orbital station",
            BodyType::SurfaceStation => "Surface station",
        }
    }
}

/// Exclusive display category of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyCategory {
    Planet,
    Moon,
    GroundStation,
    SpaceStation,
    Other,
}

impl BodyCategory {
    /// Derive the category from a body's type and its parent's type.
    pub fn classify(body_type: BodyType, parent_type: Option<BodyType>) -> Self {
        match body_type {
            BodyType::OrbitalStation => BodyCategory::SpaceStation,
            BodyType::SurfaceStation => BodyCategory::GroundStation,
            t if t.is_planetary() => match parent_type {
                Some(p) if p.is_planetary() => BodyCategory::Moon,
                _ => BodyCategory::Planet,
            },
            _ => BodyCategory::Other,
        }
    }

    pub fn is_moon(self) -> bool {
        self == BodyCategory::Moon
    }

    pub fn is_space_station(self) -> bool {
        self == BodyCategory::SpaceStation
    }

    pub fn is_ground_station(self) -> bool {
        self == BodyCategory::GroundStation
    }

    pub fn is_station(self) -> bool {
        self.is_space_station() || self.is_ground_station()
    }
}

/// A node of the static body hierarchy.
#[derive(Debug, Clone, Serialize)]
pub struct SystemBody {
    pub id: BodyId,
    /// Stable identifier from the system file
    pub key: String,
    pub name: String,
    pub body_type: BodyType,
    pub category: BodyCategory,
    pub parent: Option<BodyId>,
    pub children: Vec<BodyId>,
    /// Closest orbital distance to the parent, metres
    pub periapsis: f64,
    /// Furthest orbital distance to the parent, metres
    pub apoapsis: f64,
    pub mass: Option<f64>,
    pub radius: Option<f64>,
    pub orbital_period: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub population: Option<f64>,
}

impl SystemBody {
    /// Sort key for orbital ordering; half of it is the orbit midpoint.
    pub fn orbit_key(&self) -> f64 {
        self.periapsis + self.apoapsis
    }

    pub fn orbit_midpoint(&self) -> f64 {
        self.orbit_key() / 2.0
    }
}

/// The static hierarchy of one star system.
#[derive(Debug, Clone)]
pub struct StarSystem {
    pub(crate) name: String,
    pub(crate) bodies: Vec<SystemBody>,
    pub(crate) root: BodyId,
}

impl StarSystem {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> BodyId {
        self.root
    }

    pub fn body(&self, id: BodyId) -> &SystemBody {
        &self.bodies[id.0]
    }

    pub fn get(&self, id: BodyId) -> Option<&SystemBody> {
        self.bodies.get(id.0)
    }

    pub fn children(&self, id: BodyId) -> &[BodyId] {
        self.bodies
            .get(id.0)
            .map(|b| b.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn find(&self, key: &str) -> Option<&SystemBody> {
        self.bodies.iter().find(|b| b.key == key)
    }

    pub fn bodies(&self) -> impl Iterator<Item = &SystemBody> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Ids from the root down to `id`, inclusive.
    pub fn path_to(&self, id: BodyId) -> Vec<BodyId> {
        let mut path = vec![id];
        let mut current = self.body(id).parent;
        while let Some(parent) = current {
            path.push(parent);
            current = self.body(parent).parent;
        }
        path.reverse();
        path
    }
}
