//! Star system model: the static body hierarchy, the live objects of the
//! player's current system, and the loader that builds both from a file.

mod body;
mod live;
mod loader;
mod selection;

pub use body::{BodyCategory, BodyId, BodyType, StarSystem, SystemBody};
pub use live::{LiveBody, LiveId, Space};
pub use loader::{
    assemble, builtin_sol, load_system, parse_system, BodyRecord, LiveRecord, LoadedSystem,
    PlayerRecord, ShipRecord, SystemBuilder, SystemFile,
};
pub use selection::{Selection, SelectionRef};
