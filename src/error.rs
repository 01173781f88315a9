use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Building not found: {0}")]
    BuildingNotFound(String),
    #[error("Intersection not found: {0}")]
    IntersectionNotFound(String),
    #[error("Node not found: {0}")]
    NodeNotFound(String),
    #[error("Room not found in {building}: {room}")]
    RoomNotFound { building: String, room: String },
    #[error("Coordinates ({lat}, {lon}) are outside the campus bounds")]
    OutOfBounds { lat: f64, lon: f64 },
    #[error("Path between {0} and {1} already exists")]
    DuplicatePath(String, String),
    #[error("No path exists between {0} and {1}")]
    PathNotFound(String, String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),
}
