//! hbs - Stadium file toolkit
//!
//! Loads stadium descriptions (field geometry, collidable bodies and spawn
//! rules for a 2D physics game) into a validated, fully resolved model, and
//! writes that model back out as canonical JSON.
//!
//! ```ignore
//! let stadium = hbs::parse(&text)?;
//! assert_eq!(hbs::parse(&hbs::serialize(&stadium))?, stadium);
//! ```

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod serialize;
pub mod types;
pub mod validation;

pub use discovery::{discover, discover_paths, DiscoveryResult, Manifest, ScanResult};
pub use error::{ErrorKind, HbsError, Result};
pub use parser::{load, parse, FieldPath};
pub use render::{render_stadium, write_png};
pub use serialize::{serialize, serialize_compact, to_value};
pub use types::{
    Background, BackgroundType, CameraFollow, CollisionFlags, Colour, Disc, Goal, Joint,
    JointLength, JointStrength, KickOffReset, Plane, PlayerPhysics, Point, Segment, Stadium, Team,
    Trait, TraitTable, Vertex,
};
pub use validation::{validate_stadium, Diagnostic, Lint, Severity, ValidationResult};
