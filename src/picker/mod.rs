//! The sampling core: display-space pointer → image-space pixel → color,
//! plus the hover/lock selection and the loupe projection. UI-free — the
//! egui shell feeds it events and renders the data it returns.

pub mod color;
pub mod geometry;
pub mod magnifier;
pub mod sampler;
pub mod selection;
pub mod session;

pub use geometry::DisplayGeometry;
pub use magnifier::MagnifierFrame;
pub use sampler::{SampleResult, SourceImage};
pub use selection::SelectionState;
pub use session::Session;
