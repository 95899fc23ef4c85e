//! Dinopark Engine library.
//!
//! ## Structure
//!
//! - `stores/` - In-memory, lock-guarded park state (place registry, enclosure handles)
//! - `infrastructure/` - Configuration, the `ParkControl` port and seed loading
//! - `park` - Park composition root

pub mod infrastructure;
pub mod park;
pub mod stores;

pub use infrastructure::config::AppConfig;
pub use infrastructure::ports::ParkControl;
pub use park::Park;
