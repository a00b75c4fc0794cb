//! Size-fit engine: anthropometric estimates from height and weight,
//! adaptive slider domains around them, and morph weights for the avatar.
//!
//! ```
//! use bodyfit::{FitSession, Gender, MeasurementType, SizingEngine};
//!
//! let engine = SizingEngine::default();
//! let mut session = FitSession::new(&engine);
//! session.set_profile(Some(180.0), Some(80.0), Gender::Unspecified);
//!
//! let chest = session.range(MeasurementType::Chest);
//! assert_eq!(chest.default, 109.8);
//!
//! session.set_value(MeasurementType::Chest, chest.max);
//! let frame = session.morph_frame();
//! assert_eq!(frame.len(), 3);
//! ```

pub mod cache;
pub mod config;
pub mod data;
pub mod engine;
pub mod measurement;
pub mod state;

pub use cache::{RangeCache, RangeKey};
pub use config::{AbsoluteLimits, ConfigError, EngineConfig, Limits};
pub use data::model::{Gender, ReferenceDataset, ReferenceRow};
pub use data::repository::ReferenceRepository;
pub use engine::{
    compute_range, estimate, generate_ticks, normalize, MorphWeight, RangeBounds, SizingEngine,
    SliderScale,
};
pub use measurement::{MeasurementEstimate, MeasurementType, MorphTarget};
pub use state::{FitSession, MorphFrame, SliderState};
