//! Core module - pregnancy computations, configuration and sensors

pub mod assets;
pub mod clock;
pub mod config;
pub mod context;
pub mod milestone;
pub mod overrides;
pub mod reference;
pub mod sensors;

pub use assets::{install_images, AssetError, InstallOutcome};
pub use clock::{
    countdown, snapshot, DueDateRange, PregnancySnapshot, PregnancyStatus, TermStatus, Trimester,
    DEFAULT_GESTATION_DAYS,
};
pub use config::{SetupError, SetupInput, StoreError, TrackerConfig, TrackerStore};
pub use context::TrackerContext;
pub use milestone::{Milestone, MilestoneProgress, NextMilestone};
pub use overrides::{
    load_overrides, parse_overrides, OverrideCache, OverrideSource, VerseBook, VerseOverride,
    VerseOverrides,
};
pub use reference::{parse_reference, ReferenceParts};
pub use sensors::{read_all, SensorKind, SensorReading};
