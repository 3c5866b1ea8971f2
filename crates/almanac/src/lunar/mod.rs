pub mod phase;

pub use phase::{
    illumination_at, lunar_phase, lunar_phase_with_correction, moon_age_days, phase_index_at,
    LunarPhaseReading, MoonPhase, REFERENCE_NEW_MOON, REFERENCE_NEW_MOON_JD, SYNODIC_MONTH,
};
