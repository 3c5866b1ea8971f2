pub mod composer;
pub mod rules;
pub mod types;

pub use composer::{compose_advisory, format_long, format_short, uniq};
pub use rules::{phase_rule, PhaseRule};
pub use types::{AdvisoryPayload, ZodiacAdvice};
