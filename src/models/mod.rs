pub mod reservation;
pub mod skill;

pub use reservation::{ReservationRecord, ReservationStatus, NOT_SPECIFIED};
pub use skill::{SkillPayload, SkillResponse};
