use chrono::{DateTime, Utc};
use rand::Rng;

const PREFIX: &str = "R";

/// `R` + UTC date as `YYYYMMDD` + three random digits. Same-day
/// collisions are possible; the id is only shown to the user.
pub fn generate_reservation_id<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: u16 = rng.gen_range(0..1000);
    format!("{PREFIX}{}{suffix:03}", now.format("%Y%m%d"))
}

pub fn new_reservation_id() -> String {
    generate_reservation_id(Utc::now(), &mut rand::thread_rng())
}
