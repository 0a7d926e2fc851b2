pub mod intake;
pub mod reply;
pub mod reservation_id;
pub mod sheets;
