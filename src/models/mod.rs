pub mod attendance;
pub mod record;
pub mod time_slot;
