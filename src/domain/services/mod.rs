pub mod guest_name;
pub mod record_store;
pub mod relative_time;
pub mod session_gate;
