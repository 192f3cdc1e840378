//! Domain models: vehicles, spots, levels, facility, sessions, events.

pub mod event;
pub mod facility;
pub mod session;
pub mod spot;
pub mod vehicle;
