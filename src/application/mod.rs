mod session;

pub use session::{ANT_STEPS_PER_UPDATE, Session};
