pub mod slots;
pub mod store;

pub use slots::{RequestTicket, Slot, SlotTracker};
pub use store::MovieStore;
