pub mod filter;
pub mod poller;

pub use filter::EventFilter;
pub use poller::Poller;
