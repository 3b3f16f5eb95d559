//! Profile source implementations

pub mod mock_source;

pub use mock_source::MockProfileSource;
