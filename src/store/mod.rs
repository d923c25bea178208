pub mod kv;
pub mod profile;
pub mod trips;

pub use kv::KvStore;
pub use profile::ProfileStore;
pub use trips::TripStore;
