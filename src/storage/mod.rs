mod codec;
mod durability;
mod entry;
mod key;
mod log_store;
mod sled_adapter;
mod stable_store;


pub use codec::*;
pub use durability::*;
pub use entry::*;
pub use key::*;
pub use log_store::*;
pub use sled_adapter::*;
pub use stable_store::*;
