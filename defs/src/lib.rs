mod adapter;
mod errors;
mod resource_change;
mod value;

pub use adapter::{Adapter, AdapterResult};
pub use errors::{AdapterError, ErrorKind};
pub use resource_change::{ResourceAction, ResourceMode};
pub use value::{InputValue, ResourceChangeRecord};
