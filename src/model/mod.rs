mod label;
mod object_class;
mod object_value;
mod oid;
mod return_value;

pub use label::{Label, LabelError};
pub use object_class::{ObjectClass, ObjectHandle};
pub use object_value::ObjectValue;
pub use oid::{Oid, OidError};
pub use return_value::ReturnValue;
