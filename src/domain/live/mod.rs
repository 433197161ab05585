//! Live change notifications: the event taxonomy and its wire codec.

mod codec;
mod events;

pub use codec::{decode, encode, Decoded, EventCodecError, TYPE_FIELD};
pub use events::{
    ChangeEvent, ChangeKind, ChildCreated, ChildDeleted, ChildUpdated, EntityContentUpdated,
    EntityCreated, EntityDeleted,
};
