//! An adapter serializes exactly as its container.

use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::DenseIndexed;
use crate::caps::Sequence;
use crate::index::DomainIndex;

impl<C: Sequence + Serialize, I: DomainIndex> Serialize for DenseIndexed<C, I> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.underlying().serialize(serializer)
    }
}

impl<'de, C: Sequence + Deserialize<'de>, I: DomainIndex> Deserialize<'de> for DenseIndexed<C, I> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        C::deserialize(deserializer).map(Self::from_underlying)
    }
}
