use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Opt;

// `Opt::None` travels as the format's null, `Opt::Some` as the bare value.
impl<T: Serialize> Serialize for Opt<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Opt::Some(val) => serializer.serialize_some(val),
            Opt::None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Opt<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let val = Option::<T>::deserialize(deserializer)?;
        Ok(Opt::from(val))
    }
}
