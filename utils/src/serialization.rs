//! A [`serde_with`] adapter for arkworks types implementing
//! [`CanonicalSerialize`] and [`CanonicalDeserialize`], so they can sit
//! inside structs deriving serde traits. Annotate the field with
//! `#[serde_as(as = "fr_utils::serialization::SerdeAs")]` (or a container
//! form such as `Vec<Vec<...>>`).

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use serde_with::Bytes;

pub struct SerdeAs;

impl<T> serde_with::SerializeAs<T> for SerdeAs
where
    T: CanonicalSerialize,
{
    fn serialize_as<S>(val: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut bytes = vec![];
        val.serialize_compressed(&mut bytes)
            .map_err(serde::ser::Error::custom)?;

        Bytes::serialize_as(&bytes, serializer)
    }
}

impl<'de, T> serde_with::DeserializeAs<'de, T> for SerdeAs
where
    T: CanonicalDeserialize,
{
    fn deserialize_as<D>(deserializer: D) -> Result<T, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes: Vec<u8> = Bytes::deserialize_as(deserializer)?;
        T::deserialize_compressed(&mut &bytes[..]).map_err(serde::de::Error::custom)
    }
}
