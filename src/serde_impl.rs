use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Date;
use crate::consts::BINARY_LEN;

// Human-readable formats get the ISO-8601 text, everything else gets the
// binary record.
impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_bytes(&self.to_binary())
        }
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(DateVisitor)
        } else {
            deserializer.deserialize_bytes(DateVisitor)
        }
    }
}

struct DateVisitor;

impl<'de> Visitor<'de> for DateVisitor {
    type Value = Date;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an ISO-8601 date string or a binary date record")
    }

    fn visit_str<E>(self, value: &str) -> Result<Date, E>
    where
        E: de::Error,
    {
        Date::parse_iso(value).map_err(E::custom)
    }

    fn visit_bytes<E>(self, value: &[u8]) -> Result<Date, E>
    where
        E: de::Error,
    {
        Date::from_binary(value).map_err(E::custom)
    }

    // Some formats hand byte strings over as a sequence of `u8`.
    fn visit_seq<A>(self, mut seq: A) -> Result<Date, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut record = [0; BINARY_LEN];
        let mut len = 0;
        while let Some(byte) = seq.next_element::<u8>()? {
            if len == BINARY_LEN {
                return Err(<A::Error as de::Error>::invalid_length(len + 1, &self));
            }
            record[len] = byte;
            len += 1;
        }
        Date::from_binary(&record[..len]).map_err(<A::Error as de::Error>::custom)
    }
}
