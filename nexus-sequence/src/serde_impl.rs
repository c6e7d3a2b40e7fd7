//! `serde` support: a list serializes as a plain sequence, front to back.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::{Key, LinkedList};

impl<T: Serialize, K: Key> Serialize for LinkedList<T, K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

struct ListVisitor<T, K>(PhantomData<(T, K)>);

impl<'de, T: Deserialize<'de>, K: Key> Visitor<'de> for ListVisitor<T, K> {
    type Value = LinkedList<T, K>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut list = LinkedList::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(value) = seq.next_element()? {
            if list.try_append(value).is_err() {
                return Err(de::Error::custom(format_args!(
                    "sequence longer than key type allows ({} elements)",
                    list.len()
                )));
            }
        }
        Ok(list)
    }
}

impl<'de, T: Deserialize<'de>, K: Key> Deserialize<'de> for LinkedList<T, K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(ListVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_array() {
        let mut list: LinkedList<u32> = [1, 2, 3].into();
        list.swap(&1, &3);
        assert_eq!(serde_json::to_string(&list).unwrap(), "[3,2,1]");
    }

    #[test]
    fn deserializes_in_order() {
        let list: LinkedList<String> = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(list.to_text(","), "a,b");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn too_long_for_key_type_is_an_error() {
        let values: Vec<u32> = (0..300).collect();
        let json = serde_json::to_string(&values).unwrap();

        let err = serde_json::from_str::<LinkedList<u32, u8>>(&json).unwrap_err();
        assert!(err.to_string().contains("longer than key type allows"));

        let fits = serde_json::to_string(&values[..255]).unwrap();
        let list: LinkedList<u32, u8> = serde_json::from_str(&fits).unwrap();
        assert_eq!(list.len(), 255);
    }

    #[test]
    fn rejects_non_sequence() {
        let err = serde_json::from_str::<LinkedList<u32>>("{}");
        assert!(err.is_err());
    }
}
