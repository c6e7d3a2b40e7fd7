//! Node key types.
//!
//! Nodes live in an arena and refer to their neighbors by key rather than by
//! pointer. A [`Key`] is a small unsigned integer with one reserved value,
//! [`Key::NONE`], standing in for "no neighbor". Keeping the sentinel inside
//! the integer instead of using `Option<K>` keeps list nodes
//! compact: two `u32` links cost 8 bytes, two `Option<usize>` links cost 32.

/// An unsigned index type with a reserved "none" value.
///
/// # Example
///
/// ```
/// use nexus_sequence::Key;
///
/// let key: u32 = 7;
/// assert!(key.is_some());
/// assert!(u32::NONE.is_none());
/// assert_eq!(u32::try_from_usize(u32::MAX as usize), None);
/// ```
pub trait Key: Copy + Eq + core::fmt::Debug {
    /// Sentinel for an empty link. Never handed out as a node key.
    const NONE: Self;

    /// Widens the key to an arena slot number.
    fn as_usize(self) -> usize;

    /// Narrows an arena slot number to a key.
    ///
    /// Returns `None` when `val` does not fit or would alias [`Key::NONE`].
    fn try_from_usize(val: usize) -> Option<Self>;

    /// Returns `true` if this is the sentinel.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is a real node key.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Converts the sentinel form into an `Option`.
    #[inline]
    fn to_option(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn try_from_usize(val: usize) -> Option<Self> {
                    match <$ty>::try_from(val) {
                        Ok(key) if key != Self::NONE => Some(key),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_key_for_unsigned!(u8, u16, u32, u64, usize);
