/// Describes what a key is: something which can be compared for equality and
/// boil itself down to a signed hash code.
///
/// Keys which compare equal must produce the same hash code. The map trusts
/// this and never checks it; breaking it just means lookups miss.
pub trait Hashable: Eq {
    /// Computes the hash code for this key. Must be pure and deterministic.
    /// Negative codes are fine, the map normalizes them into a bucket.
    fn hash_code(&self) -> i64;
}

impl<T> Hashable for &T
where
    T: Hashable + ?Sized,
{
    fn hash_code(&self) -> i64 {
        (**self).hash_code()
    }
}

// integers hash to themselves. u64 and usize values past i64::MAX wrap
// around to negative codes.
macro_rules! impl_hashable_for_integers {
    ($($t:ty),*) => {
        $(
            impl Hashable for $t {
                fn hash_code(&self) -> i64 {
                    *self as i64
                }
            }
        )*
    };
}

impl_hashable_for_integers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
