use num_bigint::BigInt;

use crate::scalar::Int;

macro_rules! impl_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Int {
                fn from(value: $ty) -> Self {
                    Int(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
