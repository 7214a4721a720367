use core::mem;

use crate::codec::{Decode, Encode, Error, FixedSize};

//
// Implementations for primitives
//
macro_rules! primitive {
    ($($ty:ty),*) => {
        $(
            impl FixedSize for $ty {
                const SIZE: usize = mem::size_of::<Self>();
            }

            impl Decode<'_> for $ty {
                fn decode(src: &[u8]) -> Result<Self, Error> {
                    let mut bytes = [0u8; mem::size_of::<$ty>()];
                    bytes.copy_from_slice(src.get(..Self::SIZE).ok_or(Error::InsufficientSpace)?);
                    Ok(<$ty>::from_le_bytes(bytes))
                }
            }

            impl Encode for $ty {
                fn encode(&self, dest: &mut [u8]) -> Result<(), Error> {
                    dest.get_mut(..Self::SIZE)
                        .ok_or(Error::InsufficientSpace)?
                        .copy_from_slice(&self.to_le_bytes());
                    Ok(())
                }
            }
        )*
    };
}

primitive!(u8, u16, u32, u64, i8, i16, i32, i64);
