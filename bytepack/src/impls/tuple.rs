use crate::{ByteBuffer, FromBytes, Result, ToBytes};

macro_rules! impl_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: ToBytes),+> ToBytes for ($($T,)+) {
            fn to_bytes(&self, buf: &mut ByteBuffer) {
                $(
                    self.$idx.to_bytes(buf);
                )+
            }

            fn byte_len(&self) -> Option<usize> {
                let mut total = 0;
                $(
                    total += self.$idx.byte_len()?;
                )+
                Some(total)
            }
        }

        #[allow(non_snake_case)]
        impl<$($T: FromBytes),+> FromBytes for ($($T,)+) {
            fn from_bytes(buf: &mut ByteBuffer) -> Result<Self> {
                $(
                    let $T = <$T as FromBytes>::from_bytes(buf)?;
                )+
                Ok(($($T,)+))
            }
        }
    };
}

impl_tuple!(0 A);
impl_tuple!(0 A, 1 B);
impl_tuple!(0 A, 1 B, 2 C);
impl_tuple!(0 A, 1 B, 2 C, 3 D);
impl_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);
impl_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I);
impl_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J);
impl_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K);
impl_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K, 11 L);
