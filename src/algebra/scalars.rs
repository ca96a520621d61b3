use num_traits::{Num, NumAssign};
use std::fmt::{Debug, Display};

/// Core trait for the element values stored in containers.
///
/// Arithmetic on [`Vector`](crate::algebra::Vector) and
/// [`Matrix`](crate::algebra::Matrix) is defined generically over values
/// implementing `ScalarT`.  Implementations are provided automatically for
/// every type satisfying the trait bounds, which includes all of the native
/// integer and floating point types.
///
/// `ScalarT` relies on [`num_traits`](num_traits) for its arithmetic bounds.
pub trait ScalarT:
    'static + Copy + Num + NumAssign + Default + Display + Debug + PartialEq + Sized
{
}

impl<T> ScalarT for T where
    T: 'static + Copy + Num + NumAssign + Default + Display + Debug + PartialEq + Sized
{
}

// Generates the `container op scalar` operators for a list of native types.
// A single generic impl over `T` would overlap with the `container op container`
// impls, so these are stamped out per type instead.
macro_rules! impl_scalar_ops {
    ($container:ident, $($ty:ty),+) => {
        $(
            impl std::ops::Add<$ty> for &$container<$ty> {
                type Output = $container<$ty>;
                #[inline]
                fn add(self, c: $ty) -> Self::Output {
                    self.add_scalar(c)
                }
            }

            impl std::ops::Add<$ty> for $container<$ty> {
                type Output = $container<$ty>;
                #[inline]
                fn add(self, c: $ty) -> Self::Output {
                    self.add_scalar(c)
                }
            }

            impl std::ops::Sub<$ty> for &$container<$ty> {
                type Output = $container<$ty>;
                #[inline]
                fn sub(self, c: $ty) -> Self::Output {
                    self.sub_scalar(c)
                }
            }

            impl std::ops::Sub<$ty> for $container<$ty> {
                type Output = $container<$ty>;
                #[inline]
                fn sub(self, c: $ty) -> Self::Output {
                    self.sub_scalar(c)
                }
            }

            impl std::ops::Mul<$ty> for &$container<$ty> {
                type Output = $container<$ty>;
                #[inline]
                fn mul(self, c: $ty) -> Self::Output {
                    self.mul_scalar(c)
                }
            }

            impl std::ops::Mul<$ty> for $container<$ty> {
                type Output = $container<$ty>;
                #[inline]
                fn mul(self, c: $ty) -> Self::Output {
                    self.mul_scalar(c)
                }
            }
        )+
    };
}

pub(crate) use impl_scalar_ops;
