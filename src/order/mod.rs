//! Ordering strategies: the natural ordering a type declares for itself ([`Orderable`]) and
//! external comparators ([`Comparator`]).

use std::cmp::Ordering;

pub mod check;
pub mod comparator;
pub mod three_way;

/// Three-way comparison function a type uses as its natural ordering.
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

/// Capability of a type to be sorted by its natural ordering.
///
/// A type participates in natural-order sorting by implementing this trait. The answer is fixed
/// per type: either it has exactly one natural ordering, or it has none and natural-order sorts of
/// it fail with [`SortError::NotOrderable`](crate::SortError::NotOrderable) when invoked.
///
/// The returned function must be a strict weak ordering: `compare(a, a) == Equal`,
/// `compare(a, b) == compare(b, a).reverse()` and `Less` is transitive.
///
/// Implement it with [`orderable!`](crate::orderable) for types that implement [`Ord`], or with
/// [`not_orderable!`](crate::not_orderable) for types that should only be sorted by comparators.
pub trait Orderable: Sized {
    fn natural_order() -> Option<NaturalOrder<Self>>;
}

/// Comparison of two values of `T`, independent of any particular instance.
///
/// Comparators are stateless and cheap to build, any number of them may exist for the same `T`.
/// Every `Fn(&T, &T) -> Ordering` is a comparator.
///
/// The same laws as for [`Orderable`] apply. Violating them never causes memory unsafety or a
/// non-terminating sort, but the resulting order is unspecified.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns a comparator with the sign of every result inverted.
    fn reversed(self) -> comparator::Reversed<Self>
    where
        Self: Sized,
    {
        comparator::Reversed::new(self)
    }

    /// Returns a comparator that breaks ties of `self` with `next`.
    fn then<C>(self, next: C) -> comparator::Then<Self, C>
    where
        Self: Sized,
        C: Comparator<T>,
    {
        comparator::Then::new(self, next)
    }

    /// Returns a comparator that breaks ties of `self` by comparing the extracted keys.
    fn then_by_key<K, F>(self, key: F) -> comparator::Then<Self, comparator::ByKey<F, K>>
    where
        Self: Sized,
        K: Ord,
        F: Fn(&T) -> K,
    {
        comparator::Then::new(self, comparator::by_key(key))
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Implements [`Orderable`] for types whose natural ordering is their [`Ord`] implementation.
///
/// ```
/// #[derive(PartialEq, Eq, PartialOrd, Ord)]
/// struct Version(u32, u32);
///
/// ordsort::orderable!(Version);
/// ```
#[macro_export]
macro_rules! orderable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Orderable for $ty {
                #[inline]
                fn natural_order() -> ::core::option::Option<$crate::NaturalOrder<Self>> {
                    ::core::option::Option::Some(
                        <$ty as ::core::cmp::Ord>::cmp as $crate::NaturalOrder<Self>,
                    )
                }
            }
        )+
    };
}

/// Implements [`Orderable`] for types without a natural ordering. Natural-order sorts of these
/// types fail with [`SortError::NotOrderable`](crate::SortError::NotOrderable).
#[macro_export]
macro_rules! not_orderable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Orderable for $ty {
                #[inline]
                fn natural_order() -> ::core::option::Option<$crate::NaturalOrder<Self>> {
                    ::core::option::Option::None
                }
            }
        )+
    };
}

/// Generates one named comparator per listed field, `Type::by_<field>()`.
///
/// The fields must implement [`Ord`]. Each comparator is an independent stateless value.
///
/// ```
/// struct Employee {
///     name: String,
///     age: u32,
///     salary: u64,
/// }
///
/// ordsort::field_comparators!(Employee { name, age, salary });
///
/// let by_age_then_salary = Employee::by_age().then(Employee::by_salary());
/// ```
#[macro_export]
macro_rules! field_comparators {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        $crate::__paste! {
            impl $ty {
                $(
                    #[allow(dead_code)]
                    pub fn [<by_ $field>]() -> impl $crate::Comparator<$ty> + Copy {
                        |a: &$ty, b: &$ty| ::core::cmp::Ord::cmp(&a.$field, &b.$field)
                    }
                )+
            }
        }
    };
}

orderable!(i8, i16, i32, i64, i128, isize);
orderable!(u8, u16, u32, u64, u128, usize);
orderable!(bool, char, (), String);

// Containers and references order like their `Ord` impl. Downstream crates cannot add these.
macro_rules! orderable_generic {
    ($([$($params:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($params)*> Orderable for $ty {
                #[inline]
                fn natural_order() -> Option<NaturalOrder<Self>> {
                    Some(<Self as Ord>::cmp as NaturalOrder<Self>)
                }
            }
        )+
    };
}

orderable_generic!(
    ['a, T: Ord + ?Sized] &'a T,
    [T: Ord + ?Sized] Box<T>,
    [T: Ord] Option<T>,
    [T: Ord] Vec<T>,
    [T: Ord, const N: usize] [T; N],
    [T: Ord] std::cmp::Reverse<T>,
);

macro_rules! orderable_tuple {
    ($($name:ident)+) => {
        orderable_generic!([$($name: Ord),+] ($($name,)+));
    };
}

orderable_tuple!(A);
orderable_tuple!(A B);
orderable_tuple!(A B C);
orderable_tuple!(A B C D);
orderable_tuple!(A B C D E);
orderable_tuple!(A B C D E F);
orderable_tuple!(A B C D E F G);
orderable_tuple!(A B C D E F G H);
orderable_tuple!(A B C D E F G H I);
orderable_tuple!(A B C D E F G H I J);
orderable_tuple!(A B C D E F G H I J K);
orderable_tuple!(A B C D E F G H I J K L);

// Floats use the IEEE 754 totalOrder predicate, which unlike `<` is a total order: -0.0 sorts
// before +0.0 and NaNs sort to the ends depending on their sign bit.
impl Orderable for f32 {
    #[inline]
    fn natural_order() -> Option<NaturalOrder<Self>> {
        Some(f32::total_cmp as NaturalOrder<Self>)
    }
}

impl Orderable for f64 {
    #[inline]
    fn natural_order() -> Option<NaturalOrder<Self>> {
        Some(f64::total_cmp as NaturalOrder<Self>)
    }
}
