/// Defines a fieldless enum with integer conversions and display names
///
/// Takes an enum that must have a `#[repr()]` as first meta field. Every
/// variant gets a literal discriminant and a literal name. The enum has to
/// derive `Copy` since `name()` takes `self` by value.
///
/// Generated items:
///
/// - `TryFrom<repr>`, failing with `Unknown<Enum>ValueError` for values
///   without a variant
/// - `From<Enum> for repr`
/// - `Enum::VARIANTS` in declaration order
/// - `Enum::name()` and a `Display` impl printing the name
///
/// ```
/// # use imghdr_common::utils::named_enum;
/// named_enum!(
///     #[repr(u8)]
///     #[derive(Debug, Clone, Copy, PartialEq)]
///     pub enum Test {
///         Val1 = 1 => "first",
///         Val2 = 2 => "second",
///     }
/// );
/// let int: u8 = Test::Val2.into();
/// assert_eq!(int, 2);
/// assert_eq!(Test::try_from(2), Ok(Test::Val2));
/// assert_eq!(Test::try_from(3), Err(UnknownTestValueError(3)));
/// assert_eq!(Test::Val1.name(), "first");
/// assert_eq!(Test::Val2.to_string(), "second");
/// assert_eq!(Test::VARIANTS, &[Test::Val1, Test::Val2]);
/// ```
#[macro_export]
macro_rules! named_enum {
    (#[repr($type:ty)]$(#[$meta:meta])* $visibility:vis enum $enum_name:ident {
        $($(#[$variant_meta:meta])* $variant_name:ident = $variant_value:literal => $variant_label:literal,)*
    }) => {
        #[repr($type)]
        $(#[$meta])*
        $visibility enum $enum_name {
            $($(#[$variant_meta])* $variant_name = $variant_value,)*
        }

        impl $enum_name {
            /// All variants in declaration order
            pub const VARIANTS: &'static [Self] = &[$(Self::$variant_name,)*];

            /// Fixed display name
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant_name => $variant_label,)*
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        $crate::paste::paste! {
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct [<Unknown $enum_name ValueError>](pub $type);

            impl std::fmt::Display for [<Unknown $enum_name ValueError>] {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, concat!("Enum '", stringify!($enum_name), "' has no variant with value '{}'"), self.0)
                }
            }

            impl std::error::Error for [<Unknown $enum_name ValueError>] {}

            impl std::convert::TryFrom<$type> for $enum_name {
                type Error = [<Unknown $enum_name ValueError>];
                fn try_from(v: $type) -> Result<Self, Self::Error> {
                    match v {
                        $($variant_value => Ok(Self::$variant_name),)*
                        other => Err([<Unknown $enum_name ValueError>](other)),
                    }
                }
            }
        }

        impl std::convert::From<$enum_name> for $type {
            fn from(v: $enum_name) -> $type {
                match v {
                    $($enum_name::$variant_name => $variant_value,)*
                }
            }
        }
    }
}

pub use named_enum;
