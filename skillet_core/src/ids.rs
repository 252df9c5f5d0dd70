use std::str::FromStr;


/// Implemented by all integer ID newtypes in this module
/// (see [`create_integer_id_newtype`]).
pub trait SkilletIdNewtype: FromStr {}


macro_rules! create_integer_id_newtype {
    ($struct_name:ident) => {
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $struct_name(pub(crate) i64);

        impl $struct_name {
            #[inline]
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            #[inline]
            pub fn into_i64(self) -> i64 {
                self.0
            }
        }

        impl std::str::FromStr for $struct_name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let inner_id = <i64 as std::str::FromStr>::from_str(s)?;

                Ok(Self(inner_id))
            }
        }

        impl $crate::ids::SkilletIdNewtype for $struct_name {}

        impl std::fmt::Display for $struct_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}



create_integer_id_newtype!(CategoryId);

create_integer_id_newtype!(RecipeId);

create_integer_id_newtype!(UserId);
