use std::num::ParseIntError;
use std::str::FromStr;

use skillet_core::ids::SkilletIdNewtype;

use crate::api::errors::EndpointError;

pub mod health;
pub mod home;
pub(crate) mod model_impls;
pub mod recipes;



/// Given a string or a string slice (or something that implements `AsRef<str>`),
/// this function attempts to parse the string as an integer ID, returning it
/// as the specified Skillet ID newtype, e.g. [`RecipeId`], [`CategoryId`], ...
///
/// # Example
/// ```no_run
/// use skillet_core::ids::RecipeId;
/// use skillet::api::endpoints::parse_id;
/// use skillet::api::errors::EndpointResult;
///
/// #[actix_web::get("/{recipe_id}")]
/// async fn hello_world(
///     parameters: actix_web::web::Path<(String, )>
///     // ...
/// ) -> EndpointResult {
///     // ...
///
///     // `let recipe_id: RecipeId = parse_id(...)?;` works as well,
///     // the turbofish syntax is perhaps slightly clearer.
///     let recipe_id = parse_id::<RecipeId>(parameters.into_inner().0)?;
///
///     // ...
///     # todo!();
/// }
/// ```
///
///
/// [`RecipeId`]: skillet_core::ids::RecipeId
/// [`CategoryId`]: skillet_core::ids::CategoryId
#[inline]
pub fn parse_id<I>(string: impl AsRef<str>) -> Result<I, EndpointError>
where
    I: SkilletIdNewtype + FromStr<Err = ParseIntError>,
{
    I::from_str(string.as_ref()).map_err(EndpointError::invalid_id_format)
}
