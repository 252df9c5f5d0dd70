/// Conversion from an entity model in [`skillet_database`]
/// into the corresponding API model in [`skillet_core`].
pub trait IntoApiModel {
    type ApiModel;

    fn into_api_model(self) -> Self::ApiModel;
}
