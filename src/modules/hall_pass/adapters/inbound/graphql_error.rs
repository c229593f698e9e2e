use async_graphql::ErrorExtensions;

use crate::modules::hall_pass::application::errors::ApplicationError;

/// GraphQL error carrying the failure kind under `extensions.kind`.
pub fn gql_error(error: ApplicationError) -> async_graphql::Error {
    let kind = error.kind();
    async_graphql::Error::new(error.to_string())
        .extend_with(|_, ext| ext.set("kind", kind.as_str().to_string()))
}
