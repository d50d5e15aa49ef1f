pub mod mutations;
pub mod queries;
pub mod subscriptions;

use async_graphql::Schema as GraphQLSchema;

use crate::app_state::AppState;

pub use mutations::MutationRoot;
pub use queries::QueryRoot;
pub use subscriptions::SubscriptionRoot;

pub type Schema = GraphQLSchema<QueryRoot, MutationRoot, SubscriptionRoot>;

pub fn create_schema(app_state: AppState) -> Schema {
    GraphQLSchema::build(QueryRoot, MutationRoot, SubscriptionRoot)
        .data(app_state)
        .finish()
}
