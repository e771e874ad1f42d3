//! Static request data: the seeded user names and the endpoint templates.
mod endpoints;
mod template;
mod users;


pub use endpoints::EndpointTable;
pub use template::{EndpointTemplate, INDEX_MARKER, TemplateParams, USER_MARKER};
pub use users::USERS;

/// Users and endpoints a run draws its requests from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub users: Vec<String>,
    pub endpoints: EndpointTable,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            users: USERS.iter().map(|user| (*user).to_owned()).collect(),
            endpoints: EndpointTable::default(),
        }
    }
}
