//! Lead types. Leads are carried along with their event and never edited here.

use serde::{Deserialize, Serialize};

/// Organization a lead belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadOrganization {
    /// Organization identifier.
    pub id: String,
}

/// Person behind a lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadPerson {
    /// Person identifier.
    pub id: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Contact status.
    #[serde(default)]
    pub status: String,
}

/// User assigned to handle a lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlerUser {
    /// User identifier.
    pub id: String,
}

/// Link between a lead and one of its handlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlerLink {
    /// Link identifier.
    pub id: String,
    /// Handling user.
    pub user: HandlerUser,
}

/// A sales lead attached to an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Lead identifier.
    pub id: String,
    /// Pipeline status.
    #[serde(default)]
    pub status: String,
    /// Owning organization.
    pub organization: LeadOrganization,
    /// Contact person.
    pub person: LeadPerson,
    /// Assigned handlers.
    #[serde(default)]
    pub handler_links: Vec<HandlerLink>,
}
