use serde::{Deserialize, Serialize};

/// Customer the portal is rendered for, as embedded in orders and proposals.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Client name as shown in the client info panel.
pub fn display_name<'a>(client: Option<&'a Client>, fallback: Option<&'a str>) -> &'a str {
    client
        .map(|c| c.name.as_str())
        .or(fallback)
        .unwrap_or("Unknown Client")
}

/// First word of a full name, used for greetings.
pub fn first_name(name: &str) -> &str {
    name.split(' ').next().unwrap_or(name)
}
