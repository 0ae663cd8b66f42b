//! Backend route table

use serde::Serialize;
use url::Url;

use crate::config::{ConfigError, EnvironmentConfig};

/// HTTP methods the backend exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// RBAC permissions carried in access tokens for the `Coffee` audience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Permission {
    #[serde(rename = "get:drinks-detail")]
    GetDrinksDetail,
    #[serde(rename = "post:drinks")]
    PostDrinks,
    #[serde(rename = "patch:drinks")]
    PatchDrinks,
    #[serde(rename = "delete:drinks")]
    DeleteDrinks,
}

impl Permission {
    /// Permission string as it appears in the token's `permissions` claim
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::GetDrinksDetail => "get:drinks-detail",
            Permission::PostDrinks => "post:drinks",
            Permission::PatchDrinks => "patch:drinks",
            Permission::DeleteDrinks => "delete:drinks",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One backend operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /drinks`, public, short drink representation
    ListDrinks,
    /// `GET /drinks-detail`, long drink representation
    ListDrinkDetails,
    /// `POST /drinks`
    CreateDrink,
    /// `PATCH /drinks/{id}`
    UpdateDrink(u64),
    /// `DELETE /drinks/{id}`
    DeleteDrink(u64),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ListDrinks | Endpoint::ListDrinkDetails => Method::Get,
            Endpoint::CreateDrink => Method::Post,
            Endpoint::UpdateDrink(_) => Method::Patch,
            Endpoint::DeleteDrink(_) => Method::Delete,
        }
    }

    /// Path relative to `apiServerUrl`
    pub fn path(&self) -> String {
        match self {
            Endpoint::ListDrinks | Endpoint::CreateDrink => "/drinks".to_string(),
            Endpoint::ListDrinkDetails => "/drinks-detail".to_string(),
            Endpoint::UpdateDrink(id) | Endpoint::DeleteDrink(id) => format!("/drinks/{}", id),
        }
    }

    /// Permission the access token must carry; `None` for public routes
    pub fn permission(&self) -> Option<Permission> {
        match self {
            Endpoint::ListDrinks => None,
            Endpoint::ListDrinkDetails => Some(Permission::GetDrinksDetail),
            Endpoint::CreateDrink => Some(Permission::PostDrinks),
            Endpoint::UpdateDrink(_) => Some(Permission::PatchDrinks),
            Endpoint::DeleteDrink(_) => Some(Permission::DeleteDrinks),
        }
    }

    /// Full request URL under `config`'s `apiServerUrl`
    pub fn url(&self, config: &EnvironmentConfig) -> Result<Url, ConfigError> {
        config.api_url(&self.path())
    }

    /// Whether a token holding `granted` may call this endpoint
    pub fn is_permitted<S: AsRef<str>>(&self, granted: &[S]) -> bool {
        match self.permission() {
            None => true,
            Some(required) => granted.iter().any(|p| p.as_ref() == required.as_str()),
        }
    }

    /// Every route shape, with `id` filling the drink id
    pub fn table(id: u64) -> [Endpoint; 5] {
        [
            Endpoint::ListDrinks,
            Endpoint::ListDrinkDetails,
            Endpoint::CreateDrink,
            Endpoint::UpdateDrink(id),
            Endpoint::DeleteDrink(id),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEVELOPMENT;

    #[test]
    fn test_route_table() {
        let rows: Vec<_> = Endpoint::table(7)
            .iter()
            .map(|e| (e.method().as_str(), e.path(), e.permission().map(|p| p.as_str())))
            .collect();

        assert_eq!(
            rows,
            vec![
                ("GET", "/drinks".to_string(), None),
                ("GET", "/drinks-detail".to_string(), Some("get:drinks-detail")),
                ("POST", "/drinks".to_string(), Some("post:drinks")),
                ("PATCH", "/drinks/7".to_string(), Some("patch:drinks")),
                ("DELETE", "/drinks/7".to_string(), Some("delete:drinks")),
            ]
        );
    }

    #[test]
    fn test_endpoint_url_under_api_server() {
        assert_eq!(
            Endpoint::ListDrinkDetails.url(&DEVELOPMENT).unwrap().as_str(),
            "http://127.0.0.1:5000/drinks-detail"
        );
        assert_eq!(
            Endpoint::DeleteDrink(3).url(&DEVELOPMENT).unwrap().as_str(),
            "http://127.0.0.1:5000/drinks/3"
        );
    }

    #[test]
    fn test_endpoint_url_keeps_base_path() {
        let config = EnvironmentConfig {
            api_server_url: "https://coffee.example.com/api".into(),
            ..DEVELOPMENT.clone()
        };
        assert_eq!(
            Endpoint::UpdateDrink(12).url(&config).unwrap().as_str(),
            "https://coffee.example.com/api/drinks/12"
        );
    }

    #[test]
    fn test_permissions() {
        let barista = ["get:drinks-detail"];
        let manager = ["get:drinks-detail", "post:drinks", "patch:drinks", "delete:drinks"];
        let none: [&str; 0] = [];

        assert!(Endpoint::ListDrinks.is_permitted(&none));
        assert!(!Endpoint::ListDrinkDetails.is_permitted(&none));
        assert!(Endpoint::ListDrinkDetails.is_permitted(&barista));
        assert!(!Endpoint::CreateDrink.is_permitted(&barista));
        assert!(Endpoint::table(1).iter().all(|e| e.is_permitted(&manager)));
    }

    #[test]
    fn test_permission_serializes_as_claim() {
        let value = serde_json::to_value(Permission::PatchDrinks).unwrap();
        assert_eq!(value, "patch:drinks");
        assert_eq!(Permission::PatchDrinks.to_string(), "patch:drinks");
    }
}
