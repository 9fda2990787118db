use std::fmt;
use std::str::FromStr;

use crate::profile::ProfileId;

pub const USERS_LIST_PATH: &str = "users_list";
pub const USER_DETAILS_PREFIX: &str = "user_details";
pub const USER_DETAILS_PATTERN: &str = "user_details/{userId}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    UsersList,
    UserDetails(ProfileId),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("unknown route `{0}`")]
    UnknownRoute(String),
    #[error("route `{route}` requires the `{argument}` argument")]
    MissingArgument {
        route: &'static str,
        argument: &'static str,
    },
    #[error("`{value}` is not a valid value for `{argument}`")]
    InvalidArgument {
        argument: &'static str,
        value: String,
    },
}

impl Route {
    /// Route template as registered with the navigator.
    pub fn pattern(&self) -> &'static str {
        match self {
            Route::UsersList => USERS_LIST_PATH,
            Route::UserDetails(_) => USER_DETAILS_PATTERN,
        }
    }

    pub fn path(&self) -> String {
        self.to_string()
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Route::UsersList)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::UsersList => f.write_str(USERS_LIST_PATH),
            Route::UserDetails(id) => write!(f, "{USER_DETAILS_PREFIX}/{id}"),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim().trim_matches('/');
        if path == USERS_LIST_PATH {
            return Ok(Route::UsersList);
        }

        let mut segments = path.splitn(2, '/');
        match (segments.next(), segments.next()) {
            (Some(USER_DETAILS_PREFIX), None) | (Some(USER_DETAILS_PREFIX), Some("")) => {
                Err(RouteError::MissingArgument {
                    route: USER_DETAILS_PATTERN,
                    argument: "userId",
                })
            }
            // Only canonical ids, so `path()` reproduces the link that opened the route.
            (Some(USER_DETAILS_PREFIX), Some(raw)) => raw
                .parse::<ProfileId>()
                .ok()
                .filter(|id| id.to_string() == raw)
                .map(Route::UserDetails)
                .ok_or_else(|| RouteError::InvalidArgument {
                    argument: "userId",
                    value: raw.to_string(),
                }),
            _ => Err(RouteError::UnknownRoute(s.to_string())),
        }
    }
}
