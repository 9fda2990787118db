use profilecard_core::{Route, RouteError};

#[test]
fn paths_match_the_registered_routes() {
    assert_eq!(Route::UsersList.path(), "users_list");
    assert_eq!(Route::UserDetails(42).path(), "user_details/42");
    assert_eq!(Route::UserDetails(42).pattern(), "user_details/{userId}");
}

#[test]
fn parses_known_paths() {
    assert_eq!("users_list".parse::<Route>(), Ok(Route::UsersList));
    assert_eq!("/users_list/".parse::<Route>(), Ok(Route::UsersList));
    assert_eq!("user_details/2".parse::<Route>(), Ok(Route::UserDetails(2)));
    assert_eq!(
        "user_details/-5".parse::<Route>(),
        Ok(Route::UserDetails(-5))
    );
}

#[test]
fn rejects_malformed_paths() {
    assert!(matches!(
        "settings".parse::<Route>(),
        Err(RouteError::UnknownRoute(_))
    ));
    assert!(matches!(
        "user_details".parse::<Route>(),
        Err(RouteError::MissingArgument { argument: "userId", .. })
    ));
    assert!(matches!(
        "user_details/".parse::<Route>(),
        Err(RouteError::MissingArgument { .. })
    ));
    assert_eq!(
        "user_details/bob".parse::<Route>(),
        Err(RouteError::InvalidArgument {
            argument: "userId",
            value: "bob".into(),
        })
    );
    assert!(matches!(
        "user_details/99999999999".parse::<Route>(),
        Err(RouteError::InvalidArgument { .. })
    ));
}

#[test]
fn non_canonical_ids_are_rejected() {
    for raw in ["+5", "007", "-0", "5/extra"] {
        assert_eq!(
            format!("user_details/{raw}").parse::<Route>(),
            Err(RouteError::InvalidArgument {
                argument: "userId",
                value: raw.into(),
            }),
            "{raw} should be rejected"
        );
    }
}

#[test]
fn parsed_paths_round_trip_through_display() {
    for link in ["users_list", "user_details/0", "user_details/42", "user_details/-7"] {
        let route: Route = link.parse().unwrap();
        assert_eq!(route.path(), link);
    }
}

#[test]
fn only_the_list_is_a_root_route() {
    assert!(Route::UsersList.is_root());
    assert!(!Route::UserDetails(1).is_root());
}
