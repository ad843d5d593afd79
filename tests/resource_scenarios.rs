//! End-to-end scenarios for modelling remote data with `Resource`
//!
//! These read the way application code would: a page made of several
//! independently fetched pieces, each moving through the four states.

use std::cell::Cell;

use tidewater::prelude::*;
use tidewater::{assert_failure, assert_initial, assert_loading, assert_success, is};

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u32,
    name: String,
}

#[derive(Debug, Clone, PartialEq)]
enum FetchError {
    NotFound(u32),
    Timeout,
}

fn fetch_user(id: u32) -> Result<User, FetchError> {
    match id {
        1 => Ok(User {
            id: 1,
            name: "ada".to_string(),
        }),
        2 => Err(FetchError::Timeout),
        other => Err(FetchError::NotFound(other)),
    }
}

fn render(page: Resource<(User, u32), FetchError>) -> String {
    page.fold(
        || "press to load".to_string(),
        || "loading...".to_string(),
        |(user, unread)| format!("{} has {} unread", user.name, unread),
        |err| format!("error: {:?}", err),
    )
}

#[test]
fn page_moves_through_every_state() {
    let mut user: Resource<User, FetchError> = Resource::initial();
    let mut unread: Resource<u32, FetchError> = Resource::initial();

    assert_eq!(render(Resource::combine((user.clone(), unread.clone()))), "press to load");

    user = Resource::loading();
    unread = Resource::loading();
    assert_eq!(render(Resource::combine((user.clone(), unread.clone()))), "loading...");

    user = Resource::try_catch(|| fetch_user(1));
    assert_eq!(render(Resource::combine((user.clone(), unread))), "loading...");

    unread = Resource::success(3);
    assert_eq!(render(Resource::combine((user, unread))), "ada has 3 unread");
}

#[test]
fn failure_in_any_piece_fails_the_page() {
    let user = Resource::try_catch(|| fetch_user(2));
    let unread: Resource<u32, FetchError> = Resource::loading();

    assert_eq!(
        render(Resource::combine((user, unread))),
        "error: Timeout"
    );
}

#[test]
fn try_catch_passes_error_through_unchanged() {
    assert_failure!(
        Resource::try_catch(|| fetch_user(7)),
        FetchError::NotFound(7)
    );
}

#[test]
fn dependent_fetch_with_and_then() {
    let posts_for = |user: User| -> Resource<Vec<String>, FetchError> {
        if user.id == 1 {
            Resource::success(vec!["hello".to_string()])
        } else {
            Resource::loading()
        }
    };

    let posts = Resource::try_catch(|| fetch_user(1)).and_then(posts_for);
    assert_success!(posts, vec!["hello".to_string()]);

    let posts = Resource::try_catch(|| fetch_user(9)).and_then(posts_for);
    assert_failure!(posts, FetchError::NotFound(9));
}

#[test]
fn alt_falls_back_to_cached_value() {
    let cached = || Resource::success(User {
        id: 1,
        name: "cached".to_string(),
    });

    let user = Resource::try_catch(|| fetch_user(2)).alt(cached);
    assert_eq!(user.map(|u| u.name), Resource::success("cached".to_string()));
}

#[test]
fn tap_err_logs_without_changing_resource() {
    let errors = Cell::new(0);
    let user = Resource::try_catch(|| fetch_user(2)).tap_err(|_| errors.set(errors.get() + 1));

    assert_failure!(user, FetchError::Timeout);
    assert_eq!(errors.get(), 1);
}

#[test]
fn from_option_treats_missing_as_not_requested() {
    let cache: Option<User> = None;
    assert_initial!(Resource::<User, FetchError>::from_option(cache));

    let cache = Some(User {
        id: 1,
        name: "ada".to_string(),
    });
    assert_success!(Resource::<User, FetchError>::from_option(cache));
}

#[test]
fn extract_reports_actual_state() {
    let err = Resource::<User, FetchError>::loading().extract().unwrap_err();
    assert_eq!(err.tag(), Tag::Loading);
    assert!(err.to_string().contains("\"loading\""));
}

#[test]
fn cata_renders_only_interesting_states() {
    let spinner = |r: Resource<User, FetchError>| r.cata(Cata::new().loading(|| "spinner"));

    assert_eq!(spinner(Resource::loading()), Some("spinner"));
    assert_eq!(spinner(Resource::initial()), None);
    assert_eq!(spinner(Resource::failure(FetchError::Timeout)), None);
}

#[test]
fn predicates_by_tag() {
    let preds = is::<u32, FetchError>();
    let states: Vec<Resource<u32, FetchError>> = vec![
        Resource::initial(),
        Resource::loading(),
        Resource::success(1),
        Resource::failure(FetchError::Timeout),
    ];

    for tag in Tag::ALL {
        let matching: Vec<Tag> = states
            .iter()
            .filter(|r| preds.get(tag)(*r))
            .map(|r| r.tag())
            .collect();
        assert_eq!(matching, vec![tag]);
    }
}

#[test]
fn traverse_loads_many_users() {
    let users = traverse(vec![1, 1], |id| Resource::try_catch(|| fetch_user(id)));
    assert_success!(users.map(|us| us.len()), 2);

    let users = traverse(vec![1, 2, 3], |id| Resource::try_catch(|| fetch_user(id)));
    assert_failure!(users, FetchError::Timeout);

    assert_loading!(sequence(vec![
        Resource::<u32, FetchError>::success(1),
        Resource::loading(),
    ]));
}

#[tokio::test]
async fn from_future_resolves_to_resource() {
    async fn fetch_remote(id: u32) -> Result<User, FetchError> {
        tokio::task::yield_now().await;
        fetch_user(id)
    }

    let ok = Resource::from_future(fetch_remote(1)).await;
    assert_success!(ok.map(|u| u.name), "ada".to_string());

    let err = Resource::from_future(fetch_remote(2)).await;
    assert_failure!(err, FetchError::Timeout);
}

#[tokio::test]
async fn from_future_catch_unwind_never_panics() {
    let r = Resource::from_future_catch_unwind(async {
        tokio::task::yield_now().await;
        let values: Vec<u32> = Vec::new();
        values[3]
    })
    .await;

    let panicked = r.into_failure().expect("panic should be captured");
    assert!(panicked.message().contains("index out of bounds"));
}
