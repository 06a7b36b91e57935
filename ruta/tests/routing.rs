use ruta::testing::RecordingHandler;
use ruta::{
    DispatchOutcome, DynHandler, MemoryLocation, NavigateOptions, RouteOverrides, Router,
    RouterConfig, RouterError,
};

fn router() -> Router<MemoryLocation> {
    Router::new(RouterConfig::default(), MemoryLocation::new())
}

#[tokio::test]
async fn literal_route_dispatches_to_its_handler() {
    let router = router();
    let about = RecordingHandler::new();
    router.add_route("/about", about.clone()).unwrap();

    let outcome = router.navigate("/about", NavigateOptions::default()).await;

    assert_eq!(outcome, DispatchOutcome::Handled);
    assert_eq!(about.paths(), ["/about"]);
}

#[tokio::test]
async fn params_are_extracted_per_route() {
    let router = router();
    let users = RecordingHandler::new();
    router.add_route("/users/:id", users.clone()).unwrap();

    let outcome = router.navigate("/users/42", NavigateOptions::default()).await;
    assert_eq!(outcome, DispatchOutcome::Handled);
    let ctx = &users.contexts()[0];
    assert_eq!(ctx.param("id"), Some("42"));
    assert_eq!(ctx.path, "/users/42");

    // The parent path is not covered by the parameterized template.
    let outcome = router.navigate("/users", NavigateOptions::default()).await;
    assert_eq!(outcome, DispatchOutcome::Defaulted);
    assert_eq!(users.count(), 1);
}

#[tokio::test]
async fn wildcard_captures_all_trailing_segments() {
    let router = router();
    let files = RecordingHandler::new();
    router.add_route("/files/*", files.clone()).unwrap();

    router.navigate("/files/a/b/c", NavigateOptions::default()).await;

    assert_eq!(files.contexts()[0].param("*"), Some("a/b/c"));
}

#[tokio::test]
async fn an_already_erased_handler_dispatches_to_the_inner_handler() {
    let router = router();
    let handler = RecordingHandler::new();
    let erased: Box<dyn DynHandler> = Box::new(handler.clone());
    router.add_route("/erased", erased).unwrap();

    let outcome = router.navigate("/erased", NavigateOptions::default()).await;

    assert_eq!(outcome, DispatchOutcome::Handled);
    assert_eq!(handler.paths(), ["/erased"]);
}

#[tokio::test]
async fn first_registration_wins_for_equal_templates() {
    let router = router();
    let first = RecordingHandler::new();
    let second = RecordingHandler::new();
    router
        .add_route("/a", first.clone())
        .unwrap()
        .add_route("/a", second.clone())
        .unwrap();

    router.navigate("/a", NavigateOptions::default()).await;
    router.navigate("/a", NavigateOptions::default()).await;

    assert_eq!(first.count(), 2);
    assert_eq!(second.count(), 0);
}

#[tokio::test]
async fn append_slash_makes_both_spellings_identical() {
    let config = RouterConfig {
        append_slash: true,
        ..RouterConfig::default()
    };
    let router = Router::new(config, MemoryLocation::new());
    let about = RecordingHandler::new();
    router.add_route("/about", about.clone()).unwrap();

    router.navigate("/about", NavigateOptions::default()).await;
    router.navigate("/about/", NavigateOptions::default()).await;

    assert_eq!(about.paths(), ["/about/", "/about/"]);
}

#[tokio::test]
async fn matching_is_case_insensitive_by_default() {
    let router = router();
    let about = RecordingHandler::new();
    router.add_route("/about", about.clone()).unwrap();

    let outcome = router.navigate("/About", NavigateOptions::default()).await;

    assert_eq!(outcome, DispatchOutcome::Handled);
    assert_eq!(about.paths(), ["/about"]);
}

#[tokio::test]
async fn malformed_templates_fail_registration_and_leave_the_table_alone() {
    let router = router();
    let handler = RecordingHandler::new();

    assert!(matches!(
        router.add_route("", handler.clone()),
        Err(RouterError::Template(_))
    ));
    assert!(matches!(
        router.add_route("/x/:", handler.clone()),
        Err(RouterError::Template(_))
    ));

    let outcome = router.navigate("/x/anything", NavigateOptions::default()).await;
    assert_eq!(outcome, DispatchOutcome::Defaulted);
    assert_eq!(handler.count(), 0);
}

#[tokio::test]
async fn route_overrides_are_frozen_at_registration() {
    let router = router();
    let special = RecordingHandler::new();
    let plain = RecordingHandler::new();
    router
        .add_route_with(
            "/special",
            special.clone(),
            RouteOverrides::none().base_url("/elsewhere"),
        )
        .unwrap()
        .add_route("/plain", plain.clone())
        .unwrap();

    router.navigate("/special", NavigateOptions::default()).await;
    router.navigate("/plain", NavigateOptions::default()).await;

    assert_eq!(special.contexts()[0].options.base_url, "/elsewhere");
    assert_eq!(plain.contexts()[0].options.base_url, "");
}
