use ruta::testing::{CountingGate, RecordingFallback, RecordingHandler, StaticGate};
use ruta::{
    BoxError, DispatchOutcome, DynGate, GateOutcome, LocationSource, MemoryLocation,
    NavigateOptions, NavigationContext, Router, RouterConfig,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

fn router() -> Router<MemoryLocation> {
    Router::new(RouterConfig::default(), MemoryLocation::new())
}

#[tokio::test]
async fn gates_run_sequentially_in_registration_order() {
    let router = router();
    let handler = RecordingHandler::new();
    router.add_route("/a", handler.clone()).unwrap();

    let order = Arc::new(Mutex::new(Vec::new()));
    let first = order.clone();
    let second = order.clone();
    router
        .use_gate(move |_ctx: &NavigationContext| {
            first.lock().unwrap().push(1);
            async { Ok::<_, BoxError>(GateOutcome::Pass) }
        })
        .use_gate(move |_ctx: &NavigationContext| {
            second.lock().unwrap().push(2);
            async { Ok::<_, BoxError>(GateOutcome::from(true)) }
        });

    let outcome = router.navigate("/a", NavigateOptions::default()).await;

    assert_eq!(outcome, DispatchOutcome::Handled);
    assert_eq!(*order.lock().unwrap(), vec![1, 2]);
    assert_eq!(handler.count(), 1);
}

#[tokio::test]
async fn blocking_gate_suppresses_handler_later_gates_and_fallback() {
    let router = router();
    let handler = RecordingHandler::new();
    let fallback = RecordingFallback::new();
    let before = CountingGate::new();
    let after = CountingGate::new();
    router.add_route("/private", handler.clone()).unwrap();
    router
        .set_default_route(fallback.clone())
        .use_gate(before.clone())
        .use_gate(StaticGate::block())
        .use_gate(after.clone());

    let outcome = router.navigate("/private", NavigateOptions::default()).await;

    assert_eq!(outcome, DispatchOutcome::Blocked);
    assert_eq!(before.count(), 1);
    assert_eq!(after.count(), 0);
    assert_eq!(handler.count(), 0);
    assert_eq!(fallback.count(), 0);
}

#[tokio::test]
async fn logging_gate_observes_without_interfering() {
    let router = router();
    let handler = RecordingHandler::new();
    router.add_route("/a", handler.clone()).unwrap();
    router.use_gate(ruta::gates::LoggingGate);

    let outcome = router.navigate("/a", NavigateOptions::default()).await;

    assert_eq!(outcome, DispatchOutcome::Handled);
    assert_eq!(handler.count(), 1);
}

#[tokio::test]
async fn an_already_erased_gate_checks_through_the_inner_gate() {
    let router = router();
    let handler = RecordingHandler::new();
    let counting = CountingGate::new();
    router.add_route("/a", handler.clone()).unwrap();
    let erased: Box<dyn DynGate> = Box::new(counting.clone());
    router.use_gate(erased);

    let outcome = router.navigate("/a", NavigateOptions::default()).await;

    assert_eq!(outcome, DispatchOutcome::Handled);
    assert_eq!(counting.count(), 1);
    assert_eq!(handler.count(), 1);
}

#[tokio::test]
async fn blocking_gate_keeps_blocking_subsequent_navigations() {
    let router = router();
    let handler = RecordingHandler::new();
    router.add_route("/private", handler.clone()).unwrap();
    router.use_gate(StaticGate::block());

    for _ in 0..3 {
        let outcome = router.navigate("/private", NavigateOptions::default()).await;
        assert_eq!(outcome, DispatchOutcome::Blocked);
    }
    assert_eq!(handler.count(), 0);
}

#[tokio::test]
async fn failing_gate_is_treated_like_a_failing_handler() {
    let router = router();
    let handler = RecordingHandler::new();
    let fallback = RecordingFallback::new();
    router.add_route("/a", handler.clone()).unwrap();
    router.set_default_route(fallback.clone());
    router.use_gate(|_ctx: &NavigationContext| async {
        Err::<GateOutcome, BoxError>("session expired".into())
    });

    let outcome = router.navigate("/a", NavigateOptions::default()).await;

    assert_eq!(outcome, DispatchOutcome::Errored);
    assert_eq!(handler.count(), 0);
    assert_eq!(fallback.error_messages(), ["session expired"]);
}

#[tokio::test]
async fn overlapping_navigation_supersedes_the_older_dispatch() {
    let router = router();
    let blocked = RecordingHandler::new();
    let target = RecordingHandler::new();
    router
        .add_route("/slow", blocked.clone())
        .unwrap()
        .add_route("/fast", target.clone())
        .unwrap();

    // A gate that starts a second navigation while the first dispatch is
    // still in its middleware phase.
    let fired = Arc::new(AtomicBool::new(false));
    let inner = router.clone();
    router.use_gate(move |_ctx: &NavigationContext| {
        let router = inner.clone();
        let first = !fired.swap(true, Ordering::SeqCst);
        async move {
            if first {
                router.navigate("/fast", NavigateOptions::default()).await;
            }
            Ok::<_, BoxError>(GateOutcome::Pass)
        }
    });

    let outcome = router.navigate("/slow", NavigateOptions::default()).await;

    assert_eq!(outcome, DispatchOutcome::Superseded);
    assert_eq!(blocked.count(), 0);
    assert_eq!(target.count(), 1);
    assert_eq!(router.source().current().path, "/fast");
}
