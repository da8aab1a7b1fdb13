use carousel_core::{
    test_utils::{Call, RecordingPresenter},
    Configuration, ElementSource, Error, InitialMarker, RotationController,
};

type Controller<E> = RotationController<E, RecordingPresenter<E>>;

fn init_controller<E>(elements: Vec<E>) -> (Controller<E>, RecordingPresenter<E>)
where
    E: Clone + PartialEq,
{
    let _ = env_logger::try_init();

    let presenter = RecordingPresenter::default();
    let controller =
        RotationController::with_config(elements, presenter.clone(), &Configuration::default())
            .unwrap();
    (controller, presenter)
}

/// Source which cannot reach its presentation layer.
struct DetachedSource;

impl ElementSource for DetachedSource {
    type Element = u8;

    fn query(&mut self) -> carousel_core::Result<Vec<u8>> {
        Err(Error::source_unavailable("presentation layer is detached"))
    }
}

#[test]
fn test_rotation_scenario() {
    let (mut controller, presenter) = init_controller(vec!["A", "B", "C", "D"]);
    assert_eq!(presenter.active(), vec!["A"]);

    let mut shown = Vec::new();
    for _ in 0..5 {
        controller.advance();
        shown.extend(presenter.active());
    }
    assert_eq!(shown, vec!["B", "C", "D", "A", "B"]);
}

#[test]
fn test_exactly_one_active_element() {
    for len in 1..=6 {
        let (mut controller, presenter) = init_controller((0..len).collect());

        for ticks in 0..20 {
            assert_eq!(presenter.active(), vec![ticks % len], "len: {len}");
            assert_eq!(controller.cursor(), ticks % len);
            assert_eq!(controller.active(), Some(&(ticks % len)));

            controller.advance();
        }
    }
}

#[test]
fn test_cycle_period() {
    let (mut controller, _presenter) = init_controller(vec!['x', 'y', 'z']);

    let cursors: Vec<_> = (0..6).map(|_| controller.advance()).collect();
    assert_eq!(
        cursors,
        vec![Some(1), Some(2), Some(0), Some(1), Some(2), Some(0)]
    );
}

#[test]
fn test_external_marker_policy() {
    let presenter = RecordingPresenter::default();
    let config = Configuration {
        initial_marker: InitialMarker::External,
        ..Configuration::default()
    };
    let mut controller =
        RotationController::with_config(vec![10, 20], presenter.clone(), &config).unwrap();

    // Nothing is touched until the first tick.
    assert!(presenter.active().is_empty());
    assert_eq!(controller.cursor(), 0);

    controller.advance();
    assert_eq!(presenter.active(), vec![20]);
    assert_eq!(presenter.calls(), vec![Call::Clear(10), Call::Set(20)]);
}

#[test]
fn test_empty_sequence_is_not_an_error() {
    let (mut controller, presenter) = init_controller(Vec::<u32>::new());

    for _ in 0..100 {
        assert_eq!(controller.advance(), None);
    }
    assert!(presenter.calls().is_empty());
    assert!(controller.is_empty());
    assert_eq!(controller.len(), 0);
}

#[test]
fn test_source_failure() {
    let result = RotationController::initialize(
        DetachedSource,
        RecordingPresenter::default(),
        InitialMarker::Apply,
    );
    assert_eq!(result.err(), Some(Error::SourceUnavailable));
}

#[test]
fn test_independent_controllers() {
    let (mut first, first_presenter) = init_controller(vec![1, 2, 3]);
    let (mut second, second_presenter) = init_controller(vec![1, 2, 3]);

    first.advance();
    first.advance();
    second.advance();

    assert_eq!(first_presenter.active(), vec![3]);
    assert_eq!(second_presenter.active(), vec![2]);
}

#[test]
fn test_into_parts() {
    let (mut controller, _presenter) = init_controller(vec!['a', 'b']);
    controller.advance();

    let (elements, presenter) = controller.into_parts();
    assert_eq!(elements, vec!['a', 'b']);
    assert_eq!(presenter.active(), vec!['b']);
}
