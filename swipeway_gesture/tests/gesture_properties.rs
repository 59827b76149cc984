// Copyright 2025 the Swipeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for release decisions.

use kurbo::Point;
use proptest::prelude::*;
use swipeway_gesture::{GestureConfig, GestureController, TransitionOutcome};
use swipeway_routes::{Committer, RouteRegistry};

fn registry(len: usize, index: usize) -> RouteRegistry {
    let routes: Vec<String> = (0..len).map(|i| format!("/page/{i}")).collect();
    let mut registry = RouteRegistry::with_routes(routes, None);
    registry.set_index(index);
    registry
}

fn release(
    controller: &mut GestureController,
    registry: &mut RouteRegistry,
    width: f64,
    dx: f64,
) -> (Option<usize>, TransitionOutcome) {
    let mut committer = Committer::new(|_: &str| {});
    controller.on_down(Point::new(0.0, 500.0));
    controller.on_move(Point::new(dx, 500.0));
    let release = controller.on_up(width, registry).expect("contact was tracked");
    let outcome = controller.on_transition_end(release.transition, registry, &mut committer);
    (release.target, outcome)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Crossing `max(px, width * fraction)` commits to the available neighbor; anything
    /// within the bound snaps back without mutating the registry.
    #[test]
    fn threshold_decides_commit(
        len in 1_usize..6,
        index in 0_usize..6,
        width in 100.0_f64..2000.0,
        threshold_px in 0.0_f64..300.0,
        threshold_fraction in 0.0_f64..1.0,
        dx in -2500.0_f64..2500.0,
    ) {
        let index = index % len;
        let config = GestureConfig { threshold_px, threshold_fraction, ..GestureConfig::default() };
        let mut controller = GestureController::new(config).unwrap();
        let mut registry = registry(len, index);
        let next = registry.next_index();
        let prev = registry.prev_index();
        let bound = threshold_px.max(width * threshold_fraction);

        let (target, outcome) = release(&mut controller, &mut registry, width, dx);

        if dx < -bound && next.is_some() {
            prop_assert_eq!(target, next);
            prop_assert!(matches!(outcome, TransitionOutcome::Committed(_)));
            prop_assert_eq!(Some(registry.index()), next);
        } else if dx > bound && prev.is_some() {
            prop_assert_eq!(target, prev);
            prop_assert!(matches!(outcome, TransitionOutcome::Committed(_)));
            prop_assert_eq!(Some(registry.index()), prev);
        } else {
            prop_assert_eq!(target, None);
            prop_assert_eq!(outcome, TransitionOutcome::SnappedBack);
            prop_assert_eq!(registry.index(), index);
        }
        prop_assert!(controller.style().is_neutral());
    }

    /// Once a sample shows `|dy| > |dx|`, no later sample in the session can commit.
    #[test]
    fn vertical_intent_never_commits(
        lock_dx in -50.0_f64..50.0,
        extra_dy in 1.0_f64..100.0,
        later in prop::collection::vec((-3000.0_f64..3000.0, -50.0_f64..50.0), 0..8),
    ) {
        let mut registry = registry(3, 1);
        let mut controller = GestureController::default();

        controller.on_down(Point::new(0.0, 0.0));
        let lock_dy = lock_dx.abs() + extra_dy;
        controller.on_move(Point::new(lock_dx, lock_dy));
        prop_assert!(controller.is_axis_locked());
        for (dx, dy) in later {
            let effects = controller.on_move(Point::new(dx, dy));
            prop_assert!(effects.is_empty());
        }

        let release = controller.on_up(800.0, &registry).unwrap();
        prop_assert_eq!(release.target, None);
        prop_assert_eq!(release.offset, 0.0);

        let mut committer = Committer::new(|_: &str| {});
        let outcome = controller.on_transition_end(release.transition, &mut registry, &mut committer);
        prop_assert_eq!(outcome, TransitionOutcome::SnappedBack);
        prop_assert_eq!(registry.index(), 1);
    }

    /// At the ends of the sequence, swipes toward the missing neighbor always snap back.
    #[test]
    fn boundaries_saturate(len in 1_usize..6, dx in 0.0_f64..5000.0) {
        let mut first = registry(len, 0);
        let mut controller = GestureController::default();
        let (target, _) = release(&mut controller, &mut first, 800.0, dx);
        prop_assert_eq!(target, None);
        prop_assert_eq!(first.index(), 0);

        let mut last = registry(len, len - 1);
        let (target, _) = release(&mut controller, &mut last, 800.0, -dx);
        prop_assert_eq!(target, None);
        prop_assert_eq!(last.index(), len - 1);
    }
}
