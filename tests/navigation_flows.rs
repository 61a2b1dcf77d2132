//! Navigation Flow Integration Tests
//!
//! Exercises the coordinator tree with the screen view-models on top:
//! tab navigation, child flows, deep links and flow tear-down.

use chrono::{TimeZone, Utc};
use isalah::app_core::DateConverter;
use isalah::app_state::SavedLocation;
use isalah::app_ui::coordinator::{Coordinator, NullPresenter, RecordingPresenter, Transition};
use isalah::app_ui::navigation::{
    DeepLink, Flow, MainTarget, NavigationError, OnboardingTarget, QuranTarget, Router,
    SettingsTarget,
};
use isalah::app_ui::screens::{
    HomeViewModel, LocationViewModel, OnboardingViewModel, QuranViewModel, SettingsViewModel,
};
use std::sync::Arc;
use std::time::Duration;

/// Navigating to settings twice publishes once and re-presents once
#[test]
fn test_navigate_to_settings_is_idempotent() {
    isalah::init_logging("warn");

    let presenter = Arc::new(RecordingPresenter::<MainTarget>::new());
    let main = Coordinator::<MainTarget>::new(presenter.clone());
    let mut rx = main.subscribe();

    main.navigate(MainTarget::Settings);
    assert_eq!(main.current(), MainTarget::Settings);
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), MainTarget::Settings);

    main.navigate(MainTarget::Settings);
    assert_eq!(main.current(), MainTarget::Settings);
    assert!(!rx.has_changed().unwrap());
    assert_eq!(main.depth(), 2);

    let transitions: Vec<_> = presenter.presentations().iter().map(|p| p.transition).collect();
    assert_eq!(
        transitions,
        vec![Transition::Present, Transition::Push, Transition::Refresh]
    );
}

/// Home -> Settings -> Location, pick a city, then close the settings flow
#[test]
fn test_settings_location_journey() {
    let main = Coordinator::<MainTarget>::new(Arc::new(NullPresenter));
    let home = HomeViewModel::new(main.clone(), DateConverter::default());
    home.refresh(&Utc.with_ymd_and_hms(2025, 3, 13, 9, 0, 0).unwrap());
    assert_eq!(home.hijri_date.get(), "13 Ramadan 1446");

    let settings_presenter = Arc::new(RecordingPresenter::<SettingsTarget>::new());
    let settings = home.open_settings(settings_presenter.clone());
    let settings_vm = SettingsViewModel::new(settings.clone());
    settings_vm.open_location();

    let medina =
        SavedLocation::new("Medina", "Saudi Arabia", 24.4709, 39.6122, "Asia/Riyadh").unwrap();
    let location = LocationViewModel::new(settings.clone(), vec![medina.clone()]);
    location.show_sheet();
    location.set_query("med");
    assert_eq!(location.results(), vec![medina.clone()]);
    location.select(medina.clone());
    assert!(!location.is_location_sheet_active.get());
    assert_eq!(location.selected.get(), Some(medina));

    location.done();
    assert_eq!(settings.current(), SettingsTarget::Root);
    assert_eq!(
        settings_presenter.last().map(|p| p.transition),
        Some(Transition::Pop)
    );

    assert!(main.dismiss_child(Flow::Settings));
    assert!(!settings.is_active());
    assert!(main.is_active());
    assert!(main.child::<SettingsTarget>().is_none());
}

/// Dispatch a parsed deep link into the coordinator tree
fn open_link(main: &Arc<Coordinator<MainTarget>>, link: DeepLink) {
    match link {
        DeepLink::Main(target) => main.navigate(target),
        DeepLink::Settings(target) => {
            main.navigate(MainTarget::Settings);
            main.present_child::<SettingsTarget>(Arc::new(NullPresenter))
                .navigate(target);
        }
        DeepLink::Quran(target) => {
            main.navigate(MainTarget::Quran);
            main.present_child::<QuranTarget>(Arc::new(NullPresenter))
                .navigate(target);
        }
        DeepLink::Onboarding(target) => {
            main.present_child::<OnboardingTarget>(Arc::new(NullPresenter))
                .navigate(target);
        }
    }
}

#[test]
fn test_deep_links_drive_child_flows() {
    let router = Router::new();
    let main = Coordinator::<MainTarget>::new(Arc::new(NullPresenter));

    open_link(&main, router.match_path("/quran/surah/18?ayah=10").unwrap());
    let quran = main.child::<QuranTarget>().unwrap();
    assert_eq!(main.current(), MainTarget::Quran);
    assert_eq!(
        quran.current(),
        QuranTarget::Surah {
            number: 18,
            ayah: Some(10)
        }
    );

    open_link(&main, router.match_path("/settings/accessibility").unwrap());
    assert_eq!(main.child_flows(), vec![Flow::Quran, Flow::Settings]);

    open_link(&main, router.match_path("/tasbeeh").unwrap());
    assert_eq!(main.current(), MainTarget::Tasbeeh);

    assert_eq!(
        router.match_path("/quran/surah/115"),
        Err(NavigationError::InvalidParameter {
            name: "number".to_string(),
            value: "115".to_string()
        })
    );
    assert!(matches!(
        router.match_path("/nowhere"),
        Err(NavigationError::UnknownPath(_))
    ));
}

#[test]
fn test_quran_bookmarks_flow() {
    let main = Coordinator::<MainTarget>::new(Arc::new(NullPresenter));
    let home = HomeViewModel::new(main.clone(), DateConverter::default());
    let quran = home.open_quran(Arc::new(NullPresenter));
    let vm = QuranViewModel::new(quran.clone(), [112]);

    vm.set_query("kahf");
    let kahf = vm.surahs()[0];
    vm.toggle_bookmark(kahf.number);
    vm.open_bookmarks();

    let names: Vec<_> = vm.bookmarked_surahs().iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Al-Kahf", "Al-Ikhlas"]);
    assert_eq!(quran.current(), QuranTarget::Bookmarks);

    vm.open_surah(kahf.number);
    assert_eq!(
        quran.history(),
        vec![
            QuranTarget::SurahList,
            QuranTarget::Bookmarks,
            QuranTarget::Surah {
                number: 18,
                ayah: None
            }
        ]
    );
}

/// Tearing down a parent deactivates the whole subtree
#[test]
fn test_tear_down_is_recursive() {
    let main = Coordinator::<MainTarget>::new(Arc::new(NullPresenter));
    let onboarding = main.present_child::<OnboardingTarget>(Arc::new(NullPresenter));
    let settings = onboarding.present_child::<SettingsTarget>(Arc::new(NullPresenter));

    main.tear_down();
    assert!(!main.is_active());
    assert!(!onboarding.is_active());
    assert!(!settings.is_active());
    assert!(main.child_flows().is_empty());
}

/// A screen awaiting the current target wakes on navigation
#[tokio::test]
async fn test_subscriber_wakes_on_onboarding_progress() {
    let coordinator = Coordinator::<OnboardingTarget>::new(Arc::new(NullPresenter));
    let vm = OnboardingViewModel::new(coordinator.clone());
    let mut rx = coordinator.subscribe();

    let waiter = tokio::spawn(async move {
        rx.changed().await.unwrap();
        *rx.borrow_and_update()
    });

    vm.next();
    let seen = tokio::time::timeout(Duration::from_secs(1), waiter)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(seen, OnboardingTarget::Location);

    vm.skip();
    assert!(vm.completed.get());
}
