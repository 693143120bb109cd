use edit_coach::{
    BuiltinCatalog, Coach, CoachConfig, CoachError, EditEvaluator, EditEvent, EvaluatorRegistry,
    FeatureConfig, FeatureId, ManualClock, Notification, Platform, RecordingSink, RopeBuffer,
    SuggestionCategory, TextBufferView,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn coach_with(
    config: &CoachConfig,
    clock: &ManualClock,
) -> Coach<BuiltinCatalog, RecordingSink> {
    Coach::from_config(
        config,
        &EvaluatorRegistry::with_defaults(),
        Arc::new(clock.clone()),
        BuiltinCatalog::for_platform(Platform::Mac),
        RecordingSink::new(),
    )
    .unwrap()
}

fn comment(
    coach: &mut Coach<BuiltinCatalog, RecordingSink>,
    buffer: &mut RopeBuffer,
    line: usize,
) -> Vec<FeatureId> {
    let event = buffer.insert_at(line, 0, "//").unwrap();
    coach.on_edit(&*buffer, &event)
}

fn buffer() -> RopeBuffer {
    RopeBuffer::from_text("a();\nb();\nc();\nd();\ne();\nf();")
}

#[test]
fn test_notifies_block_comment_suggestion() {
    let clock = ManualClock::new();
    let mut coach = coach_with(&CoachConfig::default(), &clock);
    let mut buffer = buffer();

    assert!(comment(&mut coach, &mut buffer, 0).is_empty());
    clock.advance(ms(300));
    assert_eq!(
        comment(&mut coach, &mut buffer, 1),
        vec![FeatureId::BlockComment]
    );

    let notifications = coach.sink().notifications();
    assert_eq!(notifications.len(), 1);
    let suggestion = notifications[0].suggestion.as_ref().unwrap();
    assert_eq!(suggestion.text, "Try using 'CMD + /' to comment several lines.");
    assert_eq!(suggestion.category, SuggestionCategory::Hotkey);
    assert!(coach.has_shown(FeatureId::BlockComment));
}

#[test]
fn test_one_shot_until_reset() {
    let clock = ManualClock::new();
    let mut coach = coach_with(&CoachConfig::default(), &clock);
    let mut buffer = buffer();

    comment(&mut coach, &mut buffer, 0);
    clock.advance(ms(300));
    assert_eq!(comment(&mut coach, &mut buffer, 1).len(), 1);
    clock.advance(ms(300));
    assert!(comment(&mut coach, &mut buffer, 2).is_empty());
    assert_eq!(coach.sink().notifications().len(), 1);

    coach.reset_notifications();
    clock.advance(ms(300));
    assert_eq!(
        comment(&mut coach, &mut buffer, 3),
        vec![FeatureId::BlockComment]
    );
    assert_eq!(coach.sink().notifications().len(), 2);
}

#[test]
fn test_repeat_notifications_when_not_one_shot() {
    let clock = ManualClock::new();
    let config = CoachConfig {
        one_shot: false,
        ..CoachConfig::default()
    };
    let mut coach = coach_with(&config, &clock);
    let mut buffer = buffer();

    comment(&mut coach, &mut buffer, 0);
    for line in 1..4 {
        clock.advance(ms(300));
        comment(&mut coach, &mut buffer, line);
    }
    assert_eq!(
        coach.sink().features(),
        vec![FeatureId::BlockComment; 3]
    );
}

#[test]
fn test_reset_clears_evaluator_state() {
    let clock = ManualClock::new();
    let mut coach = coach_with(&CoachConfig::default(), &clock);
    let mut buffer = buffer();

    comment(&mut coach, &mut buffer, 0);
    coach.reset();
    clock.advance(ms(300));
    assert!(comment(&mut coach, &mut buffer, 1).is_empty());
}

/// Fires on every non-empty insertion; stands in for a second, unrelated feature.
struct EveryInsertion(FeatureId);

impl EditEvaluator for EveryInsertion {
    fn feature(&self) -> FeatureId {
        self.0
    }

    fn on_edit(&mut self, _buffer: &dyn TextBufferView, event: &EditEvent) -> bool {
        !event.is_empty()
    }
}

#[test]
fn test_evaluators_run_independently() {
    let clock = ManualClock::new();
    let mut registry = EvaluatorRegistry::with_defaults();
    registry.register(FeatureId::TrailingWhitespace, |params| {
        Box::new(EveryInsertion(params.feature))
    });

    let config = CoachConfig {
        features: vec![
            FeatureConfig::block_comment(),
            FeatureConfig::with_marker(FeatureId::TrailingWhitespace, "-"),
        ],
        ..CoachConfig::default()
    };
    let mut coach = Coach::from_config(
        &config,
        &registry,
        Arc::new(clock.clone()),
        BuiltinCatalog::for_platform(Platform::Windows),
        RecordingSink::new(),
    )
    .unwrap();
    let mut buffer = buffer();

    assert_eq!(
        coach.features(),
        vec![FeatureId::BlockComment, FeatureId::TrailingWhitespace]
    );
    assert_eq!(
        comment(&mut coach, &mut buffer, 0),
        vec![FeatureId::TrailingWhitespace]
    );
    clock.advance(ms(300));
    assert_eq!(
        comment(&mut coach, &mut buffer, 1),
        vec![FeatureId::BlockComment]
    );

    let texts: Vec<_> = coach
        .sink()
        .notifications()
        .iter()
        .map(|n| n.text().to_string())
        .collect();
    assert_eq!(
        texts,
        vec![
            "Automatically remove trailing white spaces on save".to_string(),
            "Try using 'CTRL + /' to comment several lines.".to_string(),
        ]
    );
}

#[test]
fn test_closure_sink() {
    let clock = ManualClock::new();
    let mut received = Vec::new();
    {
        let sink = |n: Notification| received.push(n.feature);
        let evaluators = EvaluatorRegistry::with_defaults()
            .build(&CoachConfig::default(), Arc::new(clock.clone()))
            .unwrap();
        let mut coach = Coach::new(evaluators, BuiltinCatalog::new(), sink);
        let mut buffer = buffer();

        let event = buffer.insert_at(2, 0, "//").unwrap();
        coach.on_edit(&buffer, &event);
        clock.advance(ms(300));
        let event = buffer.insert_at(3, 0, "//").unwrap();
        coach.on_edit(&buffer, &event);
    }
    assert_eq!(received, vec![FeatureId::BlockComment]);
}

#[test]
fn test_missing_catalog_entry_still_notifies() {
    struct EmptyCatalog;
    impl edit_coach::SuggestionCatalog for EmptyCatalog {
        fn suggestion(&self, _id: FeatureId) -> Option<&edit_coach::Suggestion> {
            None
        }
    }

    let clock = ManualClock::new();
    let evaluators = EvaluatorRegistry::with_defaults()
        .build(&CoachConfig::default(), Arc::new(clock.clone()))
        .unwrap();
    let mut coach = Coach::new(evaluators, EmptyCatalog, RecordingSink::new());
    let mut buffer = buffer();

    let event = buffer.insert_at(0, 0, "//").unwrap();
    coach.on_edit(&buffer, &event);
    clock.advance(ms(300));
    let event = buffer.insert_at(1, 0, "//").unwrap();
    coach.on_edit(&buffer, &event);

    let notifications = coach.sink_mut().take();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].suggestion, None);
    assert_eq!(notifications[0].text(), "blockCommentSuggestion");
    assert!(coach.sink().notifications().is_empty());
}

#[test]
fn test_unregistered_feature_is_an_error() {
    let config = CoachConfig {
        features: vec![FeatureConfig::with_marker(FeatureId::GetterSetter, "get")],
        ..CoachConfig::default()
    };
    let result = Coach::from_config(
        &config,
        &EvaluatorRegistry::with_defaults(),
        Arc::new(ManualClock::new()),
        BuiltinCatalog::new(),
        RecordingSink::new(),
    );
    assert!(matches!(
        result,
        Err(CoachError::UnregisteredFeature(FeatureId::GetterSetter))
    ));
}

#[test]
fn test_disabled_feature_is_skipped() {
    let mut feature = FeatureConfig::block_comment();
    feature.enabled = false;
    let config = CoachConfig {
        features: vec![feature],
        ..CoachConfig::default()
    };
    let coach = coach_with(&config, &ManualClock::new());
    assert!(coach.features().is_empty());
}
